use std::fmt;

/// Value of a single XML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Value decoded and unescaped as UTF-8 text
    Text(String),

    /// Value that could not be decoded as text
    Raw(Vec<u8>),
}

impl AttributeValue {
    /// Return the value as a string, or `None` if it is not text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s.as_str()),
            AttributeValue::Raw(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

/// Attributes of an element, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing an earlier value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A node of a parsed layout.
///
/// Each element owns its children outright. An element that was written
/// without any attributes has `attributes == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, e.g. `TextView` or `com.example.CustomView`
    pub name: String,

    /// Attributes, if the tag declared any
    pub attributes: Option<Attributes>,

    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: None,
            children: Vec::new(),
        }
    }

    /// Builder: add an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(key, value);
        self
    }

    /// Builder: append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute by its qualified name (e.g. `android:id`)
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.as_ref()?.get(key)
    }

    /// Total number of elements in this subtree, including `self`
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(element) = pending.pop() {
            count += 1;
            pending.extend(element.children.iter());
        }
        count
    }
}

impl Drop for Element {
    // Flatten the subtree first so deep layouts don't recurse on drop
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        if let Some(attrs) = &self.attributes {
            for (key, value) in attrs.iter() {
                match value {
                    AttributeValue::Text(s) => write!(f, " {}=\"{}\"", key, s)?,
                    AttributeValue::Raw(bytes) => write!(f, " {}=<{} bytes>", key, bytes.len())?,
                }
            }
        }
        if self.children.is_empty() {
            write!(f, "/>")
        } else {
            write!(f, ">…</{}>", self.name)
        }
    }
}
