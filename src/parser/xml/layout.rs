use super::element::{AttributeValue, Attributes, Element};
use miette::Diagnostic;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while turning layout XML into an element tree
#[derive(Error, Diagnostic, Debug)]
pub enum LayoutError {
    #[error("Malformed XML in {} at byte {position}: {source}", .path.display())]
    #[diagnostic(code(layoutbind::layout::xml))]
    Xml {
        path: PathBuf,
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("No root element in {}", .path.display())]
    #[diagnostic(code(layoutbind::layout::no_root), help("a layout file needs exactly one top-level view"))]
    NoRootElement { path: PathBuf },

    #[error("Unexpected second root element <{name}> in {}", .path.display())]
    #[diagnostic(code(layoutbind::layout::multiple_roots))]
    MultipleRoots { path: PathBuf, name: String },

    #[error("Element <{name}> is never closed in {}", .path.display())]
    #[diagnostic(code(layoutbind::layout::unclosed))]
    UnclosedElement { path: PathBuf, name: String },
}

/// Parser for Android layout XML files
pub struct LayoutParser;

impl LayoutParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a layout XML document into its root element
    pub fn parse(&self, path: &Path, contents: &str) -> Result<Element, LayoutError> {
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    open.push(Self::element_from(e));
                }
                Ok(Event::Empty(ref e)) => {
                    let element = Self::element_from(e);
                    Self::attach(path, &mut open, &mut root, element)?;
                }
                Ok(Event::End(_)) => {
                    // Mismatched end tags are rejected by the reader itself
                    if let Some(element) = open.pop() {
                        Self::attach(path, &mut open, &mut root, element)?;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(LayoutError::Xml {
                        path: path.to_path_buf(),
                        position: reader.buffer_position(),
                        source: e,
                    });
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(mut element) = open.pop() {
            return Err(LayoutError::UnclosedElement {
                path: path.to_path_buf(),
                name: std::mem::take(&mut element.name),
            });
        }

        let root = root.ok_or_else(|| LayoutError::NoRootElement {
            path: path.to_path_buf(),
        })?;

        debug!(
            "Parsed layout {}: {} elements under {}",
            path.display(),
            root.subtree_len(),
            root
        );

        Ok(root)
    }

    /// Build an element (without children) from a start or empty tag
    fn element_from(tag: &BytesStart) -> Element {
        let name = String::from_utf8_lossy(tag.name().as_ref()).to_string();

        let mut attributes = Attributes::new();
        for attr in tag.attributes().filter_map(|a| a.ok()) {
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = match attr.unescape_value() {
                Ok(text) => AttributeValue::Text(text.into_owned()),
                Err(e) => {
                    trace!("Attribute {} on <{}> is not text: {:?}", key, name, e);
                    AttributeValue::Raw(attr.value.to_vec())
                }
            };
            attributes.insert(key, value);
        }

        Element {
            name,
            attributes: (!attributes.is_empty()).then_some(attributes),
            children: Vec::new(),
        }
    }

    /// Hand a finished element to its parent, or make it the root
    fn attach(
        path: &Path,
        open: &mut [Element],
        root: &mut Option<Element>,
        mut element: Element,
    ) -> Result<(), LayoutError> {
        if let Some(parent) = open.last_mut() {
            parent.children.push(element);
            return Ok(());
        }

        if root.is_some() {
            return Err(LayoutError::MultipleRoots {
                path: path.to_path_buf(),
                name: std::mem::take(&mut element.name),
            });
        }

        *root = Some(element);
        Ok(())
    }
}

impl Default for LayoutParser {
    fn default() -> Self {
        Self::new()
    }
}
