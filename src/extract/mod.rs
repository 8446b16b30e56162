//! View-info extraction
//!
//! Walks a parsed layout and collects one [`ViewInfo`] per element that
//! carries a usable `android:id`. Entries come out in pre-order: an element
//! precedes all of its descendants, and siblings keep document order.

use crate::parser::Element;
use serde::Serialize;

/// Attribute that names a view for binding
pub const ANDROID_ID_KEY: &str = "android:id";

/// Prefix stripped from identifier values
pub const ID_PREFIX: &str = "@+id/";

/// A view worth generating a field and binding for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewInfo {
    /// View type, taken verbatim from the tag name
    pub class_name: String,

    /// Identifier with the `@+id/` prefix removed
    pub id: String,
}

impl ViewInfo {
    pub fn new(class_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            id: id.into(),
        }
    }
}

/// Remove a leading `@+id/`; values without it are returned unchanged
pub fn strip_id_prefix(value: &str) -> &str {
    value.strip_prefix(ID_PREFIX).unwrap_or(value)
}

/// The identifier this element would be bound by, if any.
///
/// An element has a usable identifier when its tag name is non-empty and its
/// `android:id` attribute is present, is text, and is non-empty once the
/// `@+id/` prefix is removed.
pub fn usable_id(element: &Element) -> Option<&str> {
    if element.name.is_empty() {
        return None;
    }

    let id = strip_id_prefix(element.attribute(ANDROID_ID_KEY)?.as_text()?);
    (!id.is_empty()).then_some(id)
}

/// Whether [`usable_id`] yields an identifier for this element
pub fn has_usable_id(element: &Element) -> bool {
    usable_id(element).is_some()
}

/// Collect view info for `root` and all of its descendants, in pre-order.
///
/// Never fails; elements without a usable identifier are skipped but their
/// children are still visited. Duplicate identifiers are kept.
pub fn extract_view_info(root: &Element) -> Vec<ViewInfo> {
    let mut result = Vec::new();
    let mut pending = vec![root];

    while let Some(element) = pending.pop() {
        if let Some(id) = usable_id(element) {
            result.push(ViewInfo::new(element.name.as_str(), id));
        }
        // Reversed so the first child is visited next
        pending.extend(element.children.iter().rev());
    }

    result
}
