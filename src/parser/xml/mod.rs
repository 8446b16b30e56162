mod element;
mod layout;

pub use element::{AttributeValue, Attributes, Element};
pub use layout::{LayoutError, LayoutParser};
