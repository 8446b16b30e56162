pub mod xml;

pub use xml::{AttributeValue, Element, LayoutError, LayoutParser};
