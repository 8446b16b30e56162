mod file_finder;

pub use file_finder::{is_layout_name, LayoutFile, LayoutFinder};
