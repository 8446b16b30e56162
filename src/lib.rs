//! layoutbind - view-binding code generation for Android layouts (Kotlin/Java)
//!
//! For every layout XML file, emits field declarations for each view that has
//! an `android:id` and a `bindView` function assigning them with
//! `findViewById`.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Discovery** - Find layout `.xml` files
//! 2. **Parsing** - Build an element tree with quick-xml
//! 3. **Extraction** - Collect `(class, id)` pairs in pre-order
//! 4. **Rendering** - Format declarations and bindings in Kotlin or Java
//! 5. **Reporting** - Summarize the run

pub mod config;
pub mod discovery;
pub mod extract;
pub mod generate;
pub mod parser;
pub mod render;
pub mod report;
pub mod watch;

pub use config::Config;
pub use discovery::{LayoutFile, LayoutFinder};
pub use extract::{extract_view_info, has_usable_id, usable_id, ViewInfo};
pub use generate::{GenerateError, GenerationSummary, Generator};
pub use parser::{AttributeValue, Element, LayoutError, LayoutParser};
pub use render::{render, BindingRenderer, OutputSyntax, SyntaxTemplate};
pub use report::{ReportFormat, Reporter};
