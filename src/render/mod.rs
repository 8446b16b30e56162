mod java;
mod kotlin;

pub use java::JavaTemplate;
pub use kotlin::KotlinTemplate;

use crate::extract::ViewInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Indentation of statements inside the binding function
const BODY_INDENT: &str = "    ";

/// Target syntax for generated code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputSyntax {
    #[default]
    #[serde(rename = "kt", alias = "kotlin")]
    Kotlin,
    #[serde(rename = "java")]
    Java,
}

impl OutputSyntax {
    /// Every supported syntax
    pub const ALL: [OutputSyntax; 2] = [OutputSyntax::Kotlin, OutputSyntax::Java];

    /// Formatting rules for this syntax
    pub fn template(self) -> &'static dyn SyntaxTemplate {
        match self {
            OutputSyntax::Kotlin => &KotlinTemplate,
            OutputSyntax::Java => &JavaTemplate,
        }
    }

    /// File extension of generated files
    pub fn extension(self) -> &'static str {
        self.template().extension()
    }
}

impl fmt::Display for OutputSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Formatting rules of one output syntax
pub trait SyntaxTemplate: Send + Sync {
    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Field declaration for one view
    fn declaration(&self, view: &ViewInfo) -> String;

    /// Statement assigning the field from `view.findViewById`
    fn binding(&self, view: &ViewInfo) -> String;

    /// Signature of the binding function, without the opening brace
    fn function_header(&self) -> &'static str;
}

/// Renders extracted views in one syntax.
///
/// The template is picked once at construction, not per view.
#[derive(Clone, Copy)]
pub struct BindingRenderer {
    syntax: OutputSyntax,
    template: &'static dyn SyntaxTemplate,
}

impl BindingRenderer {
    pub fn new(syntax: OutputSyntax) -> Self {
        Self {
            syntax,
            template: syntax.template(),
        }
    }

    pub fn syntax(&self) -> OutputSyntax {
        self.syntax
    }

    /// One declaration per view, joined by newlines
    pub fn declarations(&self, views: &[ViewInfo]) -> String {
        views
            .iter()
            .map(|v| self.template.declaration(v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One binding statement per view, joined by newlines
    pub fn bindings(&self, views: &[ViewInfo]) -> String {
        views
            .iter()
            .map(|v| self.template.binding(v))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full output: declarations, a blank line, then the binding function
    pub fn render(&self, views: &[ViewInfo]) -> String {
        let mut out = String::new();

        if !views.is_empty() {
            out.push_str(&self.declarations(views));
            out.push_str("\n\n");
        }

        out.push_str(self.template.function_header());
        out.push_str(" {\n");
        for view in views {
            out.push_str(BODY_INDENT);
            out.push_str(&self.template.binding(view));
            out.push('\n');
        }
        out.push_str("}\n");

        out
    }
}

impl fmt::Debug for BindingRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingRenderer")
            .field("syntax", &self.syntax)
            .finish()
    }
}

/// Render `views` in `syntax`
pub fn render(views: &[ViewInfo], syntax: OutputSyntax) -> String {
    BindingRenderer::new(syntax).render(views)
}
