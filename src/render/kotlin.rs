use super::SyntaxTemplate;
use crate::extract::ViewInfo;

/// Kotlin output: `lateinit` properties and a `fun bindView`
pub struct KotlinTemplate;

impl SyntaxTemplate for KotlinTemplate {
    fn extension(&self) -> &'static str {
        "kt"
    }

    fn declaration(&self, view: &ViewInfo) -> String {
        format!("private lateinit var {}: {}", view.id, view.class_name)
    }

    fn binding(&self, view: &ViewInfo) -> String {
        format!("{id} = view.findViewById(R.id.{id})", id = view.id)
    }

    fn function_header(&self) -> &'static str {
        "fun bindView(view: View)"
    }
}
