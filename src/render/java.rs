use super::SyntaxTemplate;
use crate::extract::ViewInfo;

/// Java output: private fields and a `void bindView(View)` method
pub struct JavaTemplate;

impl SyntaxTemplate for JavaTemplate {
    fn extension(&self) -> &'static str {
        "java"
    }

    fn declaration(&self, view: &ViewInfo) -> String {
        format!("private {} {};", view.class_name, view.id)
    }

    fn binding(&self, view: &ViewInfo) -> String {
        format!("{id} = view.findViewById(R.id.{id});", id = view.id)
    }

    fn function_header(&self) -> &'static str {
        "public void bindView(View view)"
    }
}
