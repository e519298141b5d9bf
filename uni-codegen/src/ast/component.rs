//! Component type alias builder.

use super::Field;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A `type TFoo = TComponent<{ ...props }, {}>;` declaration.
///
/// `helper` is the generic component type from the preamble; the second
/// type argument (emits) is always empty.
#[derive(Debug, Clone)]
pub struct ComponentAlias {
    name: String,
    helper: String,
    doc: Option<String>,
    props: Vec<Field>,
}

impl ComponentAlias {
    pub fn new(name: impl Into<String>, helper: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            helper: helper.into(),
            doc: None,
            props: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn prop(mut self, field: Field) -> Self {
        self.props.push(field);
        self
    }

    pub fn props(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.props.extend(fields);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ComponentAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        if self.props.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "type {} = {}<{{}}, {{}}>;",
                self.name, self.helper
            )));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("type {} = {}<{{", self.name, self.helper),
                body: self.props.iter().flat_map(Field::to_fragments).collect(),
                close: Some("}, {}>;".to_string()),
            });
        }

        fragments
    }
}
