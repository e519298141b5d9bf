//! TypeScript interface builder.

use super::Field;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    fields: Vec<Field>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))];
        }

        vec![CodeFragment::Block {
            header: format!("{}interface {} {{", export, self.name),
            body: self.fields.iter().flat_map(Field::to_fragments).collect(),
            close: Some("}".to_string()),
        }]
    }
}
