//! Ambient module declaration builder.

use super::quote;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// `declare module 'name' { ... }`, used to augment another module's types.
#[derive(Debug, Clone)]
pub struct ModuleDeclaration {
    module: String,
    body: Vec<Vec<CodeFragment>>,
}

impl ModuleDeclaration {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            body: Vec::new(),
        }
    }

    /// Add a body element.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ModuleDeclaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(fragments.iter().cloned());
        }

        vec![CodeFragment::Block {
            header: format!("declare module {} {{", quote(&self.module)),
            body,
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Interface;

    #[test]
    fn test_module_augmentation() {
        let m = ModuleDeclaration::new("vue")
            .add(Interface::new("GlobalComponents").field("MyTag", "TMyTag"))
            .build();

        assert_eq!(
            m,
            "declare module 'vue' {\n  export interface GlobalComponents {\n    MyTag: TMyTag;\n  }\n}\n"
        );
    }

    #[test]
    fn test_empty_module() {
        let m = ModuleDeclaration::new("@vue/runtime-core").build();
        assert_eq!(m, "declare module '@vue/runtime-core' {\n}\n");
    }
}
