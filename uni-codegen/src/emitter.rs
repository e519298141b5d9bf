//! Declaration file assembly.

use unidts_catalog::TypeScriptConfig;

use crate::{
    CodeFile,
    ast::{Import, Interface, ModuleDeclaration, TypeAlias},
    resolve::TagDeclaration,
};

/// Generic component type every tag alias is built on.
pub const COMPONENT_HELPER: &str = "TComponent";

/// Props shared by every component.
pub const PUBLIC_PROPS: &str = "PublicProps";

/// Type names the preamble declares; generated aliases must avoid them.
pub const RESERVED_TYPE_NAMES: [&str; 2] = [COMPONENT_HELPER, PUBLIC_PROPS];

/// Interface augmented with one entry per tag.
pub const REGISTRY_INTERFACE: &str = "GlobalComponents";

const HELPER_IMPORTS: [&str; 9] = [
    "DefineComponent",
    "ComputedOptions",
    "MethodOptions",
    "ComponentOptionsMixin",
    "VNodeProps",
    "AllowedComponentProps",
    "ComponentCustomProps",
    "ExtractPropTypes",
    "EmitsOptions",
];

/// The `import type { ... }` line of the preamble.
pub fn preamble_import(typescript: &TypeScriptConfig) -> Import {
    Import::new(&typescript.import_module)
        .named_all(HELPER_IMPORTS)
        .type_only()
}

/// `PublicProps` and the generic `TComponent<P, E>` helper.
pub fn preamble_types() -> [TypeAlias; 2] {
    [
        TypeAlias::new(
            PUBLIC_PROPS,
            "VNodeProps & AllowedComponentProps & ComponentCustomProps",
        ),
        TypeAlias::new(
            format!("{COMPONENT_HELPER}<P extends Record<string, any>, E extends EmitsOptions>"),
            format!(
                "DefineComponent<{{}}, {{}}, {{}}, ComputedOptions, MethodOptions, ComponentOptionsMixin, ComponentOptionsMixin, E, string, {PUBLIC_PROPS}, Readonly<ExtractPropTypes<P>>>"
            ),
        ),
    ]
}

/// The `declare module` block registering every tag as a global component.
pub fn registry(declarations: &[TagDeclaration], typescript: &TypeScriptConfig) -> ModuleDeclaration {
    let interface = declarations
        .iter()
        .fold(Interface::new(REGISTRY_INTERFACE), |interface, decl| {
            interface.field(&decl.component, &decl.identifier)
        });
    ModuleDeclaration::new(&typescript.augment_module).add(interface)
}

/// Render the complete declaration file.
pub fn render_document(declarations: &[TagDeclaration], typescript: &TypeScriptConfig) -> String {
    CodeFile::new()
        .import(preamble_import(typescript))
        .add_all(preamble_types())
        .add_all(declarations.iter().map(|decl| decl.to_alias(COMPONENT_HELPER)))
        .add(registry(declarations, typescript))
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ResolvedAttribute;

    fn declaration(tag: &str, component: &str) -> TagDeclaration {
        TagDeclaration {
            tag: tag.to_string(),
            component: component.to_string(),
            identifier: format!("T{component}"),
            description: String::new(),
            attributes: vec![ResolvedAttribute {
                key: "src".to_string(),
                identifier: "src".to_string(),
                type_expression: "string".to_string(),
                description: "资源地址".to_string(),
            }],
        }
    }

    #[test]
    fn test_preamble_import() {
        let import = preamble_import(&TypeScriptConfig::default()).build();
        assert!(import.starts_with("import type { DefineComponent, ComputedOptions,"));
        assert!(import.ends_with("EmitsOptions } from 'vue3';\n"));
    }

    #[test]
    fn test_preamble_helper() {
        let [props, helper] = preamble_types();
        assert_eq!(
            props.build(),
            "type PublicProps = VNodeProps & AllowedComponentProps & ComponentCustomProps;\n"
        );
        assert!(helper.build().starts_with(
            "type TComponent<P extends Record<string, any>, E extends EmitsOptions> = DefineComponent<{}, {}, {}, "
        ));
    }

    #[test]
    fn test_registry() {
        let decls = [declaration("image", "Image"), declaration("cover-view", "CoverView")];
        let code = registry(&decls, &TypeScriptConfig::default()).build();
        assert_eq!(
            code,
            "declare module 'vue' {\n  export interface GlobalComponents {\n    Image: TImage;\n    CoverView: TCoverView;\n  }\n}\n"
        );
    }

    #[test]
    fn test_render_document_layout() {
        let decls = [declaration("image", "Image")];
        let doc = render_document(&decls, &TypeScriptConfig::default());

        assert!(doc.contains("from 'vue3';\n\ntype PublicProps"));
        assert!(doc.contains("Readonly<ExtractPropTypes<P>>>;\n\n/**  */\ntype TImage = TComponent<{\n"));
        assert!(doc.contains("  /** 资源地址 */\n  src: string;\n}, {}>;\n\ndeclare module 'vue' {"));
        assert!(doc.ends_with("  }\n}\n"));
    }

    #[test]
    fn test_render_document_custom_modules() {
        let typescript = TypeScriptConfig {
            import_module: "vue".to_string(),
            augment_module: "@vue/runtime-core".to_string(),
            type_prefix: "T".to_string(),
        };
        let doc = render_document(&[], &typescript);

        assert!(doc.contains("} from 'vue';"));
        assert!(doc.contains("declare module '@vue/runtime-core' {"));
        assert!(doc.contains("export interface GlobalComponents {}"));
    }
}
