//! TypeScript declaration generator for uni-app built-in components.
//!
//! Turns the component catalog into a single `.d.ts` file: one
//! `TComponent<...>` alias per tag plus a `GlobalComponents` augmentation
//! registering every tag.
//!
//! # Usage
//!
//! ```
//! use unidts_catalog::{AttributeDef, Catalog, OverrideTable, TagDef};
//! use unidts_codegen::Generator;
//!
//! let catalog = Catalog::new()
//!     .with_tag("my-tag", TagDef::new("Example").attribute("foo-bar"))
//!     .with_attribute("foo-bar", AttributeDef::new("Boolean").description("desc"));
//! let overrides = OverrideTable::builtin();
//!
//! let dts = Generator::new(&catalog, &overrides).render();
//! assert!(dts.contains("  fooBar: boolean;"));
//! assert!(dts.contains("    MyTag: TMyTag;"));
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - indented code buffer and fragments
//! - [`ast`] - TypeScript nodes (imports, aliases, interfaces, modules)
//! - [`type_mapper`] - raw catalog types to TypeScript types
//! - [`resolve`] - per-tag attribute resolution
//! - [`emitter`] - document assembly
//! - [`lints`] - checks that surface lenient behaviour

mod code_file;
mod diagnostic;
mod generator;

pub mod ast;
pub mod builder;
pub mod emitter;
pub mod lints;
pub mod resolve;
pub mod type_mapper;

pub use code_file::CodeFile;
pub use diagnostic::{Diagnostic, Severity};
pub use generator::{GenerateResult, Generator};
pub use resolve::{ResolvedAttribute, TagDeclaration, resolve_catalog};
pub use type_mapper::{attribute_type, map_type};
