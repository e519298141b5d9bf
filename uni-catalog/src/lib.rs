//! Component catalog, override table and project config for unidts.
//!
//! The catalog is the pair of JSON tables published by
//! `@dcloudio/uni-helper-json`: one maps tag names to a description and a
//! list of attribute keys, the other maps attribute keys to a description,
//! a raw type string and optional enum options.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod config;
mod error;
mod overrides;

pub use catalog::{AttributeDef, Catalog, DEFAULT_ATTRIBUTES_PATH, DEFAULT_TAGS_PATH, TagDef};
pub use config::{
    CONFIG_FILE, CatalogConfig, Config, OutputConfig, OverrideConfig, TypeScriptConfig,
};
pub use error::{Error, Result, SourceContext};
pub use overrides::OverrideTable;
