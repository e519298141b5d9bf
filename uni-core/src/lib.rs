//! Core utilities for the unidts declaration generator.
//!
//! Holds the pieces every other crate leans on: kebab-case identifier
//! normalization and the atomic file writer.

mod file;
mod naming;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use naming::{IdentCase, normalize_name, to_camel_case, to_pascal_case};
