//! TypeScript AST builders for the generated declaration file.
//!
//! These provide a small, typed API over the handful of constructs the
//! declaration file uses; each node renders through
//! [`Renderable`](crate::builder::Renderable).

mod component;
mod imports;
mod interface;
mod module;
mod types;

pub use component::ComponentAlias;
pub use imports::Import;
pub use interface::Interface;
pub use module::ModuleDeclaration;
pub use types::{Field, TypeAlias};

/// Quote `s` as a single-quoted TypeScript string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
