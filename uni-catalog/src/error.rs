use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the raw text and filename of a catalog or config file so parse
/// failures can point back into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a catalog parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = json_offset(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Catalog {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            source,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based serde_json line/column pair.
fn json_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(unidts::io),
        help("install @dcloudio/uni-helper-json or set [catalog] paths in unidts.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{filename}'")]
    #[diagnostic(code(unidts::catalog_parse))]
    Catalog {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse unidts.toml")]
    #[diagnostic(
        code(unidts::config_parse),
        help("known sections are [catalog], [output], [typescript] and [overrides.<tag>.<attribute>]")
    )]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_offset_first_line() {
        assert_eq!(json_offset("{\"a\": }", 1, 7), Some(6));
    }

    #[test]
    fn test_json_offset_later_line() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        // line 3 starts after "{\n" (2) and "  \"a\": 1,\n" (10)
        assert_eq!(json_offset(src, 3, 3), Some(14));
    }

    #[test]
    fn test_json_offset_clamped() {
        assert_eq!(json_offset("{}", 1, 40), Some(2));
        assert_eq!(json_offset("{}", 0, 0), None);
    }

    #[test]
    fn test_json_error_has_span() {
        let ctx = SourceContext::new("{\n  \"view\": ,\n}", "tags.json");
        let source = serde_json::from_str::<serde_json::Value>(ctx.src()).unwrap_err();
        let err = ctx.json_error(source);

        match *err {
            Error::Catalog { span, filename, .. } => {
                assert!(span.is_some());
                assert_eq!(filename, "tags.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_toml_error_has_span() {
        let ctx = SourceContext::new("[output]\npath = ", "unidts.toml");
        let source = toml::from_str::<toml::Table>(ctx.src()).unwrap_err();
        let err = ctx.toml_error(source);

        assert!(matches!(*err, Error::Config { span: Some(_), .. }));
    }
}
