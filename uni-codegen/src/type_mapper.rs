//! Raw catalog type strings to TypeScript type expressions.
//!
//! The catalog types attributes with loose strings such as `"Boolean"`,
//! `"String|Number"` or `"Array<Object>"`. Each `|` alternative is matched
//! against [`BaseType::ALL`]; anything that matches nothing degrades to
//! `string`. An alternative written as `ts:<type>` is emitted verbatim.

use std::fmt;

use unidts_catalog::AttributeDef;

/// Marker prefix that forces a literal TypeScript type.
pub const FORCED_TYPE_PREFIX: &str = "ts:";

/// Raw type that disables the options-as-literals rule.
pub const BOOLEAN_MARKER: &str = "Boolean";

/// The recognized base types, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseType {
    Number,
    String,
    Array,
    Object,
    Boolean,
}

impl BaseType {
    /// Lookup order for exact and substring matching.
    pub const ALL: [BaseType; 5] = [
        BaseType::Number,
        BaseType::String,
        BaseType::Array,
        BaseType::Object,
        BaseType::Boolean,
    ];

    /// Lowercase catalog name.
    pub fn name(self) -> &'static str {
        match self {
            BaseType::Number => "number",
            BaseType::String => "string",
            BaseType::Array => "array",
            BaseType::Object => "object",
            BaseType::Boolean => "boolean",
        }
    }

    /// TypeScript rendering.
    pub fn ts_type(self) -> &'static str {
        match self {
            BaseType::Array => "any[]",
            BaseType::Object => "Record<string, any>",
            other => other.name(),
        }
    }
}

/// How one `|` alternative of a raw type was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// `ts:` marker; the remainder is used as is.
    Forced(String),
    /// Exact (case-insensitive) base type name.
    Exact(BaseType),
    /// Contains a base type name, e.g. `array<object>` -> array.
    Substring(BaseType),
    /// Matched nothing; rendered as `string`. Holds the original token.
    Fallback(String),
}

impl TypeToken {
    /// Classify a single alternative.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();

        if let Some(forced) = strip_forced_prefix(token) {
            return TypeToken::Forced(forced.to_string());
        }

        let lower = token.to_lowercase();
        if let Some(base) = BaseType::ALL.into_iter().find(|b| b.name() == lower) {
            return TypeToken::Exact(base);
        }
        match BaseType::ALL
            .into_iter()
            .find(|b| lower.contains(b.name()))
        {
            Some(base) => TypeToken::Substring(base),
            None => TypeToken::Fallback(token.to_string()),
        }
    }

    /// Returns true if the token degraded to the default type.
    pub fn is_fallback(&self) -> bool {
        matches!(self, TypeToken::Fallback(_))
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::Forced(ty) => f.write_str(ty),
            TypeToken::Exact(base) | TypeToken::Substring(base) => f.write_str(base.ts_type()),
            TypeToken::Fallback(_) => f.write_str(BaseType::String.ts_type()),
        }
    }
}

fn strip_forced_prefix(token: &str) -> Option<&str> {
    let prefix = token.get(..FORCED_TYPE_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(FORCED_TYPE_PREFIX)
        .then(|| &token[FORCED_TYPE_PREFIX.len()..])
}

/// Split a raw type string into its classified alternatives.
pub fn parse_raw_type(raw: &str) -> Vec<TypeToken> {
    raw.split('|').map(TypeToken::parse).collect()
}

/// Map a raw type string to a TypeScript type expression.
///
/// Alternatives keep their order and are not deduplicated:
/// `"String|Number"` -> `"string | number"`.
pub fn map_type(raw: &str) -> String {
    parse_raw_type(raw)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Union of single-quoted option literals: `['a', 'b']` -> `'a' | 'b'`.
pub fn options_union<S: AsRef<str>>(options: &[S]) -> String {
    options
        .iter()
        .map(|option| crate::ast::quote(option.as_ref()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// The TypeScript type of an effective attribute definition.
///
/// A non-empty `options` list wins over the raw type unless the raw type is
/// exactly [`BOOLEAN_MARKER`].
pub fn attribute_type(attribute: &AttributeDef) -> String {
    match attribute.options.as_deref() {
        Some(options) if !options.is_empty() && attribute.ty != BOOLEAN_MARKER => {
            options_union(options)
        }
        _ => map_type(&attribute.ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_types() {
        assert_eq!(map_type("Number"), "number");
        assert_eq!(map_type("String"), "string");
        assert_eq!(map_type("Boolean"), "boolean");
        assert_eq!(map_type("Array"), "any[]");
        assert_eq!(map_type("Object"), "Record<string, any>");
    }

    #[test]
    fn test_union_keeps_order_without_dedup() {
        assert_eq!(map_type("string|number"), "string | number");
        assert_eq!(map_type("Number|String"), "number | string");
        assert_eq!(map_type("String|String"), "string | string");
        assert_eq!(map_type("Array|Object"), "any[] | Record<string, any>");
    }

    #[test]
    fn test_substring_match_uses_table_order() {
        assert_eq!(map_type("Array<Object>"), "any[]");
        assert_eq!(map_type("numberArray"), "number");
        assert_eq!(map_type("ObjectString"), "string");
        assert_eq!(
            TypeToken::parse("Array<Object>"),
            TypeToken::Substring(BaseType::Array)
        );
    }

    #[test]
    fn test_unknown_falls_back_to_string() {
        assert_eq!(map_type("Function"), "string");
        assert_eq!(map_type("Color"), "string");
        assert_eq!(map_type(""), "string");
        assert_eq!(map_type("Function|Number"), "string | number");
        assert!(TypeToken::parse("EventHandle").is_fallback());
    }

    #[test]
    fn test_whitespace_around_alternatives() {
        assert_eq!(map_type("String | Number"), "string | number");
    }

    #[test]
    fn test_forced_type() {
        assert_eq!(map_type("ts:CustomType"), "CustomType");
        assert_eq!(map_type("TS:Array<Foo>"), "Array<Foo>");
        assert_eq!(map_type("ts:() => void|Number"), "() => void | number");
        assert_eq!(
            TypeToken::parse("ts:stringLike"),
            TypeToken::Forced("stringLike".to_string())
        );
    }

    #[test]
    fn test_short_and_multibyte_tokens() {
        assert_eq!(map_type("ts"), "string");
        assert_eq!(map_type("数字"), "string");
        assert_eq!(map_type("数字number"), "number");
    }

    #[test]
    fn test_options_win_over_type() {
        let attr = AttributeDef::new("String").options(["a", "b"]);
        assert_eq!(attribute_type(&attr), "'a' | 'b'");
    }

    #[test]
    fn test_boolean_marker_ignores_options() {
        let attr = AttributeDef::new("Boolean").options(["true", "false"]);
        assert_eq!(attribute_type(&attr), "boolean");

        // Only the exact marker disables options.
        let attr = AttributeDef::new("boolean").options(["yes"]);
        assert_eq!(attribute_type(&attr), "'yes'");
    }

    #[test]
    fn test_empty_options_use_type() {
        let attr = AttributeDef::new("Number").options(Vec::<String>::new());
        assert_eq!(attribute_type(&attr), "number");
    }

    #[test]
    fn test_options_are_escaped() {
        assert_eq!(options_union(&["it's", "ok"]), "'it\\'s' | 'ok'");
    }
}
