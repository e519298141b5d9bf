//! Identifier normalization for kebab-case catalog names.

/// Target casing for [`normalize_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentCase {
    /// `foo-bar` -> `fooBar`
    Camel,
    /// `foo-bar` -> `FooBar`
    Pascal,
}

/// Convert a kebab-case name into a camelCase or PascalCase identifier.
///
/// The string is split on `-` and the first character of every segment is
/// uppercased, except the first segment in [`IdentCase::Camel`] mode, whose
/// first character is lowercased. The rest of each segment is kept as is.
///
/// Empty segments (leading, trailing or doubled hyphens) contribute nothing,
/// so `a--b` becomes `aB` and `-foo` becomes `Foo` in either mode.
pub fn normalize_name(s: &str, case: IdentCase) -> String {
    s.split('-')
        .enumerate()
        .map(|(index, segment)| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) if index == 0 && case == IdentCase::Camel => {
                    c.to_lowercase().chain(chars).collect()
                }
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a kebab-case name to PascalCase (e.g., "picker-view" -> "PickerView")
pub fn to_pascal_case(s: &str) -> String {
    normalize_name(s, IdentCase::Pascal)
}

/// Convert a kebab-case name to camelCase (e.g., "hover-class" -> "hoverClass")
pub fn to_camel_case(s: &str) -> String {
    normalize_name(s, IdentCase::Camel)
}
