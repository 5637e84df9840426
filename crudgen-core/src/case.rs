//! Case conversion for generated identifiers.
//!
//! All generated names (class names, file names, module directories) derive
//! from one user-supplied table name via these functions.

/// Convert a string to camelCase (e.g., "material-tree-knot" -> "materialTreeKnot").
///
/// Splits on hyphens, underscores and spaces; zero-length segments from
/// consecutive separators are dropped so they cannot shift capitalization.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, part) in s
        .split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .enumerate()
    {
        let mut chars = part.chars();
        match chars.next() {
            None => {}
            Some(c) if i == 0 => {
                result.extend(c.to_lowercase());
                result.push_str(chars.as_str());
            }
            Some(c) => {
                result.extend(c.to_uppercase());
                result.push_str(chars.as_str());
            }
        }
    }
    result
}

/// Convert a string to PascalCase (e.g., "material-tree-knot" -> "MaterialTreeKnot").
///
/// Defined as upper-firsting the camelCase form, so applying it to an
/// already-camelCased string only capitalizes the first character.
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Apply [`to_camel_case`] element-wise, preserving order and length.
pub fn to_camel_case_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| to_camel_case(s)).collect()
}

/// Apply [`to_pascal_case`] element-wise, preserving order and length.
pub fn to_pascal_case_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| to_pascal_case(s)).collect()
}
