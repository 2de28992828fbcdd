//! Declaration name resolution.
//!
//! Schema ids and `$ref` targets go through the same resolver, so a
//! reference and the schema it points at always share a base name.
//! Prefixes are added by the caller.

/// Derives a declaration base name from an identifier.
pub trait NameResolver: Send + Sync {
    /// Resolves `identifier` using its last `depth` path segments.
    fn resolve(&self, identifier: &str, depth: usize) -> String;
}

impl<F> NameResolver for F
where
    F: Fn(&str, usize) -> String + Send + Sync,
{
    fn resolve(&self, identifier: &str, depth: usize) -> String {
        self(identifier, depth)
    }
}

/// The built-in resolver, see [`extract_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNameResolver;

impl NameResolver for DefaultNameResolver {
    fn resolve(&self, identifier: &str, depth: usize) -> String {
        extract_name(identifier, depth)
    }
}

/// Extracts a PascalCase name from the trailing segments of an identifier.
///
/// The last `depth` `/`-separated segments are joined with spaces, a
/// trailing `.json` is removed and the result is camel-cased with an upper
/// case first letter. A depth of zero keeps every segment.
///
/// ```
/// use schema2ts_codegen::names::extract_name;
///
/// assert_eq!(extract_name("schemas/user-profile.json", 1), "UserProfile");
/// assert_eq!(extract_name("api/v2/widget.json", 2), "V2Widget");
/// ```
#[must_use]
pub fn extract_name(identifier: &str, depth: usize) -> String {
    let segments: Vec<&str> = identifier.split('/').collect();
    let start = match depth {
        0 => 0,
        n => segments.len().saturating_sub(n),
    };
    let joined = segments[start..].join(" ");
    let stem = joined.strip_suffix(".json").unwrap_or(&joined);
    upper_first(&to_camel_case(stem))
}

/// Converts a string to camelCase.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            result.push_str(&lower);
        } else {
            result.push_str(&upper_first(&lower));
        }
    }
    result
}

/// Upper-cases the first character.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Splits a string into words.
///
/// Boundaries are non-alphanumeric characters, lower-to-upper transitions,
/// the last capital of an acronym followed by a lower case letter
/// (`HTTPServer` -> `HTTP`, `Server`) and letter/digit transitions.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower)
                || (prev.is_alphabetic() != c.is_alphabetic());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name_depth_one() {
        assert_eq!(extract_name("ns/Widget.json", 1), "Widget");
        assert_eq!(extract_name("http://example.com/schemas/order-line.json", 1), "OrderLine");
        assert_eq!(extract_name("Widget", 1), "Widget");
    }

    #[test]
    fn test_extract_name_deeper_paths() {
        assert_eq!(extract_name("billing/invoice/line.json", 2), "InvoiceLine");
        assert_eq!(extract_name("a/b", 5), "AB");
        assert_eq!(extract_name("a/b/c", 0), "ABC");
    }

    #[test]
    fn test_extract_name_only_strips_trailing_json() {
        assert_eq!(extract_name("ns/my.json.schema", 1), "MyJsonSchema");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user profile"), "userProfile");
        assert_eq!(to_camel_case("__FOO_BAR__"), "fooBar");
        assert_eq!(to_camel_case("myWidget"), "myWidget");
        assert_eq!(to_camel_case("HTTPServer"), "httpServer");
        assert_eq!(to_camel_case("item2value"), "item2Value");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("status"), "Status");
        assert_eq!(upper_first(""), "");
        assert_eq!(upper_first("éa"), "Éa");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |id: &str, depth: usize| format!("{}{}", id.len(), depth);
        assert_eq!(resolver.resolve("abc", 2), "32");
    }

    #[test]
    fn test_default_resolver_matches_extract_name() {
        assert_eq!(DefaultNameResolver.resolve("x/foo_bar.json", 1), "FooBar");
    }
}
