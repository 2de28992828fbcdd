//! Schema type definitions.
//!
//! This module contains the data structures representing the JSON Schema
//! keywords understood by the generator. A top-level document and any nested
//! node (property, array items, composition branch) share one shape.

use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// A top-level JSON Schema being converted.
pub type SchemaDocument = SchemaNode;

/// A parsed JSON Schema node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// Identifier from `$id` or `id`.
    pub id: Option<String>,
    /// Declared kind from `type` (absent means object).
    pub kind: SchemaKind,
    /// Free text from `description`.
    pub description: Option<String>,
    /// Target of `$ref`.
    pub reference: Option<String>,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
    /// True if the `properties` keyword is present, even when empty.
    pub properties_declared: bool,
    /// Names listed in `required`.
    pub required: BTreeSet<String>,
    /// Literal values from `enum`, in declaration order.
    pub enum_values: Vec<Value>,
    /// Array element schema from `items`.
    pub items: Option<Box<SchemaNode>>,
    /// `allOf` branches.
    pub all_of: Vec<SchemaNode>,
    /// `oneOf` branches.
    pub one_of: Vec<SchemaNode>,
    /// `anyOf` branches.
    pub any_of: Vec<SchemaNode>,
    /// Recognized keywords dropped because they held the wrong JSON type.
    pub ignored: Vec<IgnoredKeyword>,
}

impl SchemaNode {
    /// Creates an empty node of the given kind.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Returns the identifier if present and non-empty.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns true if `name` is listed in `required`.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.node)
    }

    /// Returns true if the node carries a non-empty `enum`.
    #[must_use]
    pub fn has_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// Returns true if the node explicitly declares `type: string`.
    #[must_use]
    pub fn declares_string(&self) -> bool {
        self.kind == SchemaKind::String
    }

    /// Returns the `$ref` targets of all `allOf` branches, in order.
    pub fn all_of_references(&self) -> impl Iterator<Item = &str> {
        self.all_of.iter().filter_map(|b| b.reference.as_deref())
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the `$ref` target.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Appends a property, optionally marking it required.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        node: SchemaNode,
        required: bool,
    ) -> Self {
        let name = name.into();
        if required {
            self.required.insert(name.clone());
        }
        self.properties.push(Property { name, node });
        self.properties_declared = true;
        self
    }
}

/// A recognized keyword that was treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredKeyword {
    /// Keyword name.
    pub keyword: String,
    /// JSON type the keyword requires.
    pub expected: &'static str,
    /// JSON type that was found.
    pub found: &'static str,
}

impl fmt::Display for IgnoredKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (expected {}, found {})",
            self.keyword, self.expected, self.found
        )
    }
}

/// A named property of an object schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property schema.
    pub node: SchemaNode,
}

/// Schema kind declared by the `type` keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SchemaKind {
    /// `object`, or no `type` at all.
    #[default]
    Object,
    /// `string`.
    String,
    /// `boolean`.
    Boolean,
    /// `integer`, `number` or `null`.
    Numeric(NumericKind),
    /// `array`.
    Array,
    /// Any other value, kept verbatim for diagnostics.
    Unknown(String),
}

impl SchemaKind {
    /// Parses a `type` keyword value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "object" => Self::Object,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "integer" => Self::Numeric(NumericKind::Integer),
            "number" => Self::Numeric(NumericKind::Number),
            "null" => Self::Numeric(NumericKind::Null),
            "array" => Self::Array,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Returns the JSON Schema name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Object => "object",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Numeric(n) => n.as_str(),
            Self::Array => "array",
            Self::Unknown(s) => s,
        }
    }

}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric-like JSON Schema types.
///
/// `null` lives here because it is rendered as `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// `integer`.
    Integer,
    /// `number`.
    Number,
    /// `null`.
    Null,
}

impl NumericKind {
    /// Returns the JSON Schema name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Null => "null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_kind_parse() {
        assert_eq!(SchemaKind::parse("object"), SchemaKind::Object);
        assert_eq!(SchemaKind::parse("string"), SchemaKind::String);
        assert_eq!(
            SchemaKind::parse("null"),
            SchemaKind::Numeric(NumericKind::Null)
        );
        assert_eq!(
            SchemaKind::parse("frobnicate"),
            SchemaKind::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_schema_kind_display() {
        assert_eq!(
            SchemaKind::Numeric(NumericKind::Integer).to_string(),
            "integer"
        );
        assert_eq!(SchemaKind::Unknown("x".into()).to_string(), "x");
        assert_eq!(SchemaKind::default().to_string(), "object");
    }

    #[test]
    fn test_identifier_rejects_empty() {
        assert_eq!(SchemaNode::default().identifier(), None);
        assert_eq!(SchemaNode::default().with_id("").identifier(), None);
        assert_eq!(SchemaNode::default().with_id("a/B").identifier(), Some("a/B"));
    }

    #[test]
    fn test_with_property_tracks_required() {
        let node = SchemaNode::new(SchemaKind::Object)
            .with_property("a", SchemaNode::new(SchemaKind::String), true)
            .with_property("b", SchemaNode::new(SchemaKind::Boolean), false);

        assert!(node.is_required("a"));
        assert!(!node.is_required("b"));
        assert_eq!(
            node.property("b").map(|n| &n.kind),
            Some(&SchemaKind::Boolean)
        );
        assert!(node.property("c").is_none());
    }

    #[test]
    fn test_ignored_keyword_display() {
        let ignored = IgnoredKeyword {
            keyword: "required".to_string(),
            expected: "array",
            found: "boolean",
        };
        assert_eq!(ignored.to_string(), "'required' (expected array, found boolean)");
    }

    #[test]
    fn test_all_of_references_skips_inline_branches() {
        let mut node = SchemaNode::new(SchemaKind::Object);
        node.all_of = vec![
            SchemaNode::default().with_reference("ns/A.json"),
            SchemaNode::new(SchemaKind::Object),
            SchemaNode::default().with_reference("ns/B.json"),
        ];

        let refs: Vec<_> = node.all_of_references().collect();
        assert_eq!(refs, vec!["ns/A.json", "ns/B.json"]);
    }
}
