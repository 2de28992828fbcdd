//! JSON Schema parser.
//!
//! This module turns already-decoded `serde_json` values into the typed
//! schema representation. Property order follows the source document.

use crate::error::ParseError;
use crate::types::{IgnoredKeyword, Property, SchemaDocument, SchemaKind, SchemaNode};
use serde_json::{Map, Value};

/// Parses a single top-level schema.
///
/// # Errors
/// Returns `ParseError` if the value is not an object.
pub fn parse_schema(value: &Value) -> Result<SchemaDocument, ParseError> {
    parse_document(0, value)
}

/// Parses an ordered collection of top-level schemas.
///
/// # Arguments
/// * `values` - Decoded schema documents
///
/// # Returns
/// Parsed documents in input order.
///
/// # Errors
/// Returns the first `ParseError` encountered; no partial result is returned.
pub fn parse_schemas(values: &[Value]) -> Result<Vec<SchemaDocument>, ParseError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| parse_document(index, value))
        .collect()
}

/// Parses one document at position `index` of the input collection.
fn parse_document(index: usize, value: &Value) -> Result<SchemaDocument, ParseError> {
    let obj = value.as_object().ok_or(ParseError::NotAnObject {
        index,
        found: json_type_name(value),
    })?;
    Ok(parse_object(obj))
}

/// Parses any nested schema value.
///
/// Non-object values become `Unknown` nodes so they degrade at conversion
/// time instead of failing the document.
fn parse_node(value: &Value) -> SchemaNode {
    match value.as_object() {
        Some(obj) => parse_object(obj),
        None => SchemaNode::new(SchemaKind::Unknown(json_type_name(value).to_string())),
    }
}

/// Parses a schema object.
///
/// A recognized keyword holding the wrong JSON type is treated as absent
/// and recorded in [`SchemaNode::ignored`].
fn parse_object(obj: &Map<String, Value>) -> SchemaNode {
    let mut node = SchemaNode::new(parse_kind(obj.get("type")));
    let mut keywords = KeywordReader {
        obj,
        ignored: Vec::new(),
    };

    node.id = match keywords.string("$id") {
        Some(id) => Some(id),
        None => keywords.string("id"),
    };
    node.description = keywords.string("description");
    node.reference = keywords.string("$ref");

    if let Some(props) = keywords.object("properties") {
        node.properties_declared = true;
        node.properties = props
            .iter()
            .map(|(name, value)| Property {
                name: name.clone(),
                node: parse_node(value),
            })
            .collect();
    }

    if let Some(required) = keywords.array("required") {
        let names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        if names.len() < required.len() {
            keywords.ignore("required", "array of strings", "array");
        }
        node.required = names.into_iter().map(str::to_string).collect();
    }

    if let Some(values) = keywords.array("enum") {
        node.enum_values = values.clone();
    }

    node.items = obj.get("items").map(|items| Box::new(parse_node(items)));

    node.all_of = keywords.branches("allOf");
    node.one_of = keywords.branches("oneOf");
    node.any_of = keywords.branches("anyOf");

    node.ignored = keywords.ignored;
    node
}

/// Typed keyword lookup that records mismatches instead of failing.
struct KeywordReader<'v> {
    obj: &'v Map<String, Value>,
    ignored: Vec<IgnoredKeyword>,
}

impl<'v> KeywordReader<'v> {
    fn string(&mut self, keyword: &str) -> Option<String> {
        let obj = self.obj;
        match obj.get(keyword)? {
            Value::String(s) => Some(s.clone()),
            other => self.mismatch(keyword, "string", other),
        }
    }

    fn array(&mut self, keyword: &str) -> Option<&'v Vec<Value>> {
        let obj = self.obj;
        match obj.get(keyword)? {
            Value::Array(values) => Some(values),
            other => self.mismatch(keyword, "array", other),
        }
    }

    fn object(&mut self, keyword: &str) -> Option<&'v Map<String, Value>> {
        let obj = self.obj;
        match obj.get(keyword)? {
            Value::Object(map) => Some(map),
            other => self.mismatch(keyword, "object", other),
        }
    }

    /// Parses a composition keyword into its ordered branches.
    fn branches(&mut self, keyword: &str) -> Vec<SchemaNode> {
        self.array(keyword)
            .map(|values| values.iter().map(parse_node).collect())
            .unwrap_or_default()
    }

    fn mismatch<T>(&mut self, keyword: &str, expected: &'static str, found: &Value) -> Option<T> {
        self.ignore(keyword, expected, json_type_name(found));
        None
    }

    fn ignore(&mut self, keyword: &str, expected: &'static str, found: &'static str) {
        self.ignored.push(IgnoredKeyword {
            keyword: keyword.to_string(),
            expected,
            found,
        });
    }
}

/// Maps the `type` keyword to a schema kind.
fn parse_kind(value: Option<&Value>) -> SchemaKind {
    match value {
        None => SchemaKind::Object,
        Some(Value::String(s)) => SchemaKind::parse(s),
        Some(other) => SchemaKind::Unknown(other.to_string()),
    }
}

/// Returns the JSON type name of a value.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
