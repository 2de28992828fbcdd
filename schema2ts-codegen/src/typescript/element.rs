//! Field type conversion.
//!
//! One schema node (a property, array items or a composition branch) is
//! converted into an inline field fragment plus any auxiliary declarations
//! it needed. Results are returned by value so recursive `oneOf` / `anyOf`
//! handling never shares an accumulator. Auxiliary names derive from the
//! schema name and the owning field only.

use super::enums::EnumGenerator;
use super::{quote_if_needed, report_ignored};
use crate::config::Config;
use crate::names::upper_first;
use schema2ts_schema::{SchemaKind, SchemaNode};
use serde_json::Value;
use std::fmt;

/// TypeScript primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `string`
    String,
    /// `boolean`
    Boolean,
    /// `number`, also used for `integer` and `null`.
    Number,
    /// `any`
    Any,
}

impl Primitive {
    /// Returns the TypeScript spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Any => "any",
        }
    }
}

/// A converted field: `name?: type;` with an optional comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFragment {
    /// Property name as written in the schema.
    pub name: String,
    /// Whether the `?` marker is emitted.
    pub optional: bool,
    /// Inline TypeScript type.
    pub ty: String,
    /// Description emitted as a leading comment.
    pub description: Option<String>,
}

impl fmt::Display for FieldFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = &self.description {
            write!(f, "/** {} */ ", description.replace("*/", "*\\/"))?;
        }
        let marker = if self.optional { "?" } else { "" };
        write!(f, "{}{}: {};", quote_if_needed(&self.name), marker, self.ty)
    }
}

/// Result of converting one schema node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converted {
    /// The field, or `None` if the node could not be converted.
    pub field: Option<FieldFragment>,
    /// Auxiliary declarations, in the order they were produced.
    pub declarations: Vec<String>,
}

/// How a node is rendered, decided once before any output is built.
#[derive(Debug)]
enum ElementKind<'n> {
    Literal(&'n [Value]),
    StringReference(&'n str),
    Primitive(Primitive),
    Array(Option<&'n SchemaNode>),
    OneOf(&'n [SchemaNode]),
    AnyOf(&'n [SchemaNode]),
    Reference(&'n str),
    Opaque,
    InvalidObject,
    UnknownType(&'n str),
}

impl<'n> ElementKind<'n> {
    fn classify(node: &'n SchemaNode, string_literals: bool) -> Self {
        match &node.kind {
            SchemaKind::String => {
                if string_literals && node.has_enum() {
                    Self::Literal(&node.enum_values)
                } else if let Some(target) = node.reference.as_deref() {
                    Self::StringReference(target)
                } else {
                    Self::Primitive(Primitive::String)
                }
            }
            SchemaKind::Boolean => Self::Primitive(Primitive::Boolean),
            SchemaKind::Numeric(_) => Self::Primitive(Primitive::Number),
            SchemaKind::Array => Self::Array(node.items.as_deref()),
            SchemaKind::Object => {
                if !node.one_of.is_empty() {
                    Self::OneOf(&node.one_of)
                } else if !node.any_of.is_empty() {
                    Self::AnyOf(&node.any_of)
                } else if let Some(target) = node.reference.as_deref() {
                    Self::Reference(target)
                } else if node.properties_declared {
                    // anonymous nested interfaces have no name to declare
                    Self::Opaque
                } else {
                    Self::InvalidObject
                }
            }
            SchemaKind::Unknown(kind) => Self::UnknownType(kind),
        }
    }
}

/// Converter for individual schema elements.
pub struct ElementConverter<'a> {
    config: &'a Config,
}

impl<'a> ElementConverter<'a> {
    /// Creates a new element converter.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Converts `node`, found as `field_name` on the schema named `schema_name`.
    ///
    /// `schema_name` is the unprefixed base name of the owning schema; it
    /// seeds the names of auxiliary enum declarations together with
    /// `field_name`.
    #[must_use]
    pub fn convert(
        &self,
        schema_name: &str,
        field_name: &str,
        node: &SchemaNode,
        required: bool,
    ) -> Converted {
        self.convert_seeded(schema_name, field_name, field_name, node, required)
    }

    /// Generates a standalone literal declaration named `name`.
    #[must_use]
    pub fn declare_literal(&self, name: &str, values: &[Value]) -> String {
        EnumGenerator::new(self.config).generate(name, values)
    }

    /// Converts `node` as `field_name`, naming auxiliary declarations after
    /// `seed`. Union branches have an empty field name but keep the seed of
    /// the field that owns them.
    fn convert_seeded(
        &self,
        schema_name: &str,
        field_name: &str,
        seed: &str,
        node: &SchemaNode,
        required: bool,
    ) -> Converted {
        let label = label(schema_name, seed);
        report_ignored(self.config, node, &label);

        let mut declarations = Vec::new();

        let ty = match ElementKind::classify(node, self.config.string_literals) {
            ElementKind::Literal(values) => {
                let name = format!(
                    "{}{}{}",
                    self.config.enum_prefix,
                    schema_name,
                    upper_first(seed)
                );
                declarations.push(self.declare_literal(&name, values));
                Some(name)
            }
            ElementKind::StringReference(target) => Some(self.config.type_name(target)),
            ElementKind::Primitive(p) => Some(p.as_str().to_string()),
            ElementKind::Array(items) => {
                Some(format!("Array<{}>", self.array_element(items, &label)))
            }
            ElementKind::OneOf(branches) => {
                self.union(schema_name, seed, branches, &mut declarations)
            }
            ElementKind::AnyOf(branches) => self
                .union(schema_name, seed, branches, &mut declarations)
                .map(|members| format!("Array<{}>", members)),
            ElementKind::Reference(target) => Some(self.reference_name(node, target)),
            ElementKind::Opaque => Some(Primitive::Any.as_str().to_string()),
            ElementKind::InvalidObject => {
                self.config.warn(&format!(
                    "invalid JSON schema element of type object: {}",
                    label
                ));
                None
            }
            ElementKind::UnknownType(kind) => {
                self.config.warn(&format!(
                    "unknown JSON schema element type: {} ({})",
                    kind, label
                ));
                None
            }
        };

        Converted {
            field: ty.map(|ty| FieldFragment {
                name: field_name.to_string(),
                optional: !required,
                ty,
                description: node.description.clone(),
            }),
            declarations,
        }
    }

    /// Builds `A | B | …` from composition branches.
    ///
    /// Each branch is converted as a required, unnamed field and only its
    /// type is kept. When several branches can declare auxiliary types,
    /// each gets its ordinal appended to the seed. Branches that fail are
    /// dropped; if none remain the whole union fails.
    fn union(
        &self,
        schema_name: &str,
        seed: &str,
        branches: &[SchemaNode],
        declarations: &mut Vec<String>,
    ) -> Option<String> {
        let declaring = branches.iter().filter(|b| self.declares(b)).count();
        let mut ordinal = 0;
        let mut members = Vec::with_capacity(branches.len());

        for branch in branches {
            let branch_seed = if declaring > 1 && self.declares(branch) {
                ordinal += 1;
                format!("{}{}", seed, ordinal)
            } else {
                seed.to_string()
            };
            let converted = self.convert_seeded(schema_name, "", &branch_seed, branch, true);
            declarations.extend(converted.declarations);
            if let Some(field) = converted.field {
                members.push(field.ty);
            }
        }

        if members.is_empty() {
            self.config.warn(&format!(
                "no convertible branch in composition: {}",
                label(schema_name, seed)
            ));
            return None;
        }
        Some(members.join(" | "))
    }

    /// Returns true if converting `node` can produce auxiliary declarations.
    fn declares(&self, node: &SchemaNode) -> bool {
        matches!(
            ElementKind::classify(node, self.config.string_literals),
            ElementKind::Literal(_) | ElementKind::OneOf(_) | ElementKind::AnyOf(_)
        )
    }

    /// Returns the element type inside `Array<…>`.
    fn array_element(&self, items: Option<&SchemaNode>, label: &str) -> String {
        let Some(items) = items else {
            return Primitive::Any.as_str().to_string();
        };
        report_ignored(self.config, items, label);
        if let Some(target) = items.reference.as_deref() {
            return self.reference_name(items, target);
        }
        match &items.kind {
            SchemaKind::String => Primitive::String.as_str().to_string(),
            SchemaKind::Boolean => Primitive::Boolean.as_str().to_string(),
            SchemaKind::Numeric(_) => Primitive::Number.as_str().to_string(),
            SchemaKind::Array => format!(
                "Array<{}>",
                self.array_element(items.items.as_deref(), label)
            ),
            SchemaKind::Object | SchemaKind::Unknown(_) => Primitive::Any.as_str().to_string(),
        }
    }

    /// Names a `$ref` target: literal prefix for string-typed nodes,
    /// interface prefix otherwise.
    fn reference_name(&self, node: &SchemaNode, target: &str) -> String {
        if node.declares_string() {
            self.config.type_name(target)
        } else {
            self.config.interface_name(target)
        }
    }
}

/// Formats `schema.field` for diagnostics.
fn label(schema_name: &str, field_name: &str) -> String {
    if field_name.is_empty() {
        schema_name.to_string()
    } else {
        format!("{}.{}", schema_name, field_name)
    }
}
