//! # schema2ts Schema
//!
//! JSON Schema document model and parser.
//!
//! This crate provides:
//! - A typed representation of the JSON Schema keywords the generator reads
//! - Lenient parsing from already-decoded `serde_json` values
//! - Validation of `allOf` inheritance between documents

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{parse_schema, parse_schemas};
pub use types::{
    IgnoredKeyword, NumericKind, Property, SchemaDocument, SchemaKind, SchemaNode,
};
pub use validation::validate_inheritance;
