//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A top-level schema is not a JSON object.
    #[error("schema at index {index} is not an object (found {found})")]
    NotAnObject {
        /// Position of the schema in the input collection.
        index: usize,
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// Error type for schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Circular `allOf` inheritance.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },
}
