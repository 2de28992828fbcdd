//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] schema2ts_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] schema2ts_schema::SchemaError),

    /// JSON text could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An emitted schema has no usable identifier.
    #[error("{}schema has no id (properties: {context})", index_label(.index))]
    MissingIdentifier {
        /// Position of the schema in the input collection, if known.
        index: Option<usize>,
        /// Property names of the schema, to help locate it.
        context: String,
    },
}

impl CodegenError {
    /// Creates a missing identifier error listing the given property names.
    pub fn missing_identifier<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        Self::MissingIdentifier {
            index: None,
            context: if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            },
        }
    }

    /// Attaches the input position to a missing identifier error.
    #[must_use]
    pub fn at_index(self, position: usize) -> Self {
        match self {
            Self::MissingIdentifier { context, .. } => Self::MissingIdentifier {
                index: Some(position),
                context,
            },
            other => other,
        }
    }
}

fn index_label(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("schema at index {}: ", i),
        None => String::new(),
    }
}
