//! # schema2ts
//!
//! Converts JSON Schema documents into TypeScript declarations.
//!
//! Object schemas become interfaces, enumerations become literal unions or
//! enums, and `allOf` references become `extends` clauses. The conversion
//! is a pure function of the decoded documents and the options: nothing is
//! read from or written to disk.
//!
//! ## Quick Start
//!
//! ```
//! use schema2ts::prelude::*;
//! use serde_json::json;
//!
//! let schemas = [json!({
//!     "id": "schemas/person.json",
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     },
//!     "required": ["name"]
//! })];
//!
//! let output = convert(&schemas, GeneratorOptions::new())?;
//! assert_eq!(
//!     output,
//!     "export interface IPerson {\n  name: string;\n  age?: number;\n}"
//! );
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, parsing and inheritance validation
//! - [`codegen`] - Name resolution and TypeScript generation

pub mod prelude;

/// Schema model, parsing and validation.
pub mod schema {
    pub use schema2ts_schema::*;
}

/// TypeScript declaration generation.
pub mod codegen {
    pub use schema2ts_codegen::*;
}

// Re-export commonly used items at the crate root
pub use schema2ts_codegen::{CodegenError, Generator, GeneratorOptions};
pub use schema2ts_schema::{SchemaDocument, SchemaNode};

/// Converts decoded JSON Schema documents into TypeScript declarations.
///
/// # Arguments
/// * `schemas` - Schema documents, in emission order
/// * `options` - Generator options; unset fields take defaults
///
/// # Errors
/// Returns `CodegenError` if a document is not an object, inheritance is
/// circular or an emitted schema has no id.
pub fn convert(
    schemas: &[serde_json::Value],
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    schema2ts_codegen::generate(schemas, options)
}
