//! # schema2ts Codegen
//!
//! TypeScript declaration generation from JSON Schema documents.
//!
//! This crate provides:
//! - Interface generation for object schemas
//! - Literal union and enum generation for enumerations
//! - Name resolution from schema ids and `$ref` targets
//! - Configurable prefixes, indentation and emit mode

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod names;
pub mod typescript;

pub use config::{Config, EmitMode, EnumStyle, GeneratorOptions};
pub use diagnostics::{CollectingSink, Diagnostic, Diagnostics, Level, TracingSink};
pub use error::CodegenError;
pub use generator::Generator;
pub use names::{DefaultNameResolver, NameResolver, extract_name};

use serde_json::Value;

/// Generates TypeScript declarations from decoded JSON Schema documents.
///
/// # Arguments
/// * `schemas` - Schema documents, in emission order
/// * `options` - Generator options; unset fields take defaults
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate(schemas: &[Value], options: GeneratorOptions) -> Result<String, CodegenError> {
    Generator::new(options).generate(schemas)
}

/// Generates TypeScript declarations from JSON text.
///
/// The text may hold a single schema object or an array of schemas.
///
/// # Errors
/// Returns `CodegenError` if the text is not valid JSON or generation fails.
pub fn generate_from_json(json: &str, options: GeneratorOptions) -> Result<String, CodegenError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(schemas) => generate(&schemas, options),
        single => generate(std::slice::from_ref(&single), options),
    }
}
