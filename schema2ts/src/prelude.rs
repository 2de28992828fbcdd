//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use schema2ts::prelude::*;
//! ```

pub use crate::convert;

// Schema types
pub use schema2ts_schema::{
    ParseError, SchemaDocument, SchemaError, SchemaKind, SchemaNode, parse_schema, parse_schemas,
};

// Generator types
pub use schema2ts_codegen::{
    CodegenError, CollectingSink, Config, Diagnostics, EmitMode, EnumStyle, Generator,
    GeneratorOptions, NameResolver, TracingSink,
};
