//! Main declaration generator.

use crate::config::{Config, GeneratorOptions};
use crate::error::CodegenError;
use crate::typescript::{ElementConverter, InterfaceEmitter, indent_lines, report_ignored};
use schema2ts_schema::{SchemaDocument, SchemaKind, parse_schemas, validate_inheritance};
use serde_json::Value;

/// TypeScript declaration generator for a set of JSON Schema documents.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Creates a new generator, filling in defaults for unset options.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self::from_config(options.resolve())
    }

    /// Creates a generator from an already resolved configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates declarations from decoded JSON values.
    ///
    /// Every value is parsed before anything is generated, so a failure
    /// never yields partial output.
    ///
    /// # Errors
    /// Returns `CodegenError` if a value is not a schema object, the
    /// inheritance graph has a cycle or an emitted schema has no id.
    pub fn generate(&self, schemas: &[Value]) -> Result<String, CodegenError> {
        let documents = parse_schemas(schemas)?;
        self.generate_documents(&documents)
    }

    /// Generates declarations from parsed documents.
    ///
    /// # Errors
    /// Returns `CodegenError` if the inheritance graph has a cycle or an
    /// emitted schema has no id.
    pub fn generate_documents(&self, documents: &[SchemaDocument]) -> Result<String, CodegenError> {
        self.config
            .trace(|| format!("converting {} schema(s)", documents.len()));

        validate_inheritance(documents, |id| self.config.resolve_name(id))?;

        let mut blocks = Vec::with_capacity(documents.len());
        for (index, document) in documents.iter().enumerate() {
            let block = self
                .generate_document(document)
                .map_err(|e| e.at_index(index))?;
            if let Some(block) = block {
                blocks.push(block);
            }
        }

        let output = blocks.join("\n\n");
        Ok(match &self.config.module_name {
            Some(module) => self.wrap_module(module, &output),
            None => output,
        })
    }

    /// Generates the declaration block for one document, if it has one.
    fn generate_document(&self, document: &SchemaDocument) -> Result<Option<String>, CodegenError> {
        match &document.kind {
            SchemaKind::Object => InterfaceEmitter::new(&self.config).emit(document).map(Some),
            SchemaKind::String if self.config.string_literals && document.has_enum() => {
                let id = document.identifier().ok_or_else(|| {
                    CodegenError::missing_identifier(std::iter::empty())
                })?;
                let name = self.config.type_name(id);
                self.config
                    .trace(|| format!("converting schema: {} ({})", name, id));
                report_ignored(&self.config, document, &self.config.resolve_name(id));
                let declaration = ElementConverter::new(&self.config)
                    .declare_literal(&name, &document.enum_values);
                Ok(Some(declaration))
            }
            kind => {
                self.config.trace(|| {
                    format!(
                        "cannot convert schema of type {}: {}",
                        kind,
                        document.identifier().unwrap_or("<no id>")
                    )
                });
                Ok(None)
            }
        }
    }

    /// Wraps `body` in a `declare module` block.
    fn wrap_module(&self, module: &str, body: &str) -> String {
        let indented = indent_lines(body, &self.config.indent_unit());
        if indented.is_empty() {
            format!("declare module \"{}\" {{\n}}", module)
        } else {
            format!("declare module \"{}\" {{\n{}\n}}", module, indented)
        }
    }
}
