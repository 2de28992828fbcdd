//! Interface declaration generation.

use super::element::ElementConverter;
use super::report_ignored;
use crate::config::Config;
use crate::error::CodegenError;
use schema2ts_schema::SchemaDocument;

/// Generator for one `interface` declaration per object schema.
pub struct InterfaceEmitter<'a> {
    config: &'a Config,
}

impl<'a> InterfaceEmitter<'a> {
    /// Creates a new interface emitter.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates the interface for `schema`, preceded by any auxiliary
    /// declarations its fields needed. The schema description is placed
    /// directly above the interface header.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingIdentifier` if the schema has no id.
    pub fn emit(&self, schema: &SchemaDocument) -> Result<String, CodegenError> {
        let id = schema.identifier().ok_or_else(|| {
            CodegenError::missing_identifier(schema.properties.iter().map(|p| p.name.as_str()))
        })?;
        let base_name = self.config.resolve_name(id);
        let name = format!("{}{}", self.config.interface_prefix, base_name);

        self.config
            .trace(|| format!("converting schema: {} ({})", name, id));
        report_ignored(self.config, schema, &base_name);

        let parents: Vec<String> = schema
            .all_of_references()
            .map(|target| self.config.interface_name(target))
            .collect();

        let converter = ElementConverter::new(self.config);
        let indent = self.config.indent_unit();
        let mut declarations = Vec::new();
        let mut fields = Vec::with_capacity(schema.properties.len());

        for property in &schema.properties {
            let converted = converter.convert(
                &base_name,
                &property.name,
                &property.node,
                schema.is_required(&property.name),
            );
            declarations.extend(converted.declarations);
            if let Some(field) = converted.field {
                fields.push(format!("{}{}", indent, field));
            }
        }

        let mut output = String::new();

        for declaration in &declarations {
            output.push_str(declaration);
            output.push('\n');
        }
        if !declarations.is_empty() {
            output.push('\n');
        }

        if let Some(description) = &schema.description {
            output.push_str(&doc_comment(description));
        }

        output.push_str(&format!("{}interface {}", self.config.qualifier(), name));
        if !parents.is_empty() {
            output.push_str(&format!(" extends {}", parents.join(", ")));
        }
        output.push_str(" {\n");

        for field in &fields {
            output.push_str(field);
            output.push('\n');
        }
        output.push('}');

        Ok(output)
    }
}

/// Renders a block comment, one ` * ` line per description line.
fn doc_comment(description: &str) -> String {
    let mut output = String::from("/**\n");
    for line in description.lines() {
        let line = line.replace("*/", "*\\/");
        if line.is_empty() {
            output.push_str(" *\n");
        } else {
            output.push_str(&format!(" * {}\n", line));
        }
    }
    output.push_str(" */\n");
    output
}
