//! Enum and literal type generation.

use super::{escape_string, quote_if_needed};
use crate::config::{Config, EnumStyle};
use serde_json::Value;

/// Generator for enumeration declarations.
pub struct EnumGenerator<'a> {
    config: &'a Config,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Generates a declaration named `name` in the configured style.
    ///
    /// Enum styles need every value to be a non-numeric string; otherwise
    /// a literal union is generated instead.
    #[must_use]
    pub fn generate(&self, name: &str, values: &[Value]) -> String {
        let string_backed = match self.config.enum_style {
            EnumStyle::LiteralUnion => return self.generate_union(name, values),
            EnumStyle::ValueEnum => false,
            EnumStyle::StringEnum => true,
        };

        if let Some(value) = values.iter().find(|v| !is_member_name(v)) {
            self.config.warn(&format!(
                "enum {} has member {} that cannot name an enum member, emitting a literal union",
                name, value
            ));
            return self.generate_union(name, values);
        }
        self.generate_enum(name, values, string_backed)
    }

    /// Generates a literal union type alias.
    fn generate_union(&self, name: &str, values: &[Value]) -> String {
        let literals: Vec<String> = values.iter().map(Value::to_string).collect();
        format!(
            "{}type {} = {};",
            self.config.qualifier(),
            name,
            literals.join(" | ")
        )
    }

    /// Generates an enum, optionally backed by upper-cased string values.
    fn generate_enum(&self, name: &str, values: &[Value], string_backed: bool) -> String {
        let indent = self.config.indent_unit();
        let mut output = format!("{}enum {} {{\n", self.config.qualifier(), name);

        for value in values {
            let text = literal_text(value);
            let key = quote_if_needed(&text);
            if string_backed {
                output.push_str(&format!(
                    "{}{} = \"{}\",\n",
                    indent,
                    key,
                    escape_string(&text.to_uppercase())
                ));
            } else {
                output.push_str(&format!("{}{},\n", indent, key));
            }
        }

        output.push('}');
        output
    }
}

/// Returns true if `value` can name a TypeScript enum member.
fn is_member_name(value: &Value) -> bool {
    match value {
        Value::String(s) => s.parse::<f64>().is_err(),
        _ => false,
    }
}

/// Returns the raw text of a literal value.
fn literal_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmitMode, GeneratorOptions};
    use crate::diagnostics::CollectingSink;
    use std::sync::Arc;
    use serde_json::json;

    fn values() -> Vec<Value> {
        vec![json!("active"), json!("on-hold"), json!("done")]
    }

    #[test]
    fn test_generate_literal_union() {
        let config = Config::default();
        let output = EnumGenerator::new(&config).generate("EOrderStatus", &values());
        assert_eq!(
            output,
            "export type EOrderStatus = \"active\" | \"on-hold\" | \"done\";"
        );
    }

    #[test]
    fn test_generate_literal_union_escapes() {
        let config = Config::default();
        let output = EnumGenerator::new(&config).generate("TQ", &[json!("say \"hi\""), json!(3)]);
        assert_eq!(output, "export type TQ = \"say \\\"hi\\\"\" | 3;");
    }

    #[test]
    fn test_generate_value_enum() {
        let config = GeneratorOptions::new()
            .enum_style(EnumStyle::ValueEnum)
            .emit_mode(EmitMode::Declare)
            .resolve();
        let output = EnumGenerator::new(&config).generate("EOrderStatus", &values());
        assert_eq!(
            output,
            "declare enum EOrderStatus {\n  active,\n  \"on-hold\",\n  done,\n}"
        );
    }

    #[test]
    fn test_generate_string_enum() {
        let config = GeneratorOptions::new()
            .enum_style(EnumStyle::StringEnum)
            .indent(4)
            .resolve();
        let output = EnumGenerator::new(&config).generate("EOrderStatus", &values());
        assert_eq!(
            output,
            "export enum EOrderStatus {\n    active = \"ACTIVE\",\n    \"on-hold\" = \"ON-HOLD\",\n    done = \"DONE\",\n}"
        );
    }

    #[test]
    fn test_generate_enum_with_numeric_values_falls_back_to_union() {
        let sink = Arc::new(CollectingSink::new());
        let config = GeneratorOptions::new()
            .enum_style(EnumStyle::ValueEnum)
            .diagnostics(sink.clone())
            .resolve();
        let generator = EnumGenerator::new(&config);

        let output = generator.generate("ELevel", &[json!("low"), json!(3)]);
        assert_eq!(output, "export type ELevel = \"low\" | 3;");

        let output = generator.generate("ECode", &[json!("10")]);
        assert_eq!(output, "export type ECode = \"10\";");

        assert_eq!(
            sink.warnings(),
            vec![
                "enum ELevel has member 3 that cannot name an enum member, emitting a literal union",
                "enum ECode has member \"10\" that cannot name an enum member, emitting a literal union",
            ]
        );
    }
}
