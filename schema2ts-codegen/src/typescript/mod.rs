//! TypeScript declaration generation modules.

pub mod element;
pub mod enums;
pub mod interface;

pub use element::{Converted, ElementConverter, FieldFragment, Primitive};
pub use enums::EnumGenerator;
pub use interface::InterfaceEmitter;

use crate::config::Config;
use schema2ts_schema::SchemaNode;

/// Returns true if `name` must be quoted to be used as a property or member key.
#[must_use]
pub fn needs_quotes(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    !(first.is_ascii_alphabetic() || first == '_' || first == '$')
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Escapes backslashes and double quotes for a string literal.
#[must_use]
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Quotes `name` if it is not a plain identifier.
#[must_use]
pub fn quote_if_needed(name: &str) -> String {
    if needs_quotes(name) {
        format!("\"{}\"", escape_string(name))
    } else {
        name.to_string()
    }
}

/// Warns about keywords the parser dropped from `node`.
pub(crate) fn report_ignored(config: &Config, node: &SchemaNode, label: &str) {
    for ignored in &node.ignored {
        config.warn(&format!("ignoring keyword {} on {}", ignored, label));
    }
}

/// Indents every non-empty line of `text` by `unit`.
#[must_use]
pub fn indent_lines(text: &str, unit: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", unit, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
