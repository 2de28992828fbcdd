//! Generator configuration.
//!
//! [`GeneratorOptions`] holds what the caller set; [`Config`] is the
//! immutable, fully-defaulted form used for one conversion call.

use crate::diagnostics::{Diagnostics, TracingSink};
use crate::names::{DefaultNameResolver, NameResolver};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// How enumerations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumStyle {
    /// `type N = "a" | "b";`
    #[default]
    LiteralUnion,
    /// `enum N { a, b }`
    ValueEnum,
    /// `enum N { a = "A", b = "B" }`
    StringEnum,
}

impl EnumStyle {
    /// Parses an enum style from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "literal-union" | "literal" | "union" => Some(Self::LiteralUnion),
            "value-enum" | "enum" => Some(Self::ValueEnum),
            "string-enum" | "string" => Some(Self::StringEnum),
            _ => None,
        }
    }
}

/// Declaration qualifier style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitMode {
    /// `export interface …`
    #[default]
    Export,
    /// `declare interface …` (bare inside a module block)
    Declare,
}

/// Caller-supplied options. Unset fields take defaults in [`resolve`](Self::resolve).
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Prefix for interface names (default `I`).
    #[serde(alias = "prefix")]
    pub interface_prefix: Option<String>,
    /// Prefix for literal and scalar reference types (default `T`).
    pub type_prefix: Option<String>,
    /// Prefix for synthesized enum types (default `E`).
    pub enum_prefix: Option<String>,
    /// Enum emission style (default literal union).
    pub enum_style: Option<EnumStyle>,
    /// Trailing id segments used for names (default 1).
    pub path_depth: Option<usize>,
    /// Spaces per indentation level (default 2).
    pub indent: Option<usize>,
    /// Export or ambient declarations (default export).
    pub emit_mode: Option<EmitMode>,
    /// Emit string enums as literal types (default true).
    pub string_literals: Option<bool>,
    /// Wrap all declarations in `declare module "<name>"`.
    #[serde(alias = "module")]
    pub module_name: Option<String>,
    /// Route debug notes to the diagnostics sink (default false).
    pub debug: Option<bool>,
    /// Replaces the default name resolver.
    #[serde(skip)]
    pub name_resolver: Option<Arc<dyn NameResolver>>,
    /// Receives warnings and debug notes (default [`TracingSink`]).
    #[serde(skip)]
    pub diagnostics: Option<Arc<dyn Diagnostics>>,
}

impl GeneratorOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interface prefix.
    #[must_use]
    pub fn interface_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.interface_prefix = Some(prefix.into());
        self
    }

    /// Sets the literal type prefix.
    #[must_use]
    pub fn type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.type_prefix = Some(prefix.into());
        self
    }

    /// Sets the enum prefix.
    #[must_use]
    pub fn enum_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.enum_prefix = Some(prefix.into());
        self
    }

    /// Sets the enum emission style.
    #[must_use]
    pub fn enum_style(mut self, style: EnumStyle) -> Self {
        self.enum_style = Some(style);
        self
    }

    /// Sets the path depth.
    #[must_use]
    pub fn path_depth(mut self, depth: usize) -> Self {
        self.path_depth = Some(depth);
        self
    }

    /// Sets the indentation width.
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    /// Sets the emit mode.
    #[must_use]
    pub fn emit_mode(mut self, mode: EmitMode) -> Self {
        self.emit_mode = Some(mode);
        self
    }

    /// Enables or disables string literal types for enums.
    #[must_use]
    pub fn string_literals(mut self, enabled: bool) -> Self {
        self.string_literals = Some(enabled);
        self
    }

    /// Wraps output in a named module block.
    #[must_use]
    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    /// Enables debug notes.
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Replaces the name resolver.
    #[must_use]
    pub fn name_resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.name_resolver = Some(Arc::new(resolver));
        self
    }

    /// Sets the diagnostics sink.
    #[must_use]
    pub fn diagnostics(mut self, sink: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Overlays `overrides` on top of `self`; set fields in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: GeneratorOptions) -> Self {
        Self {
            interface_prefix: overrides.interface_prefix.or(self.interface_prefix),
            type_prefix: overrides.type_prefix.or(self.type_prefix),
            enum_prefix: overrides.enum_prefix.or(self.enum_prefix),
            enum_style: overrides.enum_style.or(self.enum_style),
            path_depth: overrides.path_depth.or(self.path_depth),
            indent: overrides.indent.or(self.indent),
            emit_mode: overrides.emit_mode.or(self.emit_mode),
            string_literals: overrides.string_literals.or(self.string_literals),
            module_name: overrides.module_name.or(self.module_name),
            debug: overrides.debug.or(self.debug),
            name_resolver: overrides.name_resolver.or(self.name_resolver),
            diagnostics: overrides.diagnostics.or(self.diagnostics),
        }
    }

    /// Fills in defaults for every unset option.
    #[must_use]
    pub fn resolve(self) -> Config {
        Config {
            interface_prefix: self.interface_prefix.unwrap_or_else(|| "I".to_string()),
            type_prefix: self.type_prefix.unwrap_or_else(|| "T".to_string()),
            enum_prefix: self.enum_prefix.unwrap_or_else(|| "E".to_string()),
            enum_style: self.enum_style.unwrap_or_default(),
            path_depth: self.path_depth.unwrap_or(1),
            indent: self.indent.unwrap_or(2),
            emit_mode: self.emit_mode.unwrap_or_default(),
            string_literals: self.string_literals.unwrap_or(true),
            module_name: self.module_name,
            debug: self.debug.unwrap_or(false),
            name_resolver: self
                .name_resolver
                .unwrap_or_else(|| Arc::new(DefaultNameResolver)),
            diagnostics: self.diagnostics.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}

impl fmt::Debug for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorOptions")
            .field("interface_prefix", &self.interface_prefix)
            .field("type_prefix", &self.type_prefix)
            .field("enum_prefix", &self.enum_prefix)
            .field("enum_style", &self.enum_style)
            .field("path_depth", &self.path_depth)
            .field("indent", &self.indent)
            .field("emit_mode", &self.emit_mode)
            .field("string_literals", &self.string_literals)
            .field("module_name", &self.module_name)
            .field("debug", &self.debug)
            .field("custom_name_resolver", &self.name_resolver.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolved configuration for one conversion call.
#[derive(Clone)]
pub struct Config {
    /// Prefix for interface names.
    pub interface_prefix: String,
    /// Prefix for literal and scalar reference types.
    pub type_prefix: String,
    /// Prefix for synthesized enum types.
    pub enum_prefix: String,
    /// Enum emission style.
    pub enum_style: EnumStyle,
    /// Trailing id segments used for names.
    pub path_depth: usize,
    /// Spaces per indentation level.
    pub indent: usize,
    /// Export or ambient declarations.
    pub emit_mode: EmitMode,
    /// Emit string enums as literal types.
    pub string_literals: bool,
    /// Optional module wrapper name.
    pub module_name: Option<String>,
    /// Whether debug notes are forwarded.
    pub debug: bool,
    name_resolver: Arc<dyn NameResolver>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Config {
    /// Resolves the base name for an identifier or `$ref` target.
    #[must_use]
    pub fn resolve_name(&self, identifier: &str) -> String {
        self.name_resolver.resolve(identifier, self.path_depth)
    }

    /// Returns the interface name for an identifier.
    #[must_use]
    pub fn interface_name(&self, identifier: &str) -> String {
        format!("{}{}", self.interface_prefix, self.resolve_name(identifier))
    }

    /// Returns the literal type name for an identifier.
    #[must_use]
    pub fn type_name(&self, identifier: &str) -> String {
        format!("{}{}", self.type_prefix, self.resolve_name(identifier))
    }

    /// Returns one level of indentation.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }

    /// Returns the keyword placed before each declaration.
    #[must_use]
    pub fn qualifier(&self) -> &'static str {
        match (self.emit_mode, self.module_name.is_some()) {
            (EmitMode::Export, _) => "export ",
            (EmitMode::Declare, false) => "declare ",
            // already ambient inside `declare module`
            (EmitMode::Declare, true) => "",
        }
    }

    /// Reports a recoverable conversion problem.
    pub fn warn(&self, message: &str) {
        self.diagnostics.warn(message);
    }

    /// Reports a debug note when debug output is enabled.
    pub fn trace(&self, message: impl FnOnce() -> String) {
        if self.debug {
            self.diagnostics.debug(&message());
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        GeneratorOptions::default().resolve()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("interface_prefix", &self.interface_prefix)
            .field("type_prefix", &self.type_prefix)
            .field("enum_prefix", &self.enum_prefix)
            .field("enum_style", &self.enum_style)
            .field("path_depth", &self.path_depth)
            .field("indent", &self.indent)
            .field("emit_mode", &self.emit_mode)
            .field("string_literals", &self.string_literals)
            .field("module_name", &self.module_name)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.interface_prefix, "I");
        assert_eq!(config.type_prefix, "T");
        assert_eq!(config.enum_prefix, "E");
        assert_eq!(config.enum_style, EnumStyle::LiteralUnion);
        assert_eq!(config.path_depth, 1);
        assert_eq!(config.indent, 2);
        assert_eq!(config.emit_mode, EmitMode::Export);
        assert!(config.string_literals);
        assert!(config.module_name.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn test_enum_style_parse() {
        assert_eq!(EnumStyle::parse("literal-union"), Some(EnumStyle::LiteralUnion));
        assert_eq!(EnumStyle::parse("Value-Enum"), Some(EnumStyle::ValueEnum));
        assert_eq!(EnumStyle::parse("string-enum"), Some(EnumStyle::StringEnum));
        assert_eq!(EnumStyle::parse("bitflags"), None);
    }

    #[test]
    fn test_qualifier() {
        let export = Config::default();
        assert_eq!(export.qualifier(), "export ");

        let declare = GeneratorOptions::new().emit_mode(EmitMode::Declare).resolve();
        assert_eq!(declare.qualifier(), "declare ");

        let in_module = GeneratorOptions::new()
            .emit_mode(EmitMode::Declare)
            .module_name("api")
            .resolve();
        assert_eq!(in_module.qualifier(), "");
    }

    #[test]
    fn test_names_use_prefixes() {
        let config = GeneratorOptions::new()
            .interface_prefix("")
            .type_prefix("Lit")
            .resolve();
        assert_eq!(config.interface_name("ns/widget.json"), "Widget");
        assert_eq!(config.type_name("ns/widget.json"), "LitWidget");
    }

    #[test]
    fn test_custom_name_resolver_replaces_default() {
        let config = GeneratorOptions::new()
            .name_resolver(|id: &str, _depth: usize| id.to_uppercase())
            .resolve();
        assert_eq!(config.interface_name("a/b"), "IA/B");
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = GeneratorOptions::new().interface_prefix("X").indent(4);
        let merged = base.merge(GeneratorOptions::new().indent(8));
        let config = merged.resolve();
        assert_eq!(config.interface_prefix, "X");
        assert_eq!(config.indent, 8);
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let options: GeneratorOptions = serde_json::from_str(
            r#"{ "prefix": "", "type-prefix": "K", "enum-style": "string-enum",
                 "path-depth": 2, "emit-mode": "declare", "module": "api" }"#,
        )
        .expect("Failed to deserialize");
        let config = options.resolve();
        assert_eq!(config.interface_prefix, "");
        assert_eq!(config.type_prefix, "K");
        assert_eq!(config.enum_style, EnumStyle::StringEnum);
        assert_eq!(config.path_depth, 2);
        assert_eq!(config.emit_mode, EmitMode::Declare);
        assert_eq!(config.module_name.as_deref(), Some("api"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_option() {
        let result: Result<GeneratorOptions, _> = serde_json::from_str(r#"{ "colour": true }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_trace_respects_debug_flag() {
        let sink = Arc::new(CollectingSink::new());

        let quiet = GeneratorOptions::new().diagnostics(sink.clone()).resolve();
        quiet.trace(|| "hidden".to_string());
        assert!(sink.debug_messages().is_empty());

        let loud = GeneratorOptions::new()
            .debug(true)
            .diagnostics(sink.clone())
            .resolve();
        loud.trace(|| "shown".to_string());
        loud.warn("careful");
        assert_eq!(sink.debug_messages(), vec!["shown".to_string()]);
        assert_eq!(sink.warnings(), vec!["careful".to_string()]);
    }
}
