//! Command line arguments.

use clap::Parser;
use schema2ts::codegen::{EmitMode, EnumStyle, GeneratorOptions};
use std::path::PathBuf;

/// Converts JSON Schema files into TypeScript declarations.
#[derive(Parser, Debug)]
#[command(name = "schema2ts", version, about, long_about = None)]
pub struct Cli {
    /// Schema files to convert, in output order.
    pub files: Vec<PathBuf>,

    /// Comma separated list of additional schema files.
    #[arg(short = 'f', long = "files", value_delimiter = ',')]
    pub file_list: Vec<PathBuf>,

    /// Write declarations to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix for interface names.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Prefix for literal and referenced string types.
    #[arg(long)]
    pub type_prefix: Option<String>,

    /// Prefix for generated enum types.
    #[arg(long)]
    pub enum_prefix: Option<String>,

    /// Enum style: literal-union, value-enum or string-enum.
    #[arg(long, value_parser = parse_enum_style)]
    pub enum_style: Option<EnumStyle>,

    /// Number of trailing id segments used to build names.
    #[arg(long)]
    pub path_depth: Option<usize>,

    /// Spaces per indentation level.
    #[arg(long)]
    pub indent: Option<usize>,

    /// Emit ambient `declare` declarations instead of `export`.
    #[arg(long)]
    pub declare: bool,

    /// Wrap all declarations in `declare module "<MODULE>"`.
    #[arg(long)]
    pub module: Option<String>,

    /// Emit string enums as plain `string`.
    #[arg(long)]
    pub no_string_literals: bool,

    /// JSON file with generator options.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print debug notes to stderr.
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Returns every input file, positional ones first.
    #[must_use]
    pub fn input_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .chain(self.file_list.iter())
            .cloned()
            .collect()
    }

    /// Returns the options set on the command line.
    ///
    /// Switches that were not given stay unset so they do not mask the
    /// options file.
    #[must_use]
    pub fn overrides(&self) -> GeneratorOptions {
        GeneratorOptions {
            interface_prefix: self.prefix.clone(),
            type_prefix: self.type_prefix.clone(),
            enum_prefix: self.enum_prefix.clone(),
            enum_style: self.enum_style,
            path_depth: self.path_depth,
            indent: self.indent,
            emit_mode: self.declare.then_some(EmitMode::Declare),
            string_literals: self.no_string_literals.then_some(false),
            module_name: self.module.clone(),
            debug: self.debug.then_some(true),
            ..GeneratorOptions::default()
        }
    }
}

fn parse_enum_style(s: &str) -> Result<EnumStyle, String> {
    EnumStyle::parse(s).ok_or_else(|| {
        format!(
            "unknown enum style '{}' (expected literal-union, value-enum or string-enum)",
            s
        )
    })
}
