//! End-to-end conversion tests through the public API.

use schema2ts::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

fn widget_schemas() -> Vec<Value> {
    vec![
        json!({
            "$id": "ns/Widget.json",
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "integer" },
                "mid": { "type": "boolean" }
            },
            "required": ["alpha"]
        }),
        json!({
            "$id": "ns/Panel.json",
            "properties": {
                "main": { "$ref": "ns/Widget.json" },
                "children": { "type": "array", "items": { "$ref": "ns/Widget.json" } },
                "sizes": { "type": "array", "items": { "type": "integer" } }
            }
        }),
    ]
}

#[test]
fn test_output_is_deterministic() {
    let schemas = widget_schemas();
    let first = convert(&schemas, GeneratorOptions::new()).expect("Failed to convert");
    let second = convert(&schemas, GeneratorOptions::new()).expect("Failed to convert");
    assert_eq!(first, second);
}

#[test]
fn test_field_order_and_required_marking() {
    let output = convert(&widget_schemas()[..1], GeneratorOptions::new()).expect("Failed to convert");
    assert_eq!(
        output,
        "export interface IWidget {\n  zeta?: string;\n  alpha: number;\n  mid?: boolean;\n}"
    );
}

#[test]
fn test_reference_naming_matches_declaration() {
    let output = convert(&widget_schemas(), GeneratorOptions::new()).expect("Failed to convert");
    assert!(output.contains("export interface IWidget {"));
    assert!(output.contains("  main?: IWidget;"));
    assert!(output.contains("  children?: Array<IWidget>;"));
    assert!(output.contains("  sizes?: Array<number>;"));
}

#[test]
fn test_enum_round_trip() {
    let output = convert(
        &[json!({
            "id": "Grade",
            "properties": { "level": { "type": "string", "enum": ["A", "B", "C"] } }
        })],
        GeneratorOptions::new(),
    )
    .expect("Failed to convert");

    assert_eq!(
        output,
        "export type EGradeLevel = \"A\" | \"B\" | \"C\";\n\n\
         export interface IGrade {\n  level?: EGradeLevel;\n}"
    );
}

#[test]
fn test_composition() {
    let output = convert(
        &[json!({
            "id": "Derived",
            "allOf": [{ "$ref": "Base" }],
            "properties": {
                "value": { "oneOf": [{ "type": "string" }, { "type": "number" }] }
            }
        })],
        GeneratorOptions::new(),
    )
    .expect("Failed to convert");

    assert_eq!(
        output,
        "export interface IDerived extends IBase {\n  value?: string | number;\n}"
    );
}

#[test]
fn test_graceful_degradation() {
    let sink = Arc::new(CollectingSink::new());
    let output = convert(
        &[json!({
            "id": "Odd",
            "properties": {
                "before": { "type": "string" },
                "weird": { "type": "frobnicate" },
                "after": { "type": "boolean" }
            }
        })],
        GeneratorOptions::new().diagnostics(sink.clone()),
    )
    .expect("Failed to convert");

    assert_eq!(
        output,
        "export interface IOdd {\n  before?: string;\n  after?: boolean;\n}"
    );
    assert_eq!(
        sink.warnings(),
        vec!["unknown JSON schema element type: frobnicate (Odd.weird)"]
    );
}

#[test]
fn test_draft_03_property_required_is_tolerated() {
    let sink = Arc::new(CollectingSink::new());
    let output = convert(
        &[json!({
            "id": "Person",
            "properties": {
                "name": { "type": "string", "required": true },
                "age": { "type": "integer" }
            }
        })],
        GeneratorOptions::new().diagnostics(sink.clone()),
    )
    .expect("Failed to convert");

    assert_eq!(
        output,
        "export interface IPerson {\n  name?: string;\n  age?: number;\n}"
    );
    assert_eq!(
        sink.warnings(),
        vec!["ignoring keyword 'required' (expected array, found boolean) on Person.name"]
    );
}

#[test]
fn test_missing_identifier_is_fatal() {
    let result = convert(
        &[
            json!({ "id": "Fine" }),
            json!({ "type": "object", "properties": { "x": { "type": "string" } } }),
        ],
        GeneratorOptions::new(),
    );
    assert!(matches!(
        result,
        Err(CodegenError::MissingIdentifier { index: Some(1), .. })
    ));
}

#[test]
fn test_non_object_input_is_fatal() {
    let result = convert(&[json!("not a schema")], GeneratorOptions::new());
    assert!(matches!(
        result,
        Err(CodegenError::Parse(ParseError::NotAnObject { index: 0, found: "string" }))
    ));
}

#[test]
fn test_custom_name_resolver() {
    let options = GeneratorOptions::new()
        .interface_prefix("")
        .name_resolver(|id: &str, _depth: usize| id.replace('/', "_"));
    let output = convert(
        &[json!({ "id": "a/b", "properties": { "r": { "$ref": "c/d" } } })],
        options,
    )
    .expect("Failed to convert");
    assert_eq!(output, "export interface a_b {\n  r?: c_d;\n}");
}

#[test]
fn test_generator_shared_across_threads() {
    let generator = Arc::new(Generator::new(GeneratorOptions::new()));
    let schemas = Arc::new(widget_schemas());
    let expected = generator.generate(&schemas).expect("Failed to generate");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            let schemas = Arc::clone(&schemas);
            std::thread::spawn(move || generator.generate(&schemas).expect("Failed to generate"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), expected);
    }
}
