//! Validates contract fixtures against frozen JSON schemas.

use jsonschema::JSONSchema;
use serde_json::Value;

fn load_json(path: &str) -> Value {
    let raw = std::fs::read_to_string(path).expect("json file should be readable");
    serde_json::from_str(&raw).expect("json file should be valid")
}

fn compile_validator(schema_path: &str) -> JSONSchema {
    let schema = load_json(schema_path);
    JSONSchema::compile(&schema).expect("schema should compile")
}

#[test]
fn mosaic_photo_fixture_matches_schema() {
    let validator = compile_validator(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/mosaic-photo.schema.json"
    ));
    let fixture = load_json(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/fixtures/mosaic-photo.valid.json"
    ));
    assert!(
        validator.is_valid(&fixture),
        "mosaic photo fixture should validate against schema"
    );
}

#[test]
fn schema_rejects_payload_without_formats() {
    let validator = compile_validator(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../contracts/mosaic-photo.schema.json"
    ));
    let stripped = serde_json::json!({
        "width": 410,
        "height": 410
    });
    assert!(
        !validator.is_valid(&stripped),
        "schema should require the formats object"
    );
}
