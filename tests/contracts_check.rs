use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let matched = env.run_json(&["match", "INTJ", "ENFP"]);
    assert_eq!(matched["ok"], true);
    validate("match.schema.json", &matched["data"]);

    let neutral = env.run_json(&["match", "ISFP", "ISFP"]);
    validate("match.schema.json", &neutral["data"]);

    let analysis = env.run_json(&["analysis", "ENFJ"]);
    assert_eq!(analysis["ok"], true);
    validate("analysis.schema.json", &analysis["data"]);

    let card = env.run_json(&["card", "ESTJ"]);
    assert_eq!(card["ok"], true);
    validate("card.schema.json", &card["data"]);
}
