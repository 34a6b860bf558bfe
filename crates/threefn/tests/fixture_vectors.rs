//! Integration tests: run the comparator fixture vectors.
//!
//! Each fixture in tests/fixtures/ has:
//! - case.json: the descriptors, options, and `{a, b}` rows to compare
//! - expect.json: the expected sign for each row, in row order

use serde_json::Value;
use std::path::PathBuf;
use threefn::{Descriptor, Options, build, descriptors_from_value};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn read_json(path: &PathBuf) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}

fn run_fixture(name: &str) {
    let dir = fixtures_dir().join(name);
    let case = read_json(&dir.join("case.json"));
    let expected = read_json(&dir.join("expect.json"));

    let descriptors: Vec<Descriptor<Value>> = match case.get("sortBy") {
        Some(sort_by) => descriptors_from_value(sort_by)
            .unwrap_or_else(|e| panic!("bad sortBy in {name}: {e}")),
        None => Vec::new(),
    };
    let options: Options = match case.get("options") {
        Some(options) => serde_json::from_value(options.clone())
            .unwrap_or_else(|e| panic!("bad options in {name}: {e}")),
        None => Options::default(),
    };
    let cmp = build(descriptors, options);

    let rows = case["rows"].as_array().expect("missing rows field");
    let signs: Vec<i32> = rows
        .iter()
        .map(|row| {
            cmp.compare_sign(&row["a"], &row["b"])
                .unwrap_or_else(|e| panic!("comparison failed in {name}: {e}"))
        })
        .collect();

    assert_eq!(
        serde_json::json!({ "signs": signs }),
        expected,
        "\n\nFixture: {name}\n"
    );
}

#[test]
fn default_direct() {
    run_fixture("default_direct");
}

#[test]
fn single_key() {
    run_fixture("single_key");
}

#[test]
fn multiple_keys() {
    run_fixture("multiple_keys");
}

#[test]
fn nested_keys() {
    run_fixture("nested_keys");
}

#[test]
fn missing_first() {
    run_fixture("missing_first");
}

#[test]
fn array_index() {
    run_fixture("array_index");
}
