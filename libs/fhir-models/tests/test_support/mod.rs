#![allow(dead_code)]

use ferrum_format::json_diff;
use ferrum_r4_models::{JsonCodec, JsonModel};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::OnceLock;

static TRACING: OnceLock<()> = OnceLock::new();

/// Install a test subscriber once; filter with `RUST_LOG`.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/r4")
}

/// Read a fixture as text.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_root().join(name);
    assert!(path.exists(), "fixture missing at {:?}", path);
    std::fs::read_to_string(&path).expect("failed to read fixture")
}

pub fn load_json(name: &str) -> Value {
    ferrum_format::parse(&load_fixture(name)).expect("fixture is not valid JSON")
}

/// Decode a fixture with strict options.
pub fn decode_fixture<T: JsonModel>(name: &str) -> T {
    init_tracing();
    JsonCodec::default()
        .decode(&load_fixture(name))
        .unwrap_or_else(|err| panic!("failed to decode {}: {}", name, err))
}

/// Encode `model` and require it to be semantically equal to the fixture.
pub fn assert_round_trip<T: JsonModel>(name: &str, model: &T) {
    let expected = load_json(name);
    let actual = JsonCodec::default().encode(model);
    let differences = json_diff(&expected, &actual);
    assert!(
        differences.is_empty(),
        "{} did not round-trip:\n{}",
        name,
        differences
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Decode, re-encode and compare in one step.
pub fn round_trip_fixture<T: JsonModel>(name: &str) -> T {
    let model = decode_fixture::<T>(name);
    assert_round_trip(name, &model);
    model
}
