//! Shared fixtures for the xverify integration tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use xverify::protocol::{ArtifactBundle, Producer, ProtocolConfig};

/// Deterministic RNG for signing in tests
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Bundle produced from the shared vector
pub fn vector_bundle(rng_seed: u64) -> ArtifactBundle {
    let config = ProtocolConfig::default();
    Producer::new(&config)
        .produce_with_rng(&mut test_rng(rng_seed))
        .expect("producer fails on the shared vector")
}

/// Replace the hex digit at `offset` inside the string value of `field`
///
/// The replacement is always a different digit, so the decoded bytes change
/// while the text stays valid hex.
pub fn tamper_hex_field(text: &str, field: &str, offset: usize) -> String {
    let marker = format!("\"{}\": \"", field);
    let start = text.find(&marker).expect("field present") + marker.len();
    let mut bytes = text.as_bytes().to_vec();
    let at = start + offset;
    bytes[at] = if bytes[at] == b'0' { b'1' } else { b'0' };
    String::from_utf8(bytes).expect("still utf-8")
}

/// Read the string value of `field` from encoded artifact text
pub fn field_value(text: &str, field: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(text).expect("valid json");
    value[field].as_str().expect("string field").to_owned()
}
