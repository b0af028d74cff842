//! Artifact codec laws and rejection of damaged text

use proptest::prelude::*;
use xverify::prelude::*;
use xverify_tests::{field_value, vector_bundle};

fn arb_bundle() -> impl Strategy<Value = ArtifactBundle> {
    (
        prop::collection::vec(any::<u8>(), 48),
        prop::collection::vec(any::<u8>(), 0..64),
        "[a-zA-Z0-9]{0,41}",
        prop::collection::vec(any::<u8>(), 0..128),
        prop::collection::vec(any::<u8>(), 0..64),
    )
        .prop_map(|(seed, public_key, address, message, signature)| ArtifactBundle {
            seed,
            public_key,
            address,
            message,
            signature,
        })
}

proptest! {
    #[test]
    fn prop_decode_inverts_encode(bundle in arb_bundle()) {
        let text = encode(&bundle).unwrap();
        prop_assert_eq!(decode(&text).unwrap(), bundle);
    }

    #[test]
    fn prop_text_messages_survive(message in "\\PC{0,80}") {
        let mut bundle = vector_bundle(1);
        bundle.message = message.clone().into_bytes();
        let decoded = decode(&encode(&bundle).unwrap()).unwrap();
        prop_assert_eq!(decoded.message_text(), message.as_str());
    }

    #[test]
    fn prop_truncation_is_malformed(cut in 1usize..200) {
        let text = encode(&vector_bundle(2)).unwrap();
        let truncated = &text[..text.len() - cut];
        let is_malformed = matches!(decode(truncated), Err(Error::MalformedArtifact { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn prop_non_hex_character_is_malformed(
        field in prop::sample::select(vec!["seed", "publicKey", "messageHex", "signature"]),
        offset in 0usize..90,
        junk in prop::sample::select(vec!['g', 'z', 'G', ' ', 'x', '!']),
    ) {
        let text = encode(&vector_bundle(3)).unwrap();
        let marker = format!("\"{}\": \"", field);
        let at = text.find(&marker).unwrap() + marker.len() + offset;
        let mut chars: Vec<char> = text.chars().collect();
        chars[at] = junk;
        let damaged: String = chars.into_iter().collect();

        let is_malformed = matches!(decode(&damaged), Err(Error::MalformedArtifact { .. }));
        prop_assert!(is_malformed);
    }
}

#[test]
fn test_odd_length_hex_is_malformed() {
    let text = encode(&vector_bundle(4)).unwrap();
    let damaged = text.replacen("\"seed\": \"f2", "\"seed\": \"f", 1);
    assert!(matches!(
        decode(&damaged),
        Err(Error::MalformedArtifact { context: "seed", .. })
    ));
}

#[test]
fn test_missing_field_is_malformed() {
    let text = encode(&vector_bundle(5)).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&text).unwrap();
    value.as_object_mut().unwrap().remove("signature");
    let damaged = serde_json::to_string(&value).unwrap();
    assert!(matches!(
        decode(&damaged),
        Err(Error::MalformedArtifact { context: "json", .. })
    ));
}

#[test]
fn test_encoding_is_stable() {
    let bundle = vector_bundle(6);
    assert_eq!(encode(&bundle).unwrap(), encode(&bundle).unwrap());
    let text = encode(&bundle).unwrap();
    assert!(text.starts_with("{\n  \"seed\": \""));
    for field in ["seed", "publicKey", "messageHex", "signature"] {
        let value = field_value(&text, field);
        assert!(!value.chars().any(|c| c.is_ascii_uppercase()), "{field}");
    }
}
