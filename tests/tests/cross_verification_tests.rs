//! End-to-end producer/consumer runs

use std::fs;

use xverify::params::vectors::{TEST_MESSAGE, TEST_SEED_HEX};
use xverify::prelude::*;
use xverify::protocol::{FailureReason, MemoryStore};
use xverify_cli::{run_sign, run_verify, SignArgs, VerifyArgs};
use xverify_tests::{field_value, tamper_hex_field, test_rng, vector_bundle};

#[test]
fn test_literal_vector_passes() {
    let config = ProtocolConfig::default()
        .with_seed_hex(TEST_SEED_HEX)
        .unwrap()
        .with_context(b"ZOND".to_vec())
        .unwrap()
        .with_message(TEST_MESSAGE);

    let mut store = MemoryStore::new();
    Producer::new(&config).run(&mut store).unwrap();

    let text = xverify::protocol::ArtifactStore::read_artifact(&store).unwrap();
    assert_eq!(field_value(&text, "seed"), TEST_SEED_HEX);
    assert_eq!(field_value(&text, "message"), TEST_MESSAGE);
    assert_eq!(field_value(&text, "messageHex"), hex::encode(TEST_MESSAGE));
    assert_eq!(field_value(&text, "publicKey").len(), 5184);
    assert_eq!(field_value(&text, "signature").len(), 9254);

    let verdict = Consumer::new(&config).run(&store).unwrap();
    assert_eq!(verdict, Verdict::Passed);
}

/// Artifact written by the reference JavaScript wallet for the shared vector
const REFERENCE_ARTIFACT: &str = include_str!("../fixtures/reference_wallet_artifact.json");

#[test]
fn test_reference_wallet_artifact_passes() {
    let verdict = Consumer::new(&ProtocolConfig::default())
        .check_public_key(true)
        .consume(REFERENCE_ARTIFACT)
        .unwrap();
    assert_eq!(verdict, Verdict::Passed);
}

#[test]
fn test_derived_public_key_matches_reference_wallet() {
    let reference = decode(REFERENCE_ARTIFACT).unwrap();
    assert_eq!(hex::encode(&reference.seed), TEST_SEED_HEX);
    assert_eq!(reference.message, TEST_MESSAGE.as_bytes());

    let wallet = Wallet::from_seed(Seed::from_hex(TEST_SEED_HEX).unwrap(), [0, 0]).unwrap();
    assert_eq!(
        hex::encode(wallet.public_key().as_bytes()),
        field_value(REFERENCE_ARTIFACT, "publicKey")
    );
    assert_eq!(vector_bundle(7).public_key, reference.public_key);
}

#[test]
fn test_reference_wallet_artifact_under_other_context_fails() {
    let config = ProtocolConfig::default().with_context(b"TEST".to_vec()).unwrap();
    let verdict = Consumer::new(&config).consume(REFERENCE_ARTIFACT).unwrap();
    assert_eq!(verdict, Verdict::Failed(FailureReason::SignatureRejected));
}

#[test]
fn test_tampered_reference_wallet_artifact_fails() {
    let tampered = tamper_hex_field(REFERENCE_ARTIFACT, "signature", 100);
    let verdict = Consumer::new(&ProtocolConfig::default())
        .consume(&tampered)
        .unwrap();
    assert_eq!(verdict, Verdict::Failed(FailureReason::SignatureRejected));
}

#[test]
fn test_public_key_is_stable_across_runs() {
    let a = vector_bundle(1);
    let b = vector_bundle(2);
    assert_eq!(a.public_key, b.public_key);
    assert_eq!(a.seed, b.seed);
}

#[test]
fn test_tampered_signature_character_fails() {
    let config = ProtocolConfig::default();
    let text = encode(&vector_bundle(3)).unwrap();

    for offset in [0, 1, 4000, 9253] {
        let tampered = tamper_hex_field(&text, "signature", offset);
        let verdict = Consumer::new(&config).consume(&tampered).unwrap();
        assert_eq!(verdict, Verdict::Failed(FailureReason::SignatureRejected));
        assert!(verdict.into_result().is_err());
    }
}

#[test]
fn test_tampered_message_fails() {
    let config = ProtocolConfig::default();
    let mut bundle = vector_bundle(4);
    bundle.message[0] ^= 0x01;
    let verdict = Consumer::new(&config).verify_bundle(&bundle).unwrap();
    assert_eq!(verdict, Verdict::Failed(FailureReason::SignatureRejected));
}

#[test]
fn test_cross_seed_fails() {
    let seed_b = Seed::new([0x42; 48]);
    let wallet_a = Wallet::from_seed(Seed::from_hex(TEST_SEED_HEX).unwrap(), [0, 0]).unwrap();
    let wallet_b = Wallet::from_seed(seed_b, [0, 0]).unwrap();

    let sig = wallet_a
        .sign_with_rng(&mut test_rng(5), b"ZOND", b"payload")
        .unwrap();
    assert!(Wallet::verify(
        b"ZOND",
        b"payload",
        sig.as_bytes(),
        wallet_a.public_key().as_bytes()
    )
    .unwrap());
    assert!(!Wallet::verify(
        b"ZOND",
        b"payload",
        sig.as_bytes(),
        wallet_b.public_key().as_bytes()
    )
    .unwrap());
}

#[test]
fn test_public_key_swap_caught_by_checkpoint() {
    let config = ProtocolConfig::default();
    let other = ProtocolConfig::default().with_seed(Seed::new([9u8; 48]));

    let mut bundle = vector_bundle(6);
    let foreign = Producer::new(&other)
        .produce_with_rng(&mut test_rng(7))
        .unwrap();
    bundle.public_key = foreign.public_key.clone();
    bundle.signature = foreign.signature.clone();

    let verdict = Consumer::new(&config)
        .check_public_key(true)
        .verify_bundle(&bundle)
        .unwrap();
    assert_eq!(verdict, Verdict::Failed(FailureReason::PublicKeyMismatch));
}

#[test]
fn test_cli_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet_cross_verify").join("artifact.json");

    let sign_args = SignArgs {
        out: Some(path.clone()),
        ..SignArgs::default()
    };
    let mut printed = Vec::new();
    run_sign(&sign_args, &mut printed).unwrap();
    let printed = String::from_utf8(printed).unwrap();
    let pk_line = printed
        .lines()
        .find(|line| line.starts_with("Public key:"))
        .unwrap();
    assert_eq!(pk_line.trim_start_matches("Public key: ").len(), 64 + 3);

    let verify_args = VerifyArgs {
        input: path.clone(),
        config: None,
        context: None,
        check_public_key: true,
    };
    assert!(run_verify(&verify_args, &mut Vec::new())
        .unwrap()
        .is_passed());

    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, tamper_hex_field(&text, "signature", 10)).unwrap();
    assert!(!run_verify(&verify_args, &mut Vec::new())
        .unwrap()
        .is_passed());

    fs::write(&path, &text[..text.len() - 10]).unwrap();
    assert!(run_verify(&verify_args, &mut Vec::new()).is_err());
}
