//! Signature scheme behaviour through the generic traits

use xverify::prelude::*;
use xverify::sign::{derive_keypair, normalize, sign_with_rng, verify};
use xverify_tests::test_rng;

fn derive_sign_verify<S: SignatureDerive>(seed: &[u8]) -> bool {
    let kp = S::derive_keypair(seed).unwrap();
    let pk = S::public_key(&kp);
    let sig = S::sign(b"ctx", b"generic", S::secret_key(&kp)).unwrap();
    S::verify(b"ctx", b"generic", &sig, &pk).unwrap()
}

#[test]
fn test_generic_roundtrip() {
    assert!(derive_sign_verify::<MlDsa87>(&[0x01; 48]));
}

#[test]
fn test_seed_size_is_enforced_by_trait() {
    assert_eq!(MlDsa87::SEED_SIZE, 48);
    assert!(matches!(
        MlDsa87::derive_keypair(&[0u8; 47]),
        Err(Error::InvalidSeedLength { actual: 47, .. })
    ));
}

#[test]
fn test_signatures_over_same_input_all_verify() {
    let kp = derive_keypair(&normalize(&[0x02; 48]).unwrap()).unwrap();
    let mut rng = test_rng(11);
    for _ in 0..3 {
        let sig = sign_with_rng(&mut rng, kp.secret_key(), b"ZOND", b"same").unwrap();
        assert_eq!(
            verify(b"ZOND", b"same", sig.as_bytes(), kp.public_key().as_bytes()),
            Ok(true)
        );
    }
}

#[test]
fn test_long_message() {
    let kp = derive_keypair(&normalize(&[0x03; 48]).unwrap()).unwrap();
    let message = vec![0xA5u8; 1 << 16];
    let sig = sign_with_rng(&mut test_rng(12), kp.secret_key(), b"ZOND", &message).unwrap();
    assert!(verify(b"ZOND", &message, sig.as_bytes(), kp.public_key().as_bytes()).unwrap());

    let mut altered = message.clone();
    altered[1 << 15] ^= 0x80;
    assert!(!verify(b"ZOND", &altered, sig.as_bytes(), kp.public_key().as_bytes()).unwrap());
}
