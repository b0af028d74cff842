//! The record exchanged between producer and consumer

use std::borrow::Cow;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Everything a consumer needs to re-check a producer's signature
///
/// `seed` is the producer's audit copy, kept so a consumer can re-derive
/// the public key. All fields are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ArtifactBundle {
    /// Seed the key pair was derived from
    pub seed: Vec<u8>,
    /// Encoded ML-DSA-87 public key
    pub public_key: Vec<u8>,
    /// Address string; not interpreted by the protocol
    pub address: String,
    /// Signed message bytes
    pub message: Vec<u8>,
    /// Encoded ML-DSA-87 signature
    pub signature: Vec<u8>,
}

impl ArtifactBundle {
    /// Message rendered as text
    ///
    /// Invalid UTF-8 sequences come out as U+FFFD; the message bytes stay
    /// authoritative.
    pub fn message_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.message)
    }
}

impl fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("seed", &format_args!("[REDACTED; {}]", self.seed.len()))
            .field("public_key_len", &self.public_key.len())
            .field("address", &self.address)
            .field("message", &self.message_text())
            .field("signature_len", &self.signature.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArtifactBundle {
        ArtifactBundle {
            seed: vec![0xAA; 48],
            public_key: vec![1; 8],
            address: "unassigned".into(),
            message: b"hi".to_vec(),
            signature: vec![2; 4],
        }
    }

    #[test]
    fn test_message_text() {
        let mut bundle = sample();
        assert_eq!(bundle.message_text(), "hi");
        bundle.message = vec![0x68, 0xFF];
        assert_eq!(bundle.message_text(), "h\u{FFFD}");
    }

    #[test]
    fn test_debug_hides_seed() {
        let shown = format!("{:?}", sample());
        assert!(shown.contains("[REDACTED; 48]"));
        assert!(!shown.contains("170"));
    }
}
