//! Producer and consumer roles
//!
//! ```text
//! producer: Start -> Derive -> Sign -> Encode -> Done
//! consumer: Start -> Decode -> Verify -> Done
//! ```
//!
//! Each step runs once; the first error ends the run. The producer writes
//! nothing unless every step succeeded.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info, warn};
use xverify_api::{Error, PublicKeyBytes, Result, SignatureBytes};
use xverify_sign::MlDsa87PublicKey;
use xverify_wallet::{AddressDeriver, PlaceholderAddress, Seed, Wallet};

use crate::bundle::ArtifactBundle;
use crate::codec;
use crate::config::ProtocolConfig;
use crate::store::ArtifactStore;

/// Why a consumer refused an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The signature does not verify for this context, message and key
    SignatureRejected,
    /// The public key is not the one derived from the bundled seed
    PublicKeyMismatch,
    /// A key or signature field has the wrong size
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::SignatureRejected => f.write_str("signature rejected"),
            FailureReason::PublicKeyMismatch => {
                f.write_str("public key does not match the bundled seed")
            }
            FailureReason::InvalidLength {
                field,
                expected,
                actual,
            } => write!(f, "{} is {} bytes, expected {}", field, actual, expected),
        }
    }
}

/// Outcome of the consumer role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed(FailureReason),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Verdict::Passed)
    }

    /// `Err(VerificationRejected)` for a failed verdict
    pub fn into_result(self) -> Result<()> {
        match self {
            Verdict::Passed => Ok(()),
            Verdict::Failed(_) => Err(Error::VerificationRejected {
                context: "consumer",
            }),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("PASSED"),
            Verdict::Failed(reason) => write!(f, "FAILED: {}", reason),
        }
    }
}

/// Derives, signs and encodes
pub struct Producer<'a, D = PlaceholderAddress> {
    config: &'a ProtocolConfig,
    deriver: D,
}

impl<'a> Producer<'a> {
    pub fn new(config: &'a ProtocolConfig) -> Self {
        Self {
            config,
            deriver: PlaceholderAddress,
        }
    }
}

impl<'a, D: AddressDeriver> Producer<'a, D> {
    /// Use another address scheme for the `address` field
    pub fn with_address_deriver<E: AddressDeriver>(self, deriver: E) -> Producer<'a, E> {
        Producer {
            config: self.config,
            deriver,
        }
    }

    /// Build the bundle without storing it
    pub fn produce(&self) -> Result<ArtifactBundle> {
        self.produce_with_rng(&mut OsRng)
    }

    /// Build the bundle, drawing signing randomness from `rng`
    pub fn produce_with_rng<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<ArtifactBundle> {
        debug!(stage = "derive", "producer");
        let wallet = Wallet::from_seed(self.config.seed().clone(), [0, 0])?;

        debug!(stage = "sign", context_len = self.config.context().len(), "producer");
        let signature =
            wallet.sign_with_rng(rng, self.config.context(), self.config.message())?;

        Ok(ArtifactBundle {
            seed: wallet.seed().as_bytes().to_vec(),
            public_key: wallet.public_key().as_bytes().to_vec(),
            address: wallet.address(&self.deriver),
            message: self.config.message().to_vec(),
            signature: signature.as_bytes().to_vec(),
        })
    }

    /// Produce, encode and hand the text to `store`
    pub fn run<S: ArtifactStore>(&self, store: &mut S) -> Result<ArtifactBundle> {
        let bundle = self.produce()?;

        debug!(stage = "encode", "producer");
        let text = codec::encode(&bundle)?;
        store.write_artifact(&text)?;

        info!(
            public_key = %hex::encode(&bundle.public_key[..8]),
            "artifact written"
        );
        Ok(bundle)
    }
}

/// Decodes and verifies
pub struct Consumer {
    context: Vec<u8>,
    check_public_key: bool,
}

impl Consumer {
    pub fn new(config: &ProtocolConfig) -> Self {
        Self {
            context: config.context().to_vec(),
            check_public_key: false,
        }
    }

    /// Also require the public key to be the one derived from the bundled seed
    pub fn check_public_key(mut self, enabled: bool) -> Self {
        self.check_public_key = enabled;
        self
    }

    /// Verify an already-decoded bundle
    pub fn verify_bundle(&self, bundle: &ArtifactBundle) -> Result<Verdict> {
        debug!(stage = "verify", "consumer");

        let public_key = match MlDsa87PublicKey::from_bytes(&bundle.public_key) {
            Ok(pk) => pk,
            Err(Error::InvalidLength {
                expected, actual, ..
            }) => {
                return Ok(self.reject(FailureReason::InvalidLength {
                    field: "publicKey",
                    expected,
                    actual,
                }))
            }
            Err(e) => return Err(e),
        };

        if self.check_public_key {
            let seed = Seed::from_bytes(&bundle.seed)?;
            let derived = Wallet::from_seed(seed, [0, 0])?;
            if derived.public_key() != &public_key {
                return Ok(self.reject(FailureReason::PublicKeyMismatch));
            }
            debug!("public key matches bundled seed");
        }

        let valid = match Wallet::verify(
            &self.context,
            &bundle.message,
            &bundle.signature,
            public_key.as_bytes(),
        ) {
            Ok(valid) => valid,
            Err(Error::InvalidLength {
                expected, actual, ..
            }) => {
                return Ok(self.reject(FailureReason::InvalidLength {
                    field: "signature",
                    expected,
                    actual,
                }))
            }
            Err(e) => return Err(e),
        };

        if !valid {
            return Ok(self.reject(FailureReason::SignatureRejected));
        }
        info!("signature verified");
        Ok(Verdict::Passed)
    }

    /// Decode `text` and verify it
    pub fn consume(&self, text: &str) -> Result<Verdict> {
        debug!(stage = "decode", len = text.len(), "consumer");
        let bundle = codec::decode(text)?;
        self.verify_bundle(&bundle)
    }

    /// Read from `store`, decode and verify
    pub fn run<S: ArtifactStore>(&self, store: &S) -> Result<Verdict> {
        store
            .read_artifact()
            .and_then(|text| self.consume(&text))
            .inspect_err(|e| {
                if e.is_unreadable_artifact() {
                    warn!(error = %e, "artifact unreadable");
                }
            })
    }

    fn reject(&self, reason: FailureReason) -> Verdict {
        warn!(%reason, "artifact rejected");
        Verdict::Failed(reason)
    }
}
