//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Seed does not have the fixed wallet seed length
    InvalidSeedSize { expected: usize, actual: usize },

    /// Invalid key size
    InvalidKeySize { expected: usize, actual: usize },

    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Context string exceeds what the scheme can encode
    ContextTooLong { max: usize, actual: usize },

    /// Key generation failed
    KeyGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSeedSize { expected, actual } => {
                write!(f, "Invalid seed size: expected {}, got {}", expected, actual)
            }
            Error::InvalidKeySize { expected, actual } => {
                write!(f, "Invalid key size: expected {}, got {}", expected, actual)
            }
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::ContextTooLong { max, actual } => {
                write!(f, "Context too long: at most {} bytes, got {}", max, actual)
            }
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "{} key generation failed: {}", algorithm, details)
            }
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Convert to xverify_api::Error
impl From<Error> for xverify_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidSeedSize { expected, actual } => xverify_api::Error::InvalidSeedLength {
                context: "seed",
                expected,
                actual,
            },
            Error::InvalidKeySize { expected, actual } => xverify_api::Error::InvalidLength {
                context: "public key",
                expected,
                actual,
            },
            Error::InvalidSignatureSize { expected, actual } => {
                xverify_api::Error::InvalidLength {
                    context: "signature",
                    expected,
                    actual,
                }
            }
            Error::ContextTooLong { max, actual } => xverify_api::Error::InvalidParameter {
                context: "context",
                message: format!("context is {} bytes, at most {} allowed", actual, max),
            },
            Error::KeyGeneration { algorithm, details } => {
                xverify_api::Error::KeyDerivationFailed {
                    context: algorithm,
                    message: details,
                }
            }
            Error::SignatureGeneration { algorithm, details } => {
                xverify_api::Error::SigningFailed {
                    context: algorithm,
                    message: details,
                }
            }
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
