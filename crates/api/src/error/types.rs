//! Error type definitions for the cross-verification pipeline

use std::io;
use thiserror::Error as ThisError;

/// Primary error type for every stage of the pipeline
///
/// Each variant is terminal for the current run. Variants stay distinct all
/// the way to the process boundary so that a harness can assert on the exact
/// kind that stopped a run.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Seed does not have the documented fixed length
    #[error("{context}: invalid seed length (expected {expected}, got {actual})")]
    InvalidSeedLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scheme rejected the expansion input or the material derived from it
    #[error("Key derivation failed: {context}: {message}")]
    KeyDerivationFailed {
        context: &'static str,
        message: String,
    },

    /// Scheme invariants were violated while signing
    #[error("Signing failed: {context}: {message}")]
    SigningFailed {
        context: &'static str,
        message: String,
    },

    /// Structurally invalid verifier input (wrong-length key or signature)
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter or configuration value
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Interchange text could not be parsed into the expected field set
    #[error("Malformed artifact: {context}: {message}")]
    MalformedArtifact {
        context: &'static str,
        message: String,
    },

    /// Artifact parsed but the signature did not verify
    #[error("Verification rejected: {context}")]
    VerificationRejected { context: &'static str },

    /// Storage collaborator failed to read or write the artifact
    #[error("Storage failure: {context}: {message}")]
    StorageFailure {
        context: &'static str,
        kind: io::ErrorKind,
        message: String,
    },
}

/// Result type for pipeline operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::MalformedArtifact`]
    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedArtifact {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True when the artifact could not be obtained or understood, as
    /// opposed to being understood and rejected
    pub fn is_unreadable_artifact(&self) -> bool {
        matches!(
            self,
            Self::MalformedArtifact { .. } | Self::StorageFailure { .. }
        )
    }
}
