//! Cross-verification protocol
//!
//! A producer derives a wallet from a seed, signs a message under the
//! protocol context and writes an [`ArtifactBundle`] as canonical JSON. A
//! consumer, possibly a different implementation, reads the JSON back and
//! checks the signature. Both roles share only the serialized bundle and
//! the [`ProtocolConfig`] constants.

pub mod bundle;
pub mod codec;
pub mod config;
pub mod orchestrator;
pub mod store;

pub use bundle::ArtifactBundle;
pub use codec::{decode, encode};
pub use config::ProtocolConfig;
pub use orchestrator::{Consumer, FailureReason, Producer, Verdict};
pub use store::{ArtifactStore, MemoryStore};
