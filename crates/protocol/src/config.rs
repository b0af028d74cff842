//! Protocol configuration
//!
//! The defaults are the shared interoperability vector. Any of the three
//! values can be overridden from code or from a TOML document such as:
//!
//! ```toml
//! context = "ZOND"
//! seed = "f29f58af...5d28"
//! message = "Cross-implementation verification test message"
//! ```

use serde::Deserialize;
use xverify_api::error::validate;
use xverify_api::{Error, Result};
use xverify_params::pqc::ml_dsa::ML_DSA_MAX_CONTEXT_BYTES;
use xverify_params::vectors::{DEFAULT_CONTEXT, TEST_MESSAGE, TEST_SEED};
use xverify_wallet::Seed;

/// Context tag, seed and message shared by producer and consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    context: Vec<u8>,
    seed: Seed,
    message: Vec<u8>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    context: Option<String>,
    seed: Option<String>,
    message: Option<String>,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            context: DEFAULT_CONTEXT.to_vec(),
            seed: Seed::new(TEST_SEED),
            message: TEST_MESSAGE.as_bytes().to_vec(),
        }
    }
}

impl ProtocolConfig {
    /// Parse a TOML document; keys that are absent keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| Error::parameter("config", e.to_string()))?;

        let mut config = Self::default();
        if let Some(context) = file.context {
            config = config.with_context(context.into_bytes())?;
        }
        if let Some(seed) = file.seed {
            config = config.with_seed_hex(&seed)?;
        }
        if let Some(message) = file.message {
            config = config.with_message(message.into_bytes());
        }
        Ok(config)
    }

    /// Replace the context tag (at most 255 bytes)
    pub fn with_context(mut self, context: impl Into<Vec<u8>>) -> Result<Self> {
        let context = context.into();
        validate::parameter(
            context.len() <= ML_DSA_MAX_CONTEXT_BYTES,
            "context",
            "context must be at most 255 bytes",
        )?;
        self.context = context;
        Ok(self)
    }

    /// Replace the seed
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the seed from hex
    pub fn with_seed_hex(self, seed_hex: &str) -> Result<Self> {
        Ok(self.with_seed(Seed::from_hex(seed_hex)?))
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<Vec<u8>>) -> Self {
        self.message = message.into();
        self
    }

    /// Context tag
    pub fn context(&self) -> &[u8] {
        &self.context
    }

    /// Seed
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Message
    pub fn message(&self) -> &[u8] {
        &self.message
    }
}
