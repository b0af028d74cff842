//! Canonical hex+JSON form of an [`ArtifactBundle`]
//!
//! ```json
//! {
//!   "seed": "<hex>",
//!   "publicKey": "<hex>",
//!   "address": "<text>",
//!   "message": "<text>",
//!   "messageHex": "<hex>",
//!   "signature": "<hex>"
//! }
//! ```
//!
//! Output is byte-for-byte stable: fields in the order above, two-space
//! indentation, lowercase hex without prefix or separators. Input hex may
//! use either case. Sizes of the cryptographic fields are not checked here;
//! the verifier owns that.

use serde::{Deserialize, Serialize};
use tracing::debug;
use xverify_api::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::bundle::ArtifactBundle;

#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
struct WireArtifact {
    seed: String,
    public_key: String,
    address: String,
    message: String,
    message_hex: String,
    signature: String,
}

fn decode_hex_field(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::malformed(field, e.to_string()))
}

/// Serialize a bundle to its canonical text
pub fn encode(bundle: &ArtifactBundle) -> Result<String> {
    let wire = WireArtifact {
        seed: hex::encode(&bundle.seed),
        public_key: hex::encode(&bundle.public_key),
        address: bundle.address.clone(),
        message: bundle.message_text().into_owned(),
        message_hex: hex::encode(&bundle.message),
        signature: hex::encode(&bundle.signature),
    };

    let text =
        serde_json::to_string_pretty(&wire).map_err(|e| Error::malformed("encode", e.to_string()))?;
    debug!(len = text.len(), "artifact encoded");
    Ok(text)
}

/// Parse canonical text back into a bundle
///
/// Unknown extra fields are ignored. When the `messageHex` bytes are valid
/// UTF-8, `message` must spell exactly the same text. Only hex syntax is
/// checked here: key and signature sizes are checked by the consumer, and
/// the seed length only by its public-key checkpoint.
pub fn decode(text: &str) -> Result<ArtifactBundle> {
    let wire: WireArtifact =
        serde_json::from_str(text).map_err(|e| Error::malformed("json", e.to_string()))?;

    let bundle = ArtifactBundle {
        seed: decode_hex_field("seed", &wire.seed)?,
        public_key: decode_hex_field("publicKey", &wire.public_key)?,
        address: wire.address.clone(),
        message: decode_hex_field("messageHex", &wire.message_hex)?,
        signature: decode_hex_field("signature", &wire.signature)?,
    };

    if let Ok(text) = std::str::from_utf8(&bundle.message) {
        if text != wire.message {
            return Err(Error::malformed(
                "message",
                "message does not match messageHex",
            ));
        }
    }

    debug!(
        public_key_len = bundle.public_key.len(),
        signature_len = bundle.signature.len(),
        "artifact decoded"
    );
    Ok(bundle)
}
