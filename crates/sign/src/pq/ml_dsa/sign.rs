//! Key generation, signing and verification on fixed-size byte arrays
//!
//! Thin layer over the `fips204` ML-DSA-87 implementation. Everything here
//! works on the encoded forms so the public types never have to hold a
//! scheme object; scheme objects are rebuilt per call and dropped at once.
//!
//! Internal module - use the public functions and `MlDsa87` instead.

use fips204::ml_dsa_87;
use fips204::traits::{KeyGen, SerDes, Signer, Verifier};
use rand::{CryptoRng, RngCore};
use xverify_common::SecretBuffer;
use xverify_params::pqc::ml_dsa::{
    MlDsa87Params, MlDsaParams, ML_DSA_87_PUBLIC_KEY_BYTES, ML_DSA_87_SECRET_KEY_BYTES,
    ML_DSA_87_SIGNATURE_BYTES, ML_DSA_MAX_CONTEXT_BYTES,
};

use super::seed::ExpansionInput;
use crate::error::Error as SignError;

const ALGORITHM: &str = MlDsa87Params::NAME;

/// `ML-DSA.KeyGen_internal(xi)`
///
/// The encoded private key is read back through the scheme's decoder before
/// it is handed out, so a key the scheme would later refuse to sign with is
/// reported here instead.
///
/// The decoder takes its array by value, so each decode leaves one
/// temporary copy that is not wiped. The decoded scheme object itself is
/// zeroized on drop.
pub(crate) fn keypair_internal(
    xi: &ExpansionInput,
) -> Result<
    (
        [u8; ML_DSA_87_PUBLIC_KEY_BYTES],
        SecretBuffer<ML_DSA_87_SECRET_KEY_BYTES>,
    ),
    SignError,
> {
    let (pk, sk) = ml_dsa_87::KG::keygen_from_seed(xi.as_bytes());
    let pk_bytes = pk.into_bytes();
    let secret = SecretBuffer::new(sk.into_bytes());

    ml_dsa_87::PrivateKey::try_from_bytes(*secret.as_array()).map_err(|e| {
        SignError::KeyGeneration {
            algorithm: ALGORITHM,
            details: format!("private key rejected by decoder: {}", e),
        }
    })?;
    ml_dsa_87::PublicKey::try_from_bytes(pk_bytes).map_err(|e| SignError::KeyGeneration {
        algorithm: ALGORITHM,
        details: format!("public key rejected by decoder: {}", e),
    })?;

    Ok((pk_bytes, secret))
}

/// Hedged `ML-DSA.Sign` with a context string
pub(crate) fn sign_internal<R>(
    rng: &mut R,
    sk_bytes: &[u8; ML_DSA_87_SECRET_KEY_BYTES],
    context: &[u8],
    message: &[u8],
) -> Result<[u8; ML_DSA_87_SIGNATURE_BYTES], SignError>
where
    R: RngCore + CryptoRng,
{
    if context.len() > ML_DSA_MAX_CONTEXT_BYTES {
        return Err(SignError::ContextTooLong {
            max: ML_DSA_MAX_CONTEXT_BYTES,
            actual: context.len(),
        });
    }

    let sk = ml_dsa_87::PrivateKey::try_from_bytes(*sk_bytes).map_err(|e| {
        SignError::SignatureGeneration {
            algorithm: ALGORITHM,
            details: format!("private key rejected: {}", e),
        }
    })?;

    sk.try_sign_with_rng(rng, message, context)
        .map_err(|e| SignError::SignatureGeneration {
            algorithm: ALGORITHM,
            details: e.to_string(),
        })
}

/// `ML-DSA.Verify` with a context string
///
/// Anything that is not a valid signature for exactly this triple, including
/// an over-long context or an undecodable key, is simply `false`.
pub(crate) fn verify_internal(
    pk_bytes: &[u8; ML_DSA_87_PUBLIC_KEY_BYTES],
    sig_bytes: &[u8; ML_DSA_87_SIGNATURE_BYTES],
    context: &[u8],
    message: &[u8],
) -> bool {
    if context.len() > ML_DSA_MAX_CONTEXT_BYTES {
        return false;
    }

    match ml_dsa_87::PublicKey::try_from_bytes(*pk_bytes) {
        Ok(pk) => pk.verify(message, sig_bytes, context),
        Err(_) => false,
    }
}
