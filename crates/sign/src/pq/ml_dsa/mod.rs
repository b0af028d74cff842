//! ML-DSA-87 (FIPS 204) with seed-derived keys
//!
//! Key material flows one way: a 48-byte wallet seed is normalized into the
//! 32-byte `xi` (`seed.rs`), `xi` is expanded by `ML-DSA.KeyGen_internal`
//! into a key pair, and the private key signs messages under an explicit
//! context string (`sign.rs`).
//!
//! All three objects have fixed sizes (pk 2592, sk 4896, signature 4627
//! bytes) and are stored as arrays. The private key and every buffer it
//! passes through are wiped when dropped.

use core::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use xverify_api::{
    PublicKeyBytes, Result as ApiResult, Signature as SignatureTrait, SignatureBytes,
    SignatureDerive,
};
use xverify_common::SecretBuffer;
use xverify_internal::ct_eq;
use xverify_params::pqc::ml_dsa::{
    MlDsa87Params, MlDsaParams, ML_DSA_87_PUBLIC_KEY_BYTES, ML_DSA_87_SECRET_KEY_BYTES,
    ML_DSA_87_SIGNATURE_BYTES,
};
use xverify_params::wallet::SEED_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error as SignError;

mod seed;
mod sign;


pub use seed::ExpansionInput;

/// ML-DSA-87 public key, `rho || t1` as encoded by FIPS 204
#[derive(Clone)]
pub struct MlDsa87PublicKey([u8; ML_DSA_87_PUBLIC_KEY_BYTES]);

/// ML-DSA-87 private key
///
/// Opaque: the encoded bytes are only reachable inside this crate and are
/// zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlDsa87SecretKey(SecretBuffer<ML_DSA_87_SECRET_KEY_BYTES>);

/// ML-DSA-87 signature, `c~ || z || h`
#[derive(Clone, PartialEq, Eq)]
pub struct MlDsa87Signature([u8; ML_DSA_87_SIGNATURE_BYTES]);

/// Key pair derived from one expansion input
#[derive(Clone)]
pub struct MlDsa87KeyPair {
    public: MlDsa87PublicKey,
    secret: MlDsa87SecretKey,
}

impl MlDsa87PublicKey {
    /// Borrow the encoded key
    pub fn as_array(&self) -> &[u8; ML_DSA_87_PUBLIC_KEY_BYTES] {
        &self.0
    }
}

impl MlDsa87Signature {
    /// Borrow the encoded signature
    pub fn as_array(&self) -> &[u8; ML_DSA_87_SIGNATURE_BYTES] {
        &self.0
    }
}

impl MlDsa87KeyPair {
    /// Public half
    pub fn public_key(&self) -> &MlDsa87PublicKey {
        &self.public
    }

    /// Private half
    pub fn secret_key(&self) -> &MlDsa87SecretKey {
        &self.secret
    }
}

impl PublicKeyBytes for MlDsa87PublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let array = bytes
            .try_into()
            .map_err(|_| SignError::InvalidKeySize {
                expected: ML_DSA_87_PUBLIC_KEY_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl SignatureBytes for MlDsa87Signature {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let array = bytes
            .try_into()
            .map_err(|_| SignError::InvalidSignatureSize {
                expected: ML_DSA_87_SIGNATURE_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlDsa87PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlDsa87Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Public keys are compared while checking untrusted artifacts
impl PartialEq for MlDsa87PublicKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for MlDsa87PublicKey {}

impl fmt::Debug for MlDsa87PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlDsa87PublicKey({} bytes)", self.0.len())
    }
}

impl fmt::Debug for MlDsa87SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlDsa87SecretKey([REDACTED])")
    }
}

impl fmt::Debug for MlDsa87Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlDsa87Signature({} bytes)", self.0.len())
    }
}

impl fmt::Debug for MlDsa87KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MlDsa87KeyPair")
            .field("public", &self.public)
            .field("secret", &self.secret)
            .finish()
    }
}

/// Turn a 48-byte seed into the 32-byte key generation input
///
/// Fails with `InvalidSeedLength` before hashing if the seed has any other
/// length.
pub fn normalize(seed: &[u8]) -> ApiResult<ExpansionInput> {
    let xi = seed::normalize_internal(seed)?;
    debug!(seed_len = seed.len(), "seed normalized");
    Ok(xi)
}

/// Deterministically expand `xi` into an ML-DSA-87 key pair
pub fn derive_keypair(expansion_input: &ExpansionInput) -> ApiResult<MlDsa87KeyPair> {
    let (pk, sk) = sign::keypair_internal(expansion_input)?;
    debug!(
        algorithm = MlDsa87Params::NAME,
        public_key_len = pk.len(),
        "key pair derived"
    );
    Ok(MlDsa87KeyPair {
        public: MlDsa87PublicKey(pk),
        secret: MlDsa87SecretKey(sk),
    })
}

/// Sign `message` under `context` with fresh randomness from the OS
pub fn sign(
    secret_key: &MlDsa87SecretKey,
    context: &[u8],
    message: &[u8],
) -> ApiResult<MlDsa87Signature> {
    sign_with_rng(&mut OsRng, secret_key, context, message)
}

/// Sign `message` under `context`, drawing the hedging randomness from `rng`
pub fn sign_with_rng<R: CryptoRng + RngCore>(
    rng: &mut R,
    secret_key: &MlDsa87SecretKey,
    context: &[u8],
    message: &[u8],
) -> ApiResult<MlDsa87Signature> {
    let sig = sign::sign_internal(rng, secret_key.0.as_array(), context, message)?;
    debug!(
        context_len = context.len(),
        message_len = message.len(),
        "message signed"
    );
    Ok(MlDsa87Signature(sig))
}

/// Verify an encoded signature against an encoded public key
///
/// Only the lengths can make this fail; every well-sized input yields a
/// plain accept or reject.
pub fn verify(
    context: &[u8],
    message: &[u8],
    signature: &[u8],
    public_key: &[u8],
) -> ApiResult<bool> {
    let pk = <MlDsa87PublicKey as PublicKeyBytes>::from_bytes(public_key)?;
    let sig = <MlDsa87Signature as SignatureBytes>::from_bytes(signature)?;
    Ok(verify_typed(context, message, &sig, &pk))
}

fn verify_typed(
    context: &[u8],
    message: &[u8],
    signature: &MlDsa87Signature,
    public_key: &MlDsa87PublicKey,
) -> bool {
    let valid = sign::verify_internal(&public_key.0, &signature.0, context, message);
    debug!(valid, message_len = message.len(), "signature checked");
    valid
}

/// ML-DSA-87 as a [`SignatureTrait`] implementation
pub struct MlDsa87;

impl SignatureTrait for MlDsa87 {
    type PublicKey = MlDsa87PublicKey;
    type SecretKey = MlDsa87SecretKey;
    type SignatureData = MlDsa87Signature;
    type KeyPair = MlDsa87KeyPair;

    fn name() -> &'static str {
        MlDsa87Params::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed = SecretBuffer::<SEED_SIZE>::zeroed();
        rng.fill_bytes(seed.as_mut_slice());
        <Self as SignatureDerive>::derive_keypair(seed.as_slice())
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> &Self::SecretKey {
        &keypair.secret
    }

    fn sign(
        context: &[u8],
        message: &[u8],
        secret_key: &Self::SecretKey,
    ) -> ApiResult<Self::SignatureData> {
        sign(secret_key, context, message)
    }

    fn verify(
        context: &[u8],
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        Ok(verify_typed(context, message, signature, public_key))
    }
}

impl SignatureDerive for MlDsa87 {
    const SEED_SIZE: usize = SEED_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        let xi = normalize(seed)?;
        derive_keypair(&xi)
    }
}
