//! ML-DSA-87 wallet

use core::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use xverify_api::Result;
use xverify_sign::{MlDsa87KeyPair, MlDsa87PublicKey, MlDsa87Signature};

use crate::address::AddressDeriver;
use crate::descriptor::Descriptor;
use crate::seed::{ExtendedSeed, Seed};

/// Seed, descriptor and the key pair derived from the seed
///
/// Seed and private key are wiped when the wallet is dropped.
#[derive(Clone)]
pub struct Wallet {
    extended_seed: ExtendedSeed,
    keypair: MlDsa87KeyPair,
}

impl Wallet {
    /// Wallet for an existing seed
    pub fn from_seed(seed: Seed, metadata: [u8; 2]) -> Result<Self> {
        Self::from_extended_seed(ExtendedSeed::new(Descriptor::ml_dsa_87(metadata), seed))
    }

    /// Wallet for a seed that already carries its descriptor
    pub fn from_extended_seed(extended_seed: ExtendedSeed) -> Result<Self> {
        let xi = extended_seed.seed().expansion_input()?;
        let keypair = xverify_sign::derive_keypair(&xi)?;
        debug!(
            wallet_type = %extended_seed.descriptor().wallet_type(),
            "wallet opened"
        );
        Ok(Self {
            extended_seed,
            keypair,
        })
    }

    /// Wallet with a fresh random seed
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, metadata: [u8; 2]) -> Result<Self> {
        Self::from_seed(Seed::generate(rng), metadata)
    }

    /// Descriptor
    pub fn descriptor(&self) -> Descriptor {
        self.extended_seed.descriptor()
    }

    /// Seed the keys were derived from
    pub fn seed(&self) -> &Seed {
        self.extended_seed.seed()
    }

    /// Descriptor and seed together
    pub fn extended_seed(&self) -> &ExtendedSeed {
        &self.extended_seed
    }

    /// Public key
    pub fn public_key(&self) -> &MlDsa87PublicKey {
        self.keypair.public_key()
    }

    /// Address under the given scheme
    pub fn address<D: AddressDeriver>(&self, deriver: &D) -> String {
        deriver.address(&self.descriptor(), self.public_key())
    }

    /// Sign `message` under `context`
    pub fn sign(&self, context: &[u8], message: &[u8]) -> Result<MlDsa87Signature> {
        self.sign_with_rng(&mut OsRng, context, message)
    }

    /// Sign with caller-supplied hedging randomness
    pub fn sign_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        context: &[u8],
        message: &[u8],
    ) -> Result<MlDsa87Signature> {
        xverify_sign::sign_with_rng(rng, self.keypair.secret_key(), context, message)
    }

    /// Check an encoded signature against an encoded public key
    pub fn verify(
        context: &[u8],
        message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<bool> {
        xverify_sign::verify(context, message, signature, public_key)
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("descriptor", &self.descriptor())
            .field("public_key", self.public_key())
            .finish_non_exhaustive()
    }
}
