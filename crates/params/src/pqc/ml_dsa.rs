//! Constants for the ML-DSA digital signature algorithm (FIPS 204)

/// Polynomial degree
pub const ML_DSA_N: usize = 256;

/// Prime modulus q = 2^23 - 2^13 + 1
pub const ML_DSA_Q: u32 = 8380417;

/// Maximum length of a context string in bytes
pub const ML_DSA_MAX_CONTEXT_BYTES: usize = 255;

/// Common trait for ML-DSA parameter sets
pub trait MlDsaParams: Send + Sync + 'static {
    /// Algorithm name
    const NAME: &'static str;

    // Ring parameters
    /// Polynomial degree (always 256)
    const N: usize = ML_DSA_N;
    /// Prime modulus
    const Q: u32 = ML_DSA_Q;
    /// Dropped bits of t
    const D_PARAM: u32 = 13;

    // Matrix dimensions
    /// Rows of A
    const K_DIM: usize;
    /// Columns of A
    const L_DIM: usize;

    // Norm bounds
    /// Bound for secret polynomials s1, s2
    const ETA_S1S2: u32;
    /// Range parameter for masking vector y
    const GAMMA1_PARAM: u32;
    /// Low-order rounding range
    const GAMMA2_PARAM: u32;
    /// Rejection bound tau * eta
    const BETA_PARAM: u32;
    /// Maximum number of hint bits
    const OMEGA_PARAM: u32;
    /// Number of ±1 coefficients in the challenge polynomial
    const TAU_PARAM: usize;
    /// Collision strength lambda in bits
    const LAMBDA_BITS: usize;

    // Byte sizes
    /// Public key size in bytes
    const PUBLIC_KEY_BYTES: usize;
    /// Secret key size in bytes
    const SECRET_KEY_BYTES: usize;
    /// Signature size in bytes
    const SIGNATURE_SIZE: usize;
    /// Key generation seed xi
    const SEED_XI_BYTES: usize = 32;
    /// Commitment hash c~ = 2 * lambda / 8
    const C_TILDE_BYTES: usize = Self::LAMBDA_BITS / 4;
}

/// ML-DSA-87 parameters (NIST security category 5)
pub struct MlDsa87Params;

impl MlDsaParams for MlDsa87Params {
    const NAME: &'static str = "ML-DSA-87";
    const K_DIM: usize = 8;
    const L_DIM: usize = 7;
    const ETA_S1S2: u32 = 2;
    const GAMMA1_PARAM: u32 = 1 << 19;
    const GAMMA2_PARAM: u32 = (ML_DSA_Q - 1) / 32;
    const BETA_PARAM: u32 = 120;
    const OMEGA_PARAM: u32 = 75;
    const TAU_PARAM: usize = 60;
    const LAMBDA_BITS: usize = 256;
    const PUBLIC_KEY_BYTES: usize = 2592;
    const SECRET_KEY_BYTES: usize = 4896;
    const SIGNATURE_SIZE: usize = 4627;
}

/// Public key size of ML-DSA-87 in bytes
pub const ML_DSA_87_PUBLIC_KEY_BYTES: usize = MlDsa87Params::PUBLIC_KEY_BYTES;

/// Secret key size of ML-DSA-87 in bytes
pub const ML_DSA_87_SECRET_KEY_BYTES: usize = MlDsa87Params::SECRET_KEY_BYTES;

/// Signature size of ML-DSA-87 in bytes
pub const ML_DSA_87_SIGNATURE_BYTES: usize = MlDsa87Params::SIGNATURE_SIZE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ml_dsa_87_sizes_follow_from_dimensions() {
        // pk = rho || t1, t1 packed at 10 bits per coefficient
        let pk = 32 + MlDsa87Params::K_DIM * ML_DSA_N * 10 / 8;
        assert_eq!(pk, MlDsa87Params::PUBLIC_KEY_BYTES);

        // sig = c~ || z (20 bits per coefficient) || hints
        let sig = MlDsa87Params::C_TILDE_BYTES
            + MlDsa87Params::L_DIM * ML_DSA_N * 20 / 8
            + MlDsa87Params::OMEGA_PARAM as usize
            + MlDsa87Params::K_DIM;
        assert_eq!(sig, MlDsa87Params::SIGNATURE_SIZE);

        // sk = rho || K || tr || s1, s2 (3 bits) || t0 (13 bits)
        let sk = 32 + 32 + 64
            + (MlDsa87Params::L_DIM + MlDsa87Params::K_DIM) * ML_DSA_N * 3 / 8
            + MlDsa87Params::K_DIM * ML_DSA_N * 13 / 8;
        assert_eq!(sk, MlDsa87Params::SECRET_KEY_BYTES);
    }

    #[test]
    fn ml_dsa_87_beta_is_tau_times_eta() {
        assert_eq!(
            MlDsa87Params::BETA_PARAM,
            MlDsa87Params::TAU_PARAM as u32 * MlDsa87Params::ETA_S1S2
        );
    }
}
