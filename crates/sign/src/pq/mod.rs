//! Post-quantum signature schemes

pub mod ml_dsa;

pub use ml_dsa::MlDsa87;
