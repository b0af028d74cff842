//! Command-line front end for xverify
//!
//! `xverify sign` plays the producer role and writes an artifact file;
//! `xverify verify` plays the consumer role on a file written by any
//! implementation.

pub mod commands;
pub mod file_store;

pub use commands::{run_sign, run_verify, SignArgs, VerifyArgs};
pub use file_store::FileStore;

use std::path::PathBuf;

/// Signature verified
pub const EXIT_PASSED: i32 = 0;
/// Signature rejected, or producer failure
pub const EXIT_FAILED: i32 = 1;
/// Artifact or configuration could not be read
pub const EXIT_ERROR: i32 = 2;

/// Directory under the system temp dir used when no path is given
pub const DEFAULT_OUTPUT_DIR: &str = "wallet_cross_verify";
/// File name used when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "xverify_output.json";

/// `<temp>/wallet_cross_verify/xverify_output.json`
pub fn default_output_path() -> PathBuf {
    std::env::temp_dir()
        .join(DEFAULT_OUTPUT_DIR)
        .join(DEFAULT_OUTPUT_FILE)
}
