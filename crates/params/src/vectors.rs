//! Interoperability test vector shared by every implementation under test
//!
//! Changing any of these values invalidates previously exchanged artifacts;
//! bump [`VECTOR_VERSION`] when doing so.

use crate::wallet::SEED_SIZE;

/// Version of the shared vector below
pub const VECTOR_VERSION: u32 = 1;

/// Application context tag mixed into every signature
pub const DEFAULT_CONTEXT: &[u8] = b"ZOND";

/// 48-byte test seed, lowercase hex
pub const TEST_SEED_HEX: &str =
    "f29f58aff0b00de2844f7e20bd9eeaacc379150043beeb328335817512b29fbb7184da84a092f842b2a06d72a24a5d28";

/// [`TEST_SEED_HEX`] as bytes
pub const TEST_SEED: [u8; SEED_SIZE] = [
    0xf2, 0x9f, 0x58, 0xaf, 0xf0, 0xb0, 0x0d, 0xe2, 0x84, 0x4f, 0x7e, 0x20,
    0xbd, 0x9e, 0xea, 0xac, 0xc3, 0x79, 0x15, 0x00, 0x43, 0xbe, 0xeb, 0x32,
    0x83, 0x35, 0x81, 0x75, 0x12, 0xb2, 0x9f, 0xbb, 0x71, 0x84, 0xda, 0x84,
    0xa0, 0x92, 0xf8, 0x42, 0xb2, 0xa0, 0x6d, 0x72, 0xa2, 0x4a, 0x5d, 0x28,
];

/// Test message signed by the producer role
pub const TEST_MESSAGE: &str = "Cross-implementation verification test message";

/// Value written to the `address` field while no address derivation is wired in
pub const ADDRESS_PLACEHOLDER: &str = "unassigned";
