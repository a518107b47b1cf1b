//! tests/common.rs
//! Common constants shared across test files

/// Fast iteration count for tests - performance testing is in benches/
/// Most tests use this value to keep test execution fast.
pub const TEST_ITERATIONS: u32 = 1_000;

/// Standard BIP39 test mnemonic (all-`abandon` sentence plus checksum word)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

/// Passphrase used by the published Trezor reference vectors
#[allow(dead_code)] // Used across multiple test files
pub const TREZOR_PASSPHRASE: &str = "TREZOR";

/// Common iteration count vectors for testing various iteration values
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATION_VALUES: &[u32] = &[1, 10, TEST_ITERATIONS];
