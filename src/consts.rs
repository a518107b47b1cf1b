//! Global constants for BIP39 seed derivation.
//!
//! Includes the fixed salt prefix and KDF parameters.

/// Salt prefix fixed by BIP39: the salt is `"mnemonic"` followed by the
/// (possibly empty) passphrase.
pub const BIP39_SALT_PREFIX: &str = "mnemonic";

/// PBKDF2 iteration count fixed by BIP39.
pub const BIP39_ITERATIONS: u32 = 2048;

/// BIP39 seed length in bytes (512-bit seed).
pub const BIP39_SEED_LENGTH: usize = 64;

/// Minimum allowed PBKDF2 iterations.
pub const PBKDF2_MIN_ITER: u32 = 1;
