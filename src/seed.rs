//! BIP39 mnemonic-to-seed derivation.
//!
//! Converts a mnemonic sentence and optional passphrase into the 64-byte
//! binary seed defined by BIP39: PBKDF2-HMAC-SHA512 over the sentence with
//! the salt `"mnemonic" + passphrase` and 2,048 iterations.
//!
//! Word-list handling and checksum validation happen upstream; the mnemonic
//! arrives here as an opaque, already-validated sentence.

use crate::aliases::Seed64;
use crate::consts::{BIP39_ITERATIONS, BIP39_SALT_PREFIX, BIP39_SEED_LENGTH};
use crate::kdf::pbkdf2::derive_pbkdf2_key_into;
use crate::Bip39SeedError;

use zeroize::Zeroizing;

/// Derive the 64-byte BIP39 seed for a mnemonic sentence.
///
/// Pass an empty `passphrase` for the common no-passphrase case; the salt is
/// then the bare `"mnemonic"` prefix.
///
/// # Security Note
/// The sentence and passphrase must already be NFKD-normalized (BIP39 places
/// normalization upstream of seed derivation). Seeds derived from
/// un-normalized input will not match other wallets.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed64, Bip39SeedError> {
    // The passphrase is key material, so the composed salt is wiped on drop.
    let salt = Zeroizing::new(format!("{BIP39_SALT_PREFIX}{passphrase}"));

    let mut seed = Zeroizing::new([0u8; BIP39_SEED_LENGTH]);
    derive_pbkdf2_key_into(mnemonic, salt.as_str(), BIP39_ITERATIONS, seed.as_mut_slice())?;
    Ok(seed)
}
