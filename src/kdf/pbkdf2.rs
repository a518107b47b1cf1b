//! src/kdf/pbkdf2.rs

use crate::aliases::{HmacSha512, SecretBytes};
use crate::Bip39SeedError;

use pbkdf2::pbkdf2;
use zeroize::Zeroizing;

/// Derive PBKDF2-HMAC-SHA512 directly into a caller-provided buffer
///
/// The buffer length is the derived key length (BIP39 seeds use 64 bytes).
/// Inputs are expected already NFKD-normalized; normalization is the caller's
/// responsibility per BIP39.
#[inline(always)]
pub fn derive_pbkdf2_key_into(
    password: &str,
    salt: &str,
    iteration_count: u32,
    out_key: &mut [u8],
) -> Result<(), Bip39SeedError> {
    if iteration_count == 0 {
        return Err(Bip39SeedError::InvalidParameter(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }
    if out_key.is_empty() {
        return Err(Bip39SeedError::InvalidParameter(
            "derived key length must be ≥1 byte".into(),
        ));
    }

    // BIP39 requires the salt's UTF-8 byte representation; `str::as_bytes`
    // is exactly that encoding on every platform, never an implementation
    // default. The password goes in as its UTF-8 bytes as well.
    pbkdf2::<HmacSha512>(
        password.as_bytes(),
        salt.as_bytes(),
        iteration_count,
        out_key,
    )
    .map_err(|e| {
        Bip39SeedError::AlgorithmUnavailable(format!("PBKDF2-HMAC-SHA512 failed: {e}"))
    })?;

    Ok(())
}

/// Derive a fresh `key_length`-byte key from a password and salt
///
/// Convenience form of [`derive_pbkdf2_key_into`]; the returned buffer is
/// zeroized on drop.
pub fn derive_pbkdf2_key(
    password: &str,
    salt: &str,
    iteration_count: u32,
    key_length: usize,
) -> Result<SecretBytes, Bip39SeedError> {
    if key_length == 0 {
        return Err(Bip39SeedError::InvalidParameter(
            "derived key length must be ≥1 byte".into(),
        ));
    }

    let mut out_key = Zeroizing::new(vec![0u8; key_length]);
    derive_pbkdf2_key_into(password, salt, iteration_count, out_key.as_mut_slice())?;
    Ok(out_key)
}
