//! src/builders/pbkdf2_builder.rs
//! PBKDF2-HMAC-SHA512 derivation builder

use crate::aliases::SecretBytes;
use crate::consts::{BIP39_ITERATIONS, BIP39_SALT_PREFIX, BIP39_SEED_LENGTH, PBKDF2_MIN_ITER};
use crate::error::Bip39SeedError;
use crate::kdf::pbkdf2::{derive_pbkdf2_key, derive_pbkdf2_key_into};

use zeroize::Zeroizing;

/// PBKDF2-HMAC-SHA512 key derivation builder
///
/// Defaults to the BIP39 seed parameters: salt `"mnemonic"`, 2,048 iterations
/// (uses [`BIP39_ITERATIONS`]), 64-byte key.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). Builders can be created and
/// used concurrently from multiple threads. All operations are pure (no
/// shared mutable state).
#[derive(Clone)]
pub struct Pbkdf2Builder {
    iterations: u32,
    key_length: usize,
    salt: Zeroizing<String>,
}

// The salt may embed a passphrase, so Debug never shows it.
impl std::fmt::Debug for Pbkdf2Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pbkdf2Builder")
            .field("iterations", &self.iterations)
            .field("key_length", &self.key_length)
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

impl Pbkdf2Builder {
    /// Create builder with the BIP39 seed defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            iterations: BIP39_ITERATIONS,
            key_length: BIP39_SEED_LENGTH,
            salt: Zeroizing::new(BIP39_SALT_PREFIX.to_string()),
        }
    }

    /// Set custom iteration count (minimum 1)
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations.max(PBKDF2_MIN_ITER);
        self
    }

    /// Replace the salt wholesale
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Zeroizing::new(salt.into());
        self
    }

    /// Set a BIP39 passphrase — the salt becomes `"mnemonic" + passphrase`
    #[must_use]
    pub fn with_passphrase(mut self, passphrase: &str) -> Self {
        self.salt = Zeroizing::new(format!("{BIP39_SALT_PREFIX}{passphrase}"));
        self
    }

    /// Set derived key length in bytes (minimum 1)
    #[must_use]
    pub fn with_key_length(mut self, key_length: usize) -> Self {
        self.key_length = key_length.max(1);
        self
    }

    /// Current salt text
    #[must_use]
    pub fn salt(&self) -> &str {
        self.salt.as_str()
    }

    /// Current iteration count
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Current derived key length in bytes
    #[must_use]
    pub const fn key_length(&self) -> usize {
        self.key_length
    }

    /// Derive directly into a caller-provided buffer — **preferred**
    ///
    /// The buffer length overrides the configured key length.
    #[inline(always)]
    pub fn derive_into(
        &self,
        password: &str,
        out_key: &mut [u8],
    ) -> Result<(), Bip39SeedError> {
        derive_pbkdf2_key_into(password, self.salt.as_str(), self.iterations, out_key)
    }

    /// Convenience: derive and return a fresh key of the configured length
    #[inline(always)]
    pub fn derive(&self, password: &str) -> Result<SecretBytes, Bip39SeedError> {
        derive_pbkdf2_key(
            password,
            self.salt.as_str(),
            self.iterations,
            self.key_length,
        )
    }
}

impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}
