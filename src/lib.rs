// src/lib.rs

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod error;
pub mod kdf;
pub mod seed;

// High-level API — this is what 99% of users import
pub use error::Bip39SeedError;
pub use seed::mnemonic_to_seed;

// Low-level KDF — intentionally public at the root because:
// • It is needed for non-BIP39 parameter sets (custom salts, iteration counts,
//   key lengths) without going through the seed helper
// • It is the only non-wrapper crypto function users ever need directly
// • Keeping it at the root is the established pattern in the ecosystem (see
//   `ring`, `password-hash`, etc.)
pub use kdf::pbkdf2::{derive_pbkdf2_key, derive_pbkdf2_key_into};

pub use builders::Pbkdf2Builder;
