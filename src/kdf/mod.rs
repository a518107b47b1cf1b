//! # Key Derivation Functions (KDF)
//!
//! This module provides the PBKDF2-HMAC-SHA512 derivation underlying BIP39
//! mnemonic-to-seed conversion.
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA512 (the BIP39 seed KDF)
//!
//! ## Usage
//!
//! For BIP39 seeds, use the high-level [`mnemonic_to_seed`](crate::mnemonic_to_seed)
//! function, which fixes the salt prefix, iteration count, and seed length.
//!
//! The low-level functions here are exposed for custom parameter sets, such
//! as deriving keys of other lengths or with other salts.

pub mod pbkdf2;
