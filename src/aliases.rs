//! # Secret Type Aliases
//!
//! Central aliases for the HMAC primitive and the zeroize-on-drop containers
//! that carry derived key material.
//!
//! ## Type Categories
//!
//! ### HMAC Primitives
//! - [`HmacSha512`] - HMAC-SHA512, the PBKDF2 pseudorandom function
//!
//! ### Derived Key Material
//! - [`SecretBytes`] - variable-length derived key
//! - [`Seed64`] - 64-byte BIP39 seed
//!
//! Both containers overwrite their contents with zeros when dropped, so a
//! derived key never outlives its owner in memory.

use hmac::Hmac;
use sha2::Sha512;
use zeroize::Zeroizing;

pub type HmacSha512 = Hmac<Sha512>;

/// Variable-length derived key, zeroized on drop.
pub type SecretBytes = Zeroizing<Vec<u8>>;

/// 64-byte BIP39 seed, zeroized on drop.
pub type Seed64 = Zeroizing<[u8; 64]>;
