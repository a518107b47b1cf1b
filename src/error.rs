//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, Bip39SeedError>`](Bip39SeedError).

use thiserror::Error;

/// The error type for all seed derivation operations.
///
/// Derivation either returns a complete, correctly-sized key or fails with
/// one of these variants; partial results are never produced.
#[derive(Error, Debug)]
pub enum Bip39SeedError {
    /// A derivation parameter is outside its valid domain.
    ///
    /// Returned for:
    /// - Zero PBKDF2 iteration count
    /// - Zero derived key length (empty output buffer)
    ///
    /// Callers must not retry without correcting the input.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The PBKDF2-HMAC-SHA512 provider rejected the request.
    ///
    /// This indicates a broken or non-conformant cryptographic provider and
    /// is not recoverable by the caller. It does not occur with the linked
    /// RustCrypto implementation under valid parameters.
    #[error("Algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),
}
