//! Builder-style derivation API.
//!
//! See [`Pbkdf2Builder`] for chainable configuration of salt, iteration
//! count, and key length.

pub mod pbkdf2_builder;

pub use pbkdf2_builder::Pbkdf2Builder;
