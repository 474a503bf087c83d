//! Symmetric cipher toolkit for the cipherkit workspace
//!
//! One enum-driven interface over the audited RustCrypto cipher crates. The
//! key schedules, block-mode transforms, padding algorithms and AEAD tag
//! computation all execute inside those crates; this crate selects the
//! algorithm at runtime, manages context lifetime and buffering, and
//! translates their errors into the workspace error system.
//!
//! Three levels of interface:
//!
//! - one-shot [`encrypt`]/[`decrypt`] and (with the `aead` feature)
//!   [`encrypt_aead`]/[`decrypt_aead`]
//! - the stateful [`Cipher`] handle with `start`/`update`/`finish`
//! - `std::io` streaming wrappers in [`streaming`] (with the `std` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod accel;
#[cfg(feature = "aead")]
pub mod aead;
pub mod cipher;
mod engine;
pub mod error;
pub mod keys;
#[cfg(feature = "std")]
pub mod streaming;
pub mod types;

// Re-export main types for convenience
pub use accel::aes_ni_available;
#[cfg(feature = "aead")]
pub use self::aead::{decrypt_aead, encrypt_aead, AeadTag};
pub use cipher::{decrypt, encrypt, Cipher};
pub use keys::{generate_iv, generate_key};
pub use types::{BlockMode, CipherKind, Operation, Padding};

// Re-export the API error system instead of a crate-local one
pub use cipherkit_api::error::{validate, Error, Result};
pub use cipherkit_api::SecretVec;

/// Whether this build carries the authenticated-encryption modes
pub fn supports_aead() -> bool {
    cfg!(feature = "aead")
}
