//! # cipherkit
//!
//! A symmetric-cipher toolkit: one enum-driven interface over the audited
//! RustCrypto cipher crates.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherkit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::io` streaming
//! - `aead` (default): authenticated encryption (GCM, CCM, ChaCha20-Poly1305)
//! - `des` (default): DES and Triple-DES
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cipherkit-api`]: error handling and secret-byte containers
//! - [`cipherkit-params`]: algorithm size constants
//! - [`cipherkit-symmetric`]: cipher selection, the streaming handle and the
//!   one-shot/AEAD interfaces

#![cfg_attr(not(feature = "std"), no_std)]

pub use cipherkit_api as api;
pub use cipherkit_params as params;
pub use cipherkit_symmetric as symmetric;

/// Common imports for cipherkit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export secret-byte containers
    pub use crate::api::SecretVec;

    // Re-export cipher selection and the streaming handle
    pub use crate::symmetric::{
        decrypt, encrypt, BlockMode, Cipher, CipherKind, Operation, Padding,
    };

    // Re-export key material helpers
    pub use crate::symmetric::{generate_iv, generate_key};

    // Conditional re-exports based on features
    #[cfg(feature = "aead")]
    pub use crate::symmetric::{decrypt_aead, encrypt_aead, AeadTag};

    #[cfg(feature = "std")]
    pub use crate::symmetric::streaming::{
        CipherDecryptStream, CipherEncryptStream, StreamingDecrypt, StreamingEncrypt,
    };
}
