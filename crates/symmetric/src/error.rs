//! Error handling for symmetric cipher operations
//!
//! This module re-exports the workspace error system and adds the
//! conversions from the primitive crates' error types. Helper functions are
//! used instead of `From` impls, which orphan rules would not allow here.

// Re-export the primary API error system
pub use cipherkit_api::error::{validate, Error, Result};

use crate::types::CipherKind;

/// Converts a key-material construction failure reported by a primitive crate
///
/// Key and IV lengths are validated before any primitive type is built, so
/// reaching this path means the two layers disagree about a size.
pub(crate) fn from_setup_error(kind: CipherKind) -> Error {
    Error::Other {
        context: kind.name(),
        #[cfg(feature = "std")]
        message: "primitive cipher construction rejected validated key material".into(),
    }
}

/// Converts a padding removal failure into the API error
pub(crate) fn from_unpad_error(kind: CipherKind, _: block_padding::UnpadError) -> Error {
    Error::InvalidPadding {
        context: kind.name(),
    }
}

/// Converts an AEAD failure during decryption; the aead crates intentionally
/// report a single opaque error for tag mismatch
#[cfg(feature = "aead")]
pub(crate) fn from_aead_open_error(kind: CipherKind, _: ::aead::Error) -> Error {
    Error::AuthenticationFailed {
        context: kind.name(),
        #[cfg(feature = "std")]
        message: "authentication tag verification failed".into(),
    }
}

/// Converts an AEAD failure during encryption (e.g. an oversized message)
#[cfg(feature = "aead")]
pub(crate) fn from_aead_seal_error(kind: CipherKind, _: ::aead::Error) -> Error {
    Error::Other {
        context: kind.name(),
        #[cfg(feature = "std")]
        message: "AEAD encryption failed".into(),
    }
}
