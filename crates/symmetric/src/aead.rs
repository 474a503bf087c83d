//! Authenticated encryption with associated data
//!
//! One-shot AEAD operations with detached tags. The constructions (GCM,
//! CCM, ChaCha20-Poly1305) are supplied by their RustCrypto crates; this
//! module selects one from a [`CipherKind`] and moves the buffers around.
//!
//! # Examples
//!
//! ```
//! use cipherkit_symmetric::{decrypt_aead, encrypt_aead, generate_iv, generate_key, CipherKind};
//! use cipherkit_symmetric::Result;
//!
//! fn example() -> Result<()> {
//!     let kind = CipherKind::Aes256Gcm;
//!     let key = generate_key(kind);
//!     let nonce = generate_iv(kind);
//!
//!     let (tag, ciphertext) =
//!         encrypt_aead(kind, key.as_ref(), &nonce, b"header", b"secret message")?;
//!     let plaintext = decrypt_aead(kind, key.as_ref(), &nonce, b"header", &tag, &ciphertext)?;
//!     assert_eq!(&plaintext[..], &b"secret message"[..]);
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use ::aead::consts::{U12, U16};
use ::aead::{AeadInPlace, KeyInit, Nonce, Tag};
use aes_gcm::AesGcm;
use ccm::Ccm;
use chacha20poly1305::ChaCha20Poly1305;

use cipherkit_params::symmetric::AEAD_TAG_SIZE;

use crate::error::{
    from_aead_open_error, from_aead_seal_error, from_setup_error, validate, Result,
};
use crate::types::CipherKind;

/// A detached authentication tag
pub type AeadTag = [u8; AEAD_TAG_SIZE];

// The aes-gcm crate only aliases the 128- and 256-bit variants
type Aes192Gcm = AesGcm<aes::Aes192, U12>;
type Aes128Ccm = Ccm<aes::Aes128, U16, U12>;
type Aes192Ccm = Ccm<aes::Aes192, U16, U12>;
type Aes256Ccm = Ccm<aes::Aes256, U16, U12>;

/// Encrypts and authenticates `plaintext`, binding `aad` into the tag
///
/// Returns the detached 16-byte tag and the ciphertext, in that order. The
/// ciphertext is exactly as long as the plaintext.
pub fn encrypt_aead(
    kind: CipherKind,
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(AeadTag, Vec<u8>)> {
    check_aead_inputs(kind, key, nonce)?;
    seal(kind, key, nonce, aad, plaintext)
}

/// Verifies the tag over `ciphertext` and `aad`, then decrypts
///
/// Fails with [`Error::AuthenticationFailed`](crate::Error) when the tag
/// does not verify; no plaintext is ever released for unauthenticated data.
pub fn decrypt_aead(
    kind: CipherKind,
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    tag: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    check_aead_inputs(kind, key, nonce)?;
    validate::length("aead tag", tag.len(), AEAD_TAG_SIZE)?;
    let mut expected = [0u8; AEAD_TAG_SIZE];
    expected.copy_from_slice(tag);
    open(kind, key, nonce, aad, &expected, ciphertext)
}

fn check_aead_inputs(kind: CipherKind, key: &[u8], nonce: &[u8]) -> Result<()> {
    validate::parameter(
        kind.is_aead(),
        "aead",
        "cipher does not authenticate; use encrypt/decrypt",
    )?;
    validate::key_length(kind.name(), key.len(), kind.key_size())?;
    validate::length("aead nonce", nonce.len(), kind.iv_size())
}

pub(crate) fn seal(
    kind: CipherKind,
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(AeadTag, Vec<u8>)> {
    let mut buf = plaintext.to_vec();
    let tag = match kind {
        CipherKind::Aes128Gcm => {
            let cipher = aes_gcm::Aes128Gcm::new_from_slice(key)
                .map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::Aes192Gcm => {
            let cipher = Aes192Gcm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::Aes256Gcm => {
            let cipher = aes_gcm::Aes256Gcm::new_from_slice(key)
                .map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::Aes128Ccm => {
            let cipher = Aes128Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::Aes192Ccm => {
            let cipher = Aes192Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::Aes256Ccm => {
            let cipher = Aes256Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        CipherKind::ChaCha20Poly1305 => {
            let cipher =
                ChaCha20Poly1305::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            seal_with(&cipher, kind, nonce, aad, &mut buf)?
        }
        _ => {
            return Err(crate::error::Error::UnsupportedCipher { name: kind.name() });
        }
    };
    Ok((tag, buf))
}

pub(crate) fn open(
    kind: CipherKind,
    key: &[u8],
    nonce: &[u8],
    aad: &[u8],
    tag: &AeadTag,
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let mut buf = ciphertext.to_vec();
    match kind {
        CipherKind::Aes128Gcm => {
            let cipher = aes_gcm::Aes128Gcm::new_from_slice(key)
                .map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::Aes192Gcm => {
            let cipher = Aes192Gcm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::Aes256Gcm => {
            let cipher = aes_gcm::Aes256Gcm::new_from_slice(key)
                .map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::Aes128Ccm => {
            let cipher = Aes128Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::Aes192Ccm => {
            let cipher = Aes192Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::Aes256Ccm => {
            let cipher = Aes256Ccm::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        CipherKind::ChaCha20Poly1305 => {
            let cipher =
                ChaCha20Poly1305::new_from_slice(key).map_err(|_| from_setup_error(kind))?;
            open_with(&cipher, kind, nonce, aad, tag, &mut buf)?;
        }
        _ => {
            return Err(crate::error::Error::UnsupportedCipher { name: kind.name() });
        }
    }
    Ok(buf)
}

fn seal_with<A: AeadInPlace>(
    cipher: &A,
    kind: CipherKind,
    nonce: &[u8],
    aad: &[u8],
    buf: &mut Vec<u8>,
) -> Result<AeadTag> {
    let nonce = Nonce::<A>::from_slice(nonce);
    let tag = cipher
        .encrypt_in_place_detached(nonce, aad, buf.as_mut_slice())
        .map_err(|e| from_aead_seal_error(kind, e))?;
    let mut out = [0u8; AEAD_TAG_SIZE];
    out.copy_from_slice(tag.as_slice());
    Ok(out)
}

fn open_with<A: AeadInPlace>(
    cipher: &A,
    kind: CipherKind,
    nonce: &[u8],
    aad: &[u8],
    tag: &AeadTag,
    buf: &mut Vec<u8>,
) -> Result<()> {
    let nonce = Nonce::<A>::from_slice(nonce);
    let tag = Tag::<A>::from_slice(tag);
    cipher
        .decrypt_in_place_detached(nonce, aad, buf.as_mut_slice(), tag)
        .map_err(|e| from_aead_open_error(kind, e))
}
