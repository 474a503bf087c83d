//! Cipher selection types
//!
//! [`CipherKind`] names every algorithm+mode pair this library can drive,
//! and answers the size and mode questions the rest of the crate needs
//! (block size, IV size, key size, AEAD-ness). The answers come from the
//! constants in `cipherkit-params`; the implementations live in the wrapped
//! primitive crates.

use core::fmt;
use core::str::FromStr;

use cipherkit_params::symmetric::*;

use crate::error::Error;

/// Whether a cipher context transforms plaintext into ciphertext or back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// How a block cipher chains multiple blocks together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    /// Electronic codebook: each block independently
    Ecb,
    /// Cipher block chaining, with optional padding
    Cbc,
    /// Counter mode keystream
    Ctr,
    /// Galois/counter mode (AEAD)
    Gcm,
    /// Counter with CBC-MAC (AEAD)
    Ccm,
    /// Pure stream cipher
    Stream,
}

impl BlockMode {
    pub const fn name(self) -> &'static str {
        match self {
            BlockMode::Ecb => "ECB",
            BlockMode::Cbc => "CBC",
            BlockMode::Ctr => "CTR",
            BlockMode::Gcm => "GCM",
            BlockMode::Ccm => "CCM",
            BlockMode::Stream => "STREAM",
        }
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Padding scheme applied to the final block in CBC mode
///
/// The padding algorithms themselves are supplied by the `block-padding`
/// crate; this enum only selects one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// No padding: input must already be block-aligned
    None,
    /// PKCS#7: each padding byte holds the padding length
    Pkcs7,
    /// ISO/IEC 7816-4: a 0x80 marker followed by zeros
    Iso7816,
    /// ANSI X9.23: zeros followed by the padding length
    AnsiX923,
    /// Zero bytes; nothing is added to already-aligned input
    Zeros,
}

impl Padding {
    pub const fn name(self) -> &'static str {
        match self {
            Padding::None => "NONE",
            Padding::Pkcs7 => "PKCS7",
            Padding::Iso7816 => "ISO7816",
            Padding::AnsiX923 => "ANSIX923",
            Padding::Zeros => "ZEROS",
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Padding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const TABLE: [Padding; 5] = [
            Padding::None,
            Padding::Pkcs7,
            Padding::Iso7816,
            Padding::AnsiX923,
            Padding::Zeros,
        ];
        TABLE
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or(Error::InvalidParameter {
                context: "padding name",
                #[cfg(feature = "std")]
                message: String::new(),
            })
    }
}

/// Every algorithm+mode pair this library can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Aes128Ecb,
    Aes192Ecb,
    Aes256Ecb,
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Ctr,
    Aes192Ctr,
    Aes256Ctr,
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
    Aes128Ccm,
    Aes192Ccm,
    Aes256Ccm,
    DesEcb,
    DesCbc,
    Des3Ecb,
    Des3Cbc,
    ChaCha20,
    ChaCha20Poly1305,
}

impl CipherKind {
    /// Every kind, whether or not it is compiled into this build
    pub const ALL: [CipherKind; 21] = [
        CipherKind::Aes128Ecb,
        CipherKind::Aes192Ecb,
        CipherKind::Aes256Ecb,
        CipherKind::Aes128Cbc,
        CipherKind::Aes192Cbc,
        CipherKind::Aes256Cbc,
        CipherKind::Aes128Ctr,
        CipherKind::Aes192Ctr,
        CipherKind::Aes256Ctr,
        CipherKind::Aes128Gcm,
        CipherKind::Aes192Gcm,
        CipherKind::Aes256Gcm,
        CipherKind::Aes128Ccm,
        CipherKind::Aes192Ccm,
        CipherKind::Aes256Ccm,
        CipherKind::DesEcb,
        CipherKind::DesCbc,
        CipherKind::Des3Ecb,
        CipherKind::Des3Cbc,
        CipherKind::ChaCha20,
        CipherKind::ChaCha20Poly1305,
    ];

    /// The kinds compiled into this build
    pub fn available() -> impl Iterator<Item = CipherKind> {
        Self::ALL.into_iter().filter(|k| k.is_available())
    }

    /// Canonical cipher name, e.g. `"AES-128-CBC"`
    pub const fn name(self) -> &'static str {
        match self {
            CipherKind::Aes128Ecb => "AES-128-ECB",
            CipherKind::Aes192Ecb => "AES-192-ECB",
            CipherKind::Aes256Ecb => "AES-256-ECB",
            CipherKind::Aes128Cbc => "AES-128-CBC",
            CipherKind::Aes192Cbc => "AES-192-CBC",
            CipherKind::Aes256Cbc => "AES-256-CBC",
            CipherKind::Aes128Ctr => "AES-128-CTR",
            CipherKind::Aes192Ctr => "AES-192-CTR",
            CipherKind::Aes256Ctr => "AES-256-CTR",
            CipherKind::Aes128Gcm => "AES-128-GCM",
            CipherKind::Aes192Gcm => "AES-192-GCM",
            CipherKind::Aes256Gcm => "AES-256-GCM",
            CipherKind::Aes128Ccm => "AES-128-CCM",
            CipherKind::Aes192Ccm => "AES-192-CCM",
            CipherKind::Aes256Ccm => "AES-256-CCM",
            CipherKind::DesEcb => "DES-ECB",
            CipherKind::DesCbc => "DES-CBC",
            CipherKind::Des3Ecb => "DES-EDE3-ECB",
            CipherKind::Des3Cbc => "DES-EDE3-CBC",
            CipherKind::ChaCha20 => "CHACHA20",
            CipherKind::ChaCha20Poly1305 => "CHACHA20-POLY1305",
        }
    }

    /// Cipher block size in bytes; 1 for stream ciphers
    pub const fn block_size(self) -> usize {
        match self {
            CipherKind::Aes128Ecb
            | CipherKind::Aes192Ecb
            | CipherKind::Aes256Ecb
            | CipherKind::Aes128Cbc
            | CipherKind::Aes192Cbc
            | CipherKind::Aes256Cbc
            | CipherKind::Aes128Ctr
            | CipherKind::Aes192Ctr
            | CipherKind::Aes256Ctr
            | CipherKind::Aes128Gcm
            | CipherKind::Aes192Gcm
            | CipherKind::Aes256Gcm
            | CipherKind::Aes128Ccm
            | CipherKind::Aes192Ccm
            | CipherKind::Aes256Ccm => AES_BLOCK_SIZE,
            CipherKind::DesEcb
            | CipherKind::DesCbc
            | CipherKind::Des3Ecb
            | CipherKind::Des3Cbc => DES_BLOCK_SIZE,
            CipherKind::ChaCha20 | CipherKind::ChaCha20Poly1305 => 1,
        }
    }

    /// Required IV/nonce length in bytes; 0 for ECB
    pub const fn iv_size(self) -> usize {
        match self {
            CipherKind::Aes128Ecb
            | CipherKind::Aes192Ecb
            | CipherKind::Aes256Ecb
            | CipherKind::DesEcb
            | CipherKind::Des3Ecb => 0,
            CipherKind::Aes128Cbc
            | CipherKind::Aes192Cbc
            | CipherKind::Aes256Cbc
            | CipherKind::Aes128Ctr
            | CipherKind::Aes192Ctr
            | CipherKind::Aes256Ctr => AES_IV_SIZE,
            CipherKind::Aes128Gcm | CipherKind::Aes192Gcm | CipherKind::Aes256Gcm => {
                GCM_NONCE_SIZE
            }
            CipherKind::Aes128Ccm | CipherKind::Aes192Ccm | CipherKind::Aes256Ccm => {
                CCM_NONCE_SIZE
            }
            CipherKind::DesCbc | CipherKind::Des3Cbc => DES_BLOCK_SIZE,
            CipherKind::ChaCha20 | CipherKind::ChaCha20Poly1305 => CHACHA20_NONCE_SIZE,
        }
    }

    /// Required key length in bytes
    pub const fn key_size(self) -> usize {
        match self {
            CipherKind::Aes128Ecb
            | CipherKind::Aes128Cbc
            | CipherKind::Aes128Ctr
            | CipherKind::Aes128Gcm
            | CipherKind::Aes128Ccm => AES128_KEY_SIZE,
            CipherKind::Aes192Ecb
            | CipherKind::Aes192Cbc
            | CipherKind::Aes192Ctr
            | CipherKind::Aes192Gcm
            | CipherKind::Aes192Ccm => AES192_KEY_SIZE,
            CipherKind::Aes256Ecb
            | CipherKind::Aes256Cbc
            | CipherKind::Aes256Ctr
            | CipherKind::Aes256Gcm
            | CipherKind::Aes256Ccm => AES256_KEY_SIZE,
            CipherKind::DesEcb | CipherKind::DesCbc => DES_KEY_SIZE,
            CipherKind::Des3Ecb | CipherKind::Des3Cbc => DES3_KEY_SIZE,
            CipherKind::ChaCha20 | CipherKind::ChaCha20Poly1305 => CHACHA20_KEY_SIZE,
        }
    }

    /// Required key length in bits, parity bits included for DES
    pub const fn key_bits(self) -> usize {
        self.key_size() * 8
    }

    /// The chaining mode of this kind
    pub const fn block_mode(self) -> BlockMode {
        match self {
            CipherKind::Aes128Ecb
            | CipherKind::Aes192Ecb
            | CipherKind::Aes256Ecb
            | CipherKind::DesEcb
            | CipherKind::Des3Ecb => BlockMode::Ecb,
            CipherKind::Aes128Cbc
            | CipherKind::Aes192Cbc
            | CipherKind::Aes256Cbc
            | CipherKind::DesCbc
            | CipherKind::Des3Cbc => BlockMode::Cbc,
            CipherKind::Aes128Ctr | CipherKind::Aes192Ctr | CipherKind::Aes256Ctr => {
                BlockMode::Ctr
            }
            CipherKind::Aes128Gcm | CipherKind::Aes192Gcm | CipherKind::Aes256Gcm => {
                BlockMode::Gcm
            }
            CipherKind::Aes128Ccm | CipherKind::Aes192Ccm | CipherKind::Aes256Ccm => {
                BlockMode::Ccm
            }
            CipherKind::ChaCha20 | CipherKind::ChaCha20Poly1305 => BlockMode::Stream,
        }
    }

    /// Whether this kind produces an authentication tag
    pub const fn is_aead(self) -> bool {
        matches!(
            self,
            CipherKind::Aes128Gcm
                | CipherKind::Aes192Gcm
                | CipherKind::Aes256Gcm
                | CipherKind::Aes128Ccm
                | CipherKind::Aes192Ccm
                | CipherKind::Aes256Ccm
                | CipherKind::ChaCha20Poly1305
        )
    }

    /// Authentication tag length in bytes; 0 for non-AEAD kinds
    pub const fn tag_size(self) -> usize {
        if self.is_aead() {
            AEAD_TAG_SIZE
        } else {
            0
        }
    }

    /// Whether this kind is compiled into the current build
    pub fn is_available(self) -> bool {
        match self {
            CipherKind::DesEcb
            | CipherKind::DesCbc
            | CipherKind::Des3Ecb
            | CipherKind::Des3Cbc => cfg!(feature = "des"),
            _ if self.is_aead() => cfg!(feature = "aead"),
            _ => true,
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or(Error::UnsupportedCipher {
                name: "unrecognized cipher name",
            })
    }
}
