//! The stateful cipher handle and the one-shot helpers
//!
//! [`Cipher`] owns one configured cipher context: algorithm selection, key
//! material (zeroized on drop), the last IV, and the running engine state.
//! Configuration is chainable; `start` arms the context and `update`/`finish`
//! stream data through it. The IV is retained, so a finished context can be
//! re-armed with another `start` call.
//!
//! # Examples
//!
//! ```
//! use cipherkit_symmetric::{Cipher, CipherKind, Operation, Result};
//!
//! fn example() -> Result<()> {
//!     let key = [0x42u8; 16];
//!     let iv = [0x24u8; 16];
//!
//!     let mut cipher = Cipher::new(CipherKind::Aes128Cbc);
//!     cipher.set_key(&key, Operation::Encrypt)?;
//!     cipher.set_iv(&iv)?;
//!
//!     cipher.start()?;
//!     let mut ciphertext = cipher.update(b"streamed in ")?;
//!     ciphertext.extend(cipher.update(b"two chunks")?);
//!     ciphertext.extend(cipher.finish()?);
//!     Ok(())
//! }
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use cipherkit_api::SecretVec;
#[cfg(feature = "aead")]
use cipherkit_params::symmetric::{AEAD_TAG_MIN_SIZE, AEAD_TAG_SIZE};

use crate::engine::Engine;
use crate::error::{validate, Error, Result};
use crate::types::{BlockMode, CipherKind, Operation, Padding};

/// An owned cipher context
pub struct Cipher {
    kind: CipherKind,
    padding: Padding,
    op: Option<Operation>,
    key: Option<SecretVec>,
    iv: Option<Vec<u8>>,
    aad: Vec<u8>,
    #[cfg(feature = "aead")]
    expected_tag: Option<[u8; AEAD_TAG_SIZE]>,
    engine: Option<Engine>,
    finished: bool,
}

impl core::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cipher")
            .field("kind", &self.kind)
            .field("padding", &self.padding)
            .field("op", &self.op)
            .field("has_key", &self.key.is_some())
            .field("has_iv", &self.iv.is_some())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl Cipher {
    /// Creates an unconfigured context for the given kind
    ///
    /// CBC kinds default to PKCS#7 padding, everything else to none.
    pub fn new(kind: CipherKind) -> Self {
        let padding = if kind.block_mode() == BlockMode::Cbc {
            Padding::Pkcs7
        } else {
            Padding::None
        };
        Self {
            kind,
            padding,
            op: None,
            key: None,
            iv: None,
            aad: Vec::new(),
            #[cfg(feature = "aead")]
            expected_tag: None,
            engine: None,
            finished: false,
        }
    }

    /// The selected cipher kind
    pub fn kind(&self) -> CipherKind {
        self.kind
    }

    /// Cipher block size in bytes; 1 for stream ciphers
    pub fn block_size(&self) -> usize {
        self.kind.block_size()
    }

    /// Required IV/nonce length in bytes
    pub fn iv_size(&self) -> usize {
        self.kind.iv_size()
    }

    /// Required key length in bytes
    pub fn key_size(&self) -> usize {
        self.kind.key_size()
    }

    /// Required key length in bits
    pub fn key_bits(&self) -> usize {
        self.kind.key_bits()
    }

    /// The chaining mode of the selected kind
    pub fn block_mode(&self) -> BlockMode {
        self.kind.block_mode()
    }

    /// The configured padding scheme
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Installs the key and the direction of the context
    ///
    /// The key is copied into a buffer that is zeroized on drop.
    pub fn set_key(&mut self, key: &[u8], op: Operation) -> Result<&mut Self> {
        validate::key_length(self.kind.name(), key.len(), self.kind.key_size())?;
        self.key = Some(SecretVec::from_slice(key));
        self.op = Some(op);
        self.disarm();
        Ok(self)
    }

    /// Installs the IV/nonce; its length must equal [`Self::iv_size`]
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<&mut Self> {
        validate::length("cipher iv", iv.len(), self.kind.iv_size())?;
        self.iv = Some(iv.to_vec());
        self.disarm();
        Ok(self)
    }

    /// Selects the padding scheme; only CBC kinds accept one
    pub fn set_padding(&mut self, padding: Padding) -> Result<&mut Self> {
        if padding != Padding::None {
            validate::parameter(
                self.kind.block_mode() == BlockMode::Cbc,
                "set_padding",
                "padding is only supported in CBC mode",
            )?;
        }
        self.padding = padding;
        self.disarm();
        Ok(self)
    }

    /// Supplies associated data for an AEAD kind
    ///
    /// May be called before or after `start`, but always before the first
    /// `update`.
    #[cfg(feature = "aead")]
    pub fn set_aad(&mut self, aad: &[u8]) -> Result<&mut Self> {
        validate::parameter(
            self.kind.is_aead(),
            "set_aad",
            "cipher does not authenticate associated data",
        )?;
        if let Some(engine) = self.engine.as_mut() {
            if let Some(state) = engine.aead_mut() {
                state.set_aad(aad)?;
            }
        }
        self.aad = aad.to_vec();
        Ok(self)
    }

    /// Installs the tag an AEAD decryption is expected to verify against
    ///
    /// The full 16-byte tag is required; truncated tags cannot be verified.
    #[cfg(feature = "aead")]
    pub fn expect_tag(&mut self, tag: &[u8]) -> Result<&mut Self> {
        validate::parameter(
            self.kind.is_aead(),
            "expect_tag",
            "cipher does not carry an authentication tag",
        )?;
        validate::length("aead tag", tag.len(), AEAD_TAG_SIZE)?;
        let mut expected = [0u8; AEAD_TAG_SIZE];
        expected.copy_from_slice(tag);
        if let Some(engine) = self.engine.as_mut() {
            if let Some(state) = engine.aead_mut() {
                state.set_expected_tag(expected);
            }
        }
        self.expected_tag = Some(expected);
        Ok(self)
    }

    /// Arms the context from the configured kind, key and IV
    ///
    /// A finished context can be re-armed; the retained IV is used again.
    pub fn start(&mut self) -> Result<()> {
        if !self.kind.is_available() {
            return Err(Error::NotImplemented {
                feature: disabled_feature(self.kind),
            });
        }
        let key = self.key.as_ref().ok_or(Error::InvalidKey {
            context: "start",
            #[cfg(feature = "std")]
            message: "no key configured; call set_key first".into(),
        })?;
        // set_key installs both together
        let op = self.op.unwrap_or(Operation::Encrypt);
        let iv: &[u8] = match &self.iv {
            Some(iv) => iv,
            None => {
                validate::parameter(
                    self.kind.iv_size() == 0,
                    "start",
                    "no IV configured; call set_iv first",
                )?;
                &[]
            }
        };
        #[cfg(feature = "aead")]
        let expected_tag = self.expected_tag.as_ref();
        #[cfg(not(feature = "aead"))]
        let expected_tag = None;
        self.engine = Some(Engine::build(
            self.kind,
            op,
            self.padding,
            key,
            iv,
            &self.aad,
            expected_tag,
        )?);
        self.finished = false;
        Ok(())
    }

    /// Feeds a chunk of input through the context
    ///
    /// The returned buffer may be empty or larger than the input, depending
    /// on what the mode buffers internally. ECB input must be a whole number
    /// of blocks per call; AEAD kinds buffer everything until `finish`.
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        validate::parameter(
            !self.finished,
            "update",
            "context already finished; call start to re-arm",
        )?;
        self.engine
            .as_mut()
            .ok_or_else(not_started)?
            .update(input)
    }

    /// Completes the operation, returning whatever output remains
    ///
    /// CBC applies or strips padding here; AEAD kinds run the whole
    /// authenticated operation here.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        validate::parameter(
            !self.finished,
            "finish",
            "context already finished; call start to re-arm",
        )?;
        let engine = self.engine.as_mut().ok_or_else(not_started)?;
        let result = engine.finish();
        self.finished = true;
        result
    }

    /// One-shot `start` + `update` + `finish`
    pub fn crypt(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.start()?;
        let mut output = self.update(input)?;
        let tail = self.finish()?;
        output.extend_from_slice(&tail);
        Ok(output)
    }

    /// Exports the authentication tag computed by an AEAD encryption
    ///
    /// Only available after `finish`. `len` selects a truncated prefix of
    /// the 16-byte tag, down to 4 bytes.
    #[cfg(feature = "aead")]
    pub fn tag(&self, len: usize) -> Result<Vec<u8>> {
        validate::parameter(
            self.kind.is_aead(),
            "tag",
            "cipher does not carry an authentication tag",
        )?;
        validate::parameter(
            (AEAD_TAG_MIN_SIZE..=AEAD_TAG_SIZE).contains(&len),
            "tag",
            "tag length must be between 4 and 16 bytes",
        )?;
        validate::parameter(
            self.finished,
            "tag",
            "tag is only available after finish",
        )?;
        let tag = self
            .engine
            .as_ref()
            .and_then(|engine| engine.tag())
            .ok_or(Error::InvalidParameter {
                context: "tag",
                #[cfg(feature = "std")]
                message: "tag is only produced by an encryption context".into(),
            })?;
        Ok(tag[..len].to_vec())
    }

    fn disarm(&mut self) {
        self.engine = None;
        self.finished = false;
    }
}

fn not_started() -> Error {
    Error::InvalidParameter {
        context: "cipher",
        #[cfg(feature = "std")]
        message: "context is not started; call start first".into(),
    }
}

fn disabled_feature(kind: CipherKind) -> &'static str {
    match kind.block_mode() {
        BlockMode::Ecb | BlockMode::Cbc => "des",
        _ => "aead",
    }
}

/// Encrypts `plaintext` in one call with a throwaway context
///
/// AEAD kinds are rejected here: their tag has to go somewhere, so they go
/// through [`encrypt_aead`](crate::aead::encrypt_aead) instead.
pub fn encrypt(
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    one_shot(kind, padding, key, iv, plaintext, Operation::Encrypt)
}

/// Decrypts `ciphertext` in one call with a throwaway context
pub fn decrypt(
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    one_shot(kind, padding, key, iv, ciphertext, Operation::Decrypt)
}

fn one_shot(
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
    input: &[u8],
    op: Operation,
) -> Result<Vec<u8>> {
    validate::parameter(
        !kind.is_aead(),
        "cipher",
        "AEAD kinds carry a tag; use encrypt_aead/decrypt_aead",
    )?;
    if kind.block_mode() == BlockMode::Ecb {
        validate::parameter(
            !input.is_empty() && input.len() % kind.block_size() == 0,
            "ECB",
            "input size must be a non-zero multiple of the block size",
        )?;
    }
    let mut cipher = Cipher::new(kind);
    cipher.set_padding(padding)?;
    cipher.set_key(key, op)?;
    if kind.iv_size() > 0 {
        cipher.set_iv(iv)?;
    } else {
        validate::length("cipher iv", iv.len(), 0)?;
    }
    cipher.crypt(input)
}
