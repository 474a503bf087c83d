//! Internal dispatch and chunking core
//!
//! Everything stateful lives here: the mapping from [`CipherKind`] to the
//! concrete primitive-crate types, the per-block iteration ECB needs (the
//! primitives process exactly one block per call), CBC partial-block
//! buffering with padding applied at the boundary, and the buffering state
//! for the AEAD modes. The public [`crate::cipher::Cipher`] handle and the
//! one-shot helpers both drive this engine.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{
    BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut, KeyInit, KeyIvInit,
    StreamCipher,
};
use block_padding::{AnsiX923, Iso7816, Pkcs7, RawPadding, ZeroPadding};
use zeroize::Zeroize;

use cipherkit_api::SecretVec;
#[cfg(feature = "aead")]
use cipherkit_params::symmetric::AEAD_TAG_SIZE;

use crate::error::{from_setup_error, from_unpad_error, validate, Error, Result};
use crate::types::{CipherKind, Operation, Padding};

/// A running cipher state, built by [`Engine::build`] and driven through
/// `update`/`finish`
pub(crate) enum Engine {
    Block(BlockState),
    Stream(StreamState),
    #[cfg(feature = "aead")]
    Aead(AeadState),
}

impl Engine {
    pub(crate) fn build(
        kind: CipherKind,
        op: Operation,
        padding: Padding,
        key: &SecretVec,
        iv: &[u8],
        aad: &[u8],
        expected_tag: Option<&[u8; 16]>,
    ) -> Result<Engine> {
        let key = key.as_ref();
        match kind {
            CipherKind::Aes128Ecb => Ok(Engine::ecb(
                kind,
                op,
                EcbCore::Aes128(aes::Aes128::new_from_slice(key).map_err(|_| from_setup_error(kind))?),
            )),
            CipherKind::Aes192Ecb => Ok(Engine::ecb(
                kind,
                op,
                EcbCore::Aes192(aes::Aes192::new_from_slice(key).map_err(|_| from_setup_error(kind))?),
            )),
            CipherKind::Aes256Ecb => Ok(Engine::ecb(
                kind,
                op,
                EcbCore::Aes256(aes::Aes256::new_from_slice(key).map_err(|_| from_setup_error(kind))?),
            )),
            CipherKind::DesEcb => {
                #[cfg(feature = "des")]
                {
                    Ok(Engine::ecb(
                        kind,
                        op,
                        EcbCore::Des(
                            des::Des::new_from_slice(key).map_err(|_| from_setup_error(kind))?,
                        ),
                    ))
                }
                #[cfg(not(feature = "des"))]
                {
                    Err(Error::NotImplemented { feature: "des" })
                }
            }
            CipherKind::Des3Ecb => {
                #[cfg(feature = "des")]
                {
                    Ok(Engine::ecb(
                        kind,
                        op,
                        EcbCore::Des3(
                            des::TdesEde3::new_from_slice(key)
                                .map_err(|_| from_setup_error(kind))?,
                        ),
                    ))
                }
                #[cfg(not(feature = "des"))]
                {
                    Err(Error::NotImplemented { feature: "des" })
                }
            }
            CipherKind::Aes128Cbc => {
                let core = match op {
                    Operation::Encrypt => CbcCore::EncAes128(
                        cbc::Encryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                    Operation::Decrypt => CbcCore::DecAes128(
                        cbc::Decryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                };
                Ok(Engine::cbc(kind, op, padding, core))
            }
            CipherKind::Aes192Cbc => {
                let core = match op {
                    Operation::Encrypt => CbcCore::EncAes192(
                        cbc::Encryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                    Operation::Decrypt => CbcCore::DecAes192(
                        cbc::Decryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                };
                Ok(Engine::cbc(kind, op, padding, core))
            }
            CipherKind::Aes256Cbc => {
                let core = match op {
                    Operation::Encrypt => CbcCore::EncAes256(
                        cbc::Encryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                    Operation::Decrypt => CbcCore::DecAes256(
                        cbc::Decryptor::new_from_slices(key, iv)
                            .map_err(|_| from_setup_error(kind))?,
                    ),
                };
                Ok(Engine::cbc(kind, op, padding, core))
            }
            CipherKind::DesCbc => {
                #[cfg(feature = "des")]
                {
                    let core = match op {
                        Operation::Encrypt => CbcCore::EncDes(
                            cbc::Encryptor::new_from_slices(key, iv)
                                .map_err(|_| from_setup_error(kind))?,
                        ),
                        Operation::Decrypt => CbcCore::DecDes(
                            cbc::Decryptor::new_from_slices(key, iv)
                                .map_err(|_| from_setup_error(kind))?,
                        ),
                    };
                    Ok(Engine::cbc(kind, op, padding, core))
                }
                #[cfg(not(feature = "des"))]
                {
                    Err(Error::NotImplemented { feature: "des" })
                }
            }
            CipherKind::Des3Cbc => {
                #[cfg(feature = "des")]
                {
                    let core = match op {
                        Operation::Encrypt => CbcCore::EncDes3(
                            cbc::Encryptor::new_from_slices(key, iv)
                                .map_err(|_| from_setup_error(kind))?,
                        ),
                        Operation::Decrypt => CbcCore::DecDes3(
                            cbc::Decryptor::new_from_slices(key, iv)
                                .map_err(|_| from_setup_error(kind))?,
                        ),
                    };
                    Ok(Engine::cbc(kind, op, padding, core))
                }
                #[cfg(not(feature = "des"))]
                {
                    Err(Error::NotImplemented { feature: "des" })
                }
            }
            CipherKind::Aes128Ctr => Ok(Engine::Stream(StreamState {
                core: StreamCore::Aes128Ctr(
                    ctr::Ctr128BE::new_from_slices(key, iv).map_err(|_| from_setup_error(kind))?,
                ),
            })),
            CipherKind::Aes192Ctr => Ok(Engine::Stream(StreamState {
                core: StreamCore::Aes192Ctr(
                    ctr::Ctr128BE::new_from_slices(key, iv).map_err(|_| from_setup_error(kind))?,
                ),
            })),
            CipherKind::Aes256Ctr => Ok(Engine::Stream(StreamState {
                core: StreamCore::Aes256Ctr(
                    ctr::Ctr128BE::new_from_slices(key, iv).map_err(|_| from_setup_error(kind))?,
                ),
            })),
            CipherKind::ChaCha20 => Ok(Engine::Stream(StreamState {
                core: StreamCore::ChaCha20(
                    chacha20::ChaCha20::new_from_slices(key, iv)
                        .map_err(|_| from_setup_error(kind))?,
                ),
            })),
            CipherKind::Aes128Gcm
            | CipherKind::Aes192Gcm
            | CipherKind::Aes256Gcm
            | CipherKind::Aes128Ccm
            | CipherKind::Aes192Ccm
            | CipherKind::Aes256Ccm
            | CipherKind::ChaCha20Poly1305 => {
                #[cfg(feature = "aead")]
                {
                    Ok(Engine::Aead(AeadState::new(
                        kind,
                        op,
                        SecretVec::from_slice(key),
                        iv,
                        aad,
                        expected_tag,
                    )))
                }
                #[cfg(not(feature = "aead"))]
                {
                    let _ = (aad, expected_tag);
                    Err(Error::NotImplemented { feature: "aead" })
                }
            }
        }
    }

    fn ecb(kind: CipherKind, op: Operation, core: EcbCore) -> Engine {
        Engine::Block(BlockState {
            kind,
            op,
            padding: Padding::None,
            block_size: kind.block_size(),
            core: BlockCore::Ecb(core),
            buf: Vec::new(),
        })
    }

    fn cbc(kind: CipherKind, op: Operation, padding: Padding, core: CbcCore) -> Engine {
        Engine::Block(BlockState {
            kind,
            op,
            padding,
            block_size: kind.block_size(),
            core: BlockCore::Cbc(core),
            buf: Vec::new(),
        })
    }

    pub(crate) fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Engine::Block(state) => state.update(input),
            Engine::Stream(state) => Ok(state.update(input)),
            #[cfg(feature = "aead")]
            Engine::Aead(state) => Ok(state.update(input)),
        }
    }

    pub(crate) fn finish(&mut self) -> Result<Vec<u8>> {
        match self {
            Engine::Block(state) => state.finish(),
            Engine::Stream(_) => Ok(Vec::new()),
            #[cfg(feature = "aead")]
            Engine::Aead(state) => state.finish(),
        }
    }

    #[cfg(feature = "aead")]
    pub(crate) fn aead_mut(&mut self) -> Option<&mut AeadState> {
        match self {
            Engine::Aead(state) => Some(state),
            _ => None,
        }
    }

    #[cfg(feature = "aead")]
    pub(crate) fn tag(&self) -> Option<&[u8; AEAD_TAG_SIZE]> {
        match self {
            Engine::Aead(state) => state.tag.as_ref(),
            _ => None,
        }
    }
}

// --- block modes -----------------------------------------------------------

pub(crate) struct BlockState {
    kind: CipherKind,
    op: Operation,
    padding: Padding,
    block_size: usize,
    core: BlockCore,
    buf: Vec<u8>,
}

enum BlockCore {
    Ecb(EcbCore),
    Cbc(CbcCore),
}

enum EcbCore {
    Aes128(aes::Aes128),
    Aes192(aes::Aes192),
    Aes256(aes::Aes256),
    #[cfg(feature = "des")]
    Des(des::Des),
    #[cfg(feature = "des")]
    Des3(des::TdesEde3),
}

impl EcbCore {
    fn process_block(&self, op: Operation, block: &mut [u8]) {
        match self {
            EcbCore::Aes128(c) => ecb_apply(c, op, block),
            EcbCore::Aes192(c) => ecb_apply(c, op, block),
            EcbCore::Aes256(c) => ecb_apply(c, op, block),
            #[cfg(feature = "des")]
            EcbCore::Des(c) => ecb_apply(c, op, block),
            #[cfg(feature = "des")]
            EcbCore::Des3(c) => ecb_apply(c, op, block),
        }
    }
}

fn ecb_apply<C: BlockEncrypt + BlockDecrypt>(cipher: &C, op: Operation, block: &mut [u8]) {
    let block = GenericArray::from_mut_slice(block);
    match op {
        Operation::Encrypt => cipher.encrypt_block(block),
        Operation::Decrypt => cipher.decrypt_block(block),
    }
}

enum CbcCore {
    EncAes128(cbc::Encryptor<aes::Aes128>),
    DecAes128(cbc::Decryptor<aes::Aes128>),
    EncAes192(cbc::Encryptor<aes::Aes192>),
    DecAes192(cbc::Decryptor<aes::Aes192>),
    EncAes256(cbc::Encryptor<aes::Aes256>),
    DecAes256(cbc::Decryptor<aes::Aes256>),
    #[cfg(feature = "des")]
    EncDes(cbc::Encryptor<des::Des>),
    #[cfg(feature = "des")]
    DecDes(cbc::Decryptor<des::Des>),
    #[cfg(feature = "des")]
    EncDes3(cbc::Encryptor<des::TdesEde3>),
    #[cfg(feature = "des")]
    DecDes3(cbc::Decryptor<des::TdesEde3>),
}

impl CbcCore {
    fn process_block(&mut self, block: &mut [u8]) {
        match self {
            CbcCore::EncAes128(c) => enc_block(c, block),
            CbcCore::DecAes128(c) => dec_block(c, block),
            CbcCore::EncAes192(c) => enc_block(c, block),
            CbcCore::DecAes192(c) => dec_block(c, block),
            CbcCore::EncAes256(c) => enc_block(c, block),
            CbcCore::DecAes256(c) => dec_block(c, block),
            #[cfg(feature = "des")]
            CbcCore::EncDes(c) => enc_block(c, block),
            #[cfg(feature = "des")]
            CbcCore::DecDes(c) => dec_block(c, block),
            #[cfg(feature = "des")]
            CbcCore::EncDes3(c) => enc_block(c, block),
            #[cfg(feature = "des")]
            CbcCore::DecDes3(c) => dec_block(c, block),
        }
    }
}

fn enc_block<M: BlockEncryptMut>(mode: &mut M, block: &mut [u8]) {
    mode.encrypt_block_mut(GenericArray::from_mut_slice(block));
}

fn dec_block<M: BlockDecryptMut>(mode: &mut M, block: &mut [u8]) {
    mode.decrypt_block_mut(GenericArray::from_mut_slice(block));
}

impl BlockState {
    fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let bs = self.block_size;
        match &mut self.core {
            BlockCore::Ecb(core) => {
                // The primitives process exactly one block per call, so the
                // chunk iteration happens here. Partial blocks are rejected
                // rather than buffered.
                if input.is_empty() {
                    return Ok(Vec::new());
                }
                validate::parameter(
                    input.len() % bs == 0,
                    "ECB update",
                    "input length must be a multiple of the block size",
                )?;
                let mut out = input.to_vec();
                for chunk in out.chunks_exact_mut(bs) {
                    core.process_block(self.op, chunk);
                }
                Ok(out)
            }
            BlockCore::Cbc(core) => {
                self.buf.extend_from_slice(input);
                // Padded decryption withholds the final block until finish,
                // where the padding is stripped.
                let keep = if self.op == Operation::Decrypt && self.padding != Padding::None {
                    bs
                } else {
                    0
                };
                let processable = if self.buf.len() > keep {
                    (self.buf.len() - keep) / bs * bs
                } else {
                    0
                };
                let mut out: Vec<u8> = self.buf.drain(..processable).collect();
                for chunk in out.chunks_exact_mut(bs) {
                    core.process_block(chunk);
                }
                Ok(out)
            }
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let bs = self.block_size;
        match &mut self.core {
            BlockCore::Ecb(_) => Ok(Vec::new()),
            BlockCore::Cbc(core) => match self.op {
                Operation::Encrypt => {
                    if self.padding == Padding::None
                        || (self.padding == Padding::Zeros && self.buf.is_empty())
                    {
                        validate::parameter(
                            self.buf.is_empty(),
                            "CBC finish",
                            "input length must be a multiple of the block size",
                        )?;
                        return Ok(Vec::new());
                    }
                    let pos = self.buf.len();
                    let mut block = vec![0u8; bs];
                    block[..pos].copy_from_slice(&self.buf);
                    self.buf.zeroize();
                    self.buf.clear();
                    apply_padding(self.padding, &mut block, pos);
                    core.process_block(&mut block);
                    Ok(block)
                }
                Operation::Decrypt => {
                    if self.padding == Padding::None {
                        validate::parameter(
                            self.buf.is_empty(),
                            "CBC finish",
                            "input length must be a multiple of the block size",
                        )?;
                        return Ok(Vec::new());
                    }
                    validate::length("CBC finish", self.buf.len(), bs)?;
                    let mut block = core::mem::take(&mut self.buf);
                    core.process_block(&mut block);
                    let unpadded = strip_padding(self.kind, self.padding, &block)?.to_vec();
                    block.zeroize();
                    Ok(unpadded)
                }
            },
        }
    }
}

impl Drop for BlockState {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

fn apply_padding(padding: Padding, block: &mut [u8], pos: usize) {
    match padding {
        Padding::Pkcs7 => Pkcs7::raw_pad(block, pos),
        Padding::Iso7816 => Iso7816::raw_pad(block, pos),
        Padding::AnsiX923 => AnsiX923::raw_pad(block, pos),
        Padding::Zeros => ZeroPadding::raw_pad(block, pos),
        Padding::None => {}
    }
}

fn strip_padding(kind: CipherKind, padding: Padding, block: &[u8]) -> Result<&[u8]> {
    match padding {
        Padding::Pkcs7 => Pkcs7::raw_unpad(block),
        Padding::Iso7816 => Iso7816::raw_unpad(block),
        Padding::AnsiX923 => AnsiX923::raw_unpad(block),
        Padding::Zeros => ZeroPadding::raw_unpad(block),
        Padding::None => Ok(block),
    }
    .map_err(|e| from_unpad_error(kind, e))
}

// --- keystream modes -------------------------------------------------------

pub(crate) struct StreamState {
    core: StreamCore,
}

enum StreamCore {
    Aes128Ctr(ctr::Ctr128BE<aes::Aes128>),
    Aes192Ctr(ctr::Ctr128BE<aes::Aes192>),
    Aes256Ctr(ctr::Ctr128BE<aes::Aes256>),
    ChaCha20(chacha20::ChaCha20),
}

impl StreamState {
    fn update(&mut self, input: &[u8]) -> Vec<u8> {
        let mut out = input.to_vec();
        match &mut self.core {
            StreamCore::Aes128Ctr(c) => c.apply_keystream(&mut out),
            StreamCore::Aes192Ctr(c) => c.apply_keystream(&mut out),
            StreamCore::Aes256Ctr(c) => c.apply_keystream(&mut out),
            StreamCore::ChaCha20(c) => c.apply_keystream(&mut out),
        }
        out
    }
}

// --- AEAD modes ------------------------------------------------------------

/// Buffers plaintext/ciphertext and associated data until `finish`, then
/// runs the one-shot detached AEAD operation. The AEAD constructions do not
/// expose incremental interfaces, so the handle-level streaming surface is
/// bookkeeping over the one-shot call.
#[cfg(feature = "aead")]
pub(crate) struct AeadState {
    kind: CipherKind,
    op: Operation,
    key: SecretVec,
    nonce: Vec<u8>,
    aad: Vec<u8>,
    data: Vec<u8>,
    pub(crate) tag: Option<[u8; AEAD_TAG_SIZE]>,
    expected_tag: Option<[u8; AEAD_TAG_SIZE]>,
}

#[cfg(feature = "aead")]
impl AeadState {
    fn new(
        kind: CipherKind,
        op: Operation,
        key: SecretVec,
        nonce: &[u8],
        aad: &[u8],
        expected_tag: Option<&[u8; AEAD_TAG_SIZE]>,
    ) -> Self {
        Self {
            kind,
            op,
            key,
            nonce: nonce.to_vec(),
            aad: aad.to_vec(),
            data: Vec::new(),
            tag: None,
            expected_tag: expected_tag.copied(),
        }
    }

    pub(crate) fn set_aad(&mut self, aad: &[u8]) -> Result<()> {
        validate::parameter(
            self.data.is_empty(),
            "set_aad",
            "associated data must be supplied before any update",
        )?;
        self.aad.zeroize();
        self.aad = aad.to_vec();
        Ok(())
    }

    pub(crate) fn set_expected_tag(&mut self, tag: [u8; AEAD_TAG_SIZE]) {
        self.expected_tag = Some(tag);
    }

    fn update(&mut self, input: &[u8]) -> Vec<u8> {
        self.data.extend_from_slice(input);
        Vec::new()
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        match self.op {
            Operation::Encrypt => {
                let (tag, ciphertext) = crate::aead::seal(
                    self.kind,
                    self.key.as_ref(),
                    &self.nonce,
                    &self.aad,
                    &self.data,
                )?;
                self.tag = Some(tag);
                self.data.zeroize();
                self.data.clear();
                Ok(ciphertext)
            }
            Operation::Decrypt => {
                let expected = self.expected_tag.ok_or(Error::InvalidParameter {
                    context: "AEAD finish",
                    #[cfg(feature = "std")]
                    message: "decryption requires the expected tag; call expect_tag first".into(),
                })?;
                let plaintext = crate::aead::open(
                    self.kind,
                    self.key.as_ref(),
                    &self.nonce,
                    &self.aad,
                    &expected,
                    &self.data,
                )?;
                self.data.zeroize();
                self.data.clear();
                Ok(plaintext)
            }
        }
    }
}

#[cfg(feature = "aead")]
impl Drop for AeadState {
    fn drop(&mut self) {
        self.data.zeroize();
        self.aad.zeroize();
    }
}
