//! Streaming encryption APIs for large data
//!
//! This module provides `std::io`-based interfaces for encrypting and
//! decrypting large amounts of data in a memory-efficient way, driving a
//! [`Cipher`] handle chunk by chunk. AEAD kinds are not accepted here: a
//! detached tag has no place inside a raw byte stream, so they stay on the
//! AEAD interface.

use std::io::{Read, Write};

use crate::cipher::Cipher;
use crate::error::{validate, Result};
use crate::types::{CipherKind, Operation, Padding};

/// Trait for streaming encryption
pub trait StreamingEncrypt<W: Write> {
    /// Writes plaintext data to the stream
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the stream, encrypting any remaining data
    fn finalize(self) -> Result<W>;
}

/// Trait for streaming decryption
pub trait StreamingDecrypt<R: Read> {
    /// Reads and decrypts data from the stream
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

// Chunk size for the pump helpers; a multiple of every supported block size.
const CHUNK_SIZE: usize = 8192;

/// Streaming encryption over any non-AEAD cipher kind
pub struct CipherEncryptStream<W: Write> {
    writer: W,
    cipher: Cipher,
}

impl<W: Write> CipherEncryptStream<W> {
    /// Creates an encryption stream writing ciphertext into `writer`
    pub fn new(
        writer: W,
        kind: CipherKind,
        padding: Padding,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        let cipher = armed_cipher(kind, padding, key, iv, Operation::Encrypt)?;
        Ok(Self { writer, cipher })
    }
}

impl<W: Write> StreamingEncrypt<W> for CipherEncryptStream<W> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let ciphertext = self.cipher.update(data)?;
        self.writer.write_all(&ciphertext)?;
        Ok(())
    }

    fn finalize(mut self) -> Result<W> {
        let tail = self.cipher.finish()?;
        self.writer.write_all(&tail)?;
        Ok(self.writer)
    }
}

/// Streaming decryption over any non-AEAD cipher kind
pub struct CipherDecryptStream<R: Read> {
    reader: R,
    cipher: Cipher,
    pending: Vec<u8>,
    pos: usize,
    eof: bool,
}

impl<R: Read> CipherDecryptStream<R> {
    /// Creates a decryption stream reading ciphertext from `reader`
    pub fn new(
        reader: R,
        kind: CipherKind,
        padding: Padding,
        key: &[u8],
        iv: &[u8],
    ) -> Result<Self> {
        let cipher = armed_cipher(kind, padding, key, iv, Operation::Decrypt)?;
        Ok(Self {
            reader,
            cipher,
            pending: Vec::new(),
            pos: 0,
            eof: false,
        })
    }
}

impl<R: Read> StreamingDecrypt<R> for CipherDecryptStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while self.pos >= self.pending.len() {
            if self.eof {
                return Ok(0);
            }
            let mut chunk = [0u8; CHUNK_SIZE];
            let n = self.reader.read(&mut chunk)?;
            if n == 0 {
                self.eof = true;
                self.pending = self.cipher.finish()?;
            } else {
                self.pending = self.cipher.update(&chunk[..n])?;
            }
            self.pos = 0;
        }
        let available = &self.pending[self.pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}

fn armed_cipher(
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
    op: Operation,
) -> Result<Cipher> {
    validate::parameter(
        !kind.is_aead(),
        "streaming",
        "AEAD kinds carry a tag; use the AEAD interface",
    )?;
    let mut cipher = Cipher::new(kind);
    cipher.set_padding(padding)?;
    cipher.set_key(key, op)?;
    if kind.iv_size() > 0 {
        cipher.set_iv(iv)?;
    }
    cipher.start()?;
    Ok(cipher)
}

/// Encrypts everything from `reader` into `writer`
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
) -> Result<W> {
    let mut stream = CipherEncryptStream::new(writer, kind, padding, key, iv)?;

    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        stream.write(&buffer[..bytes_read])?;
    }

    stream.finalize()
}

/// Decrypts everything from `reader` into `writer`
pub fn decrypt_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    kind: CipherKind,
    padding: Padding,
    key: &[u8],
    iv: &[u8],
) -> Result<()> {
    let mut stream = CipherDecryptStream::new(reader, kind, padding, key, iv)?;

    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let bytes_read = stream.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read])?;
    }

    Ok(())
}
