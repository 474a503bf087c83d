//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// IV size for AES in CBC and CTR modes, in bytes
pub const AES_IV_SIZE: usize = 16;

/// Nonce size for AES-GCM in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// Nonce size for AES-CCM in bytes
pub const CCM_NONCE_SIZE: usize = 12;

/// Authentication tag size for the AEAD modes in bytes
pub const AEAD_TAG_SIZE: usize = 16;

/// Smallest truncated authentication tag this library will export, in bytes
pub const AEAD_TAG_MIN_SIZE: usize = 4;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// Triple-DES (EDE3) key size in bytes (parity bits included)
pub const DES3_KEY_SIZE: usize = 24;

/// DES and Triple-DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;
