//! Shared helpers for the cipherkit integration suites

/// Decodes a hex test vector, panicking on malformed input
pub fn h(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in test vector")
}

/// Splits `data` into chunks of `size` bytes (the last may be shorter)
pub fn chunked(data: &[u8], size: usize) -> impl Iterator<Item = &[u8]> {
    data.chunks(size.max(1))
}
