//! Secret-byte containers with zeroization guarantees

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// A variable-length byte buffer that is securely zeroed when dropped
///
/// This type provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new instance, taking ownership of the buffer
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create an instance by copying a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Generate a random instance of the given length
    pub fn random<R: rand::RngCore + rand::CryptoRng>(len: usize, rng: &mut R) -> Self {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        if self.data.len() != other.data.len() {
            return false;
        }
        self.data.ct_eq(&other.data).into()
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec({} bytes)[REDACTED]", self.data.len())
    }
}
