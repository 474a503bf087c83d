//! Key and IV generation helpers

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use rand::rngs::OsRng;
use rand::RngCore;

use cipherkit_api::SecretVec;

use crate::types::CipherKind;

/// Generates a random key of the right length for `kind`
///
/// The key lives in a buffer that is zeroized on drop.
pub fn generate_key(kind: CipherKind) -> SecretVec {
    SecretVec::random(kind.key_size(), &mut OsRng)
}

/// Generates a random IV/nonce of the right length for `kind`
///
/// Returns an empty buffer for kinds that take no IV (ECB).
pub fn generate_iv(kind: CipherKind) -> Vec<u8> {
    let mut iv = vec![0u8; kind.iv_size()];
    OsRng.fill_bytes(&mut iv);
    iv
}
