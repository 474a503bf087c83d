//! Shared foundation for the cipherkit workspace
//!
//! This crate hosts the unified error system and the secret-byte containers
//! used by every other cipherkit crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod types;

pub use error::{validate, Error, Result};
pub use types::SecretVec;
