//! Algorithm parameter constants for the cipherkit workspace
//!
//! Sizes are in bytes unless a name says otherwise.

#![no_std]
#![forbid(unsafe_code)]

pub mod symmetric;
