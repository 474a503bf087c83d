//! Error handling for the cipherkit workspace

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Standard library error conversions
#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Other {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Specialized result types for different operations
pub type CipherResult<T> = Result<T>;
pub type AeadResult<T> = Result<T>;
pub type StreamResult<T> = Result<T>;
