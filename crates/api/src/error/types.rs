//! Error type definitions for cipher operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cipher operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested cipher is not known to this build
    UnsupportedCipher {
        name: &'static str,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Padding could not be applied or removed
    InvalidPadding {
        context: &'static str,
    },

    /// Authentication failed error
    AuthenticationFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Not implemented error
    NotImplemented {
        feature: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::UnsupportedCipher { name } => Self::UnsupportedCipher { name },
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedCipher { name } => {
                write!(f, "unsupported cipher: {}", name)
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "invalid parameter: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "invalid parameter: {}", context)
            }
            Self::InvalidPadding { context } => {
                write!(f, "invalid padding: {}", context)
            }
            #[cfg(feature = "std")]
            Self::AuthenticationFailed { context, message } => {
                if message.is_empty() {
                    write!(f, "authentication failed: {}", context)
                } else {
                    write!(f, "authentication failed: {}: {}", context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            Self::AuthenticationFailed { context } => {
                write!(f, "authentication failed: {}", context)
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented in this build", feature)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "error: {}", context)
            }
        }
    }
}
