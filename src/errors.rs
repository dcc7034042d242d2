use std::fmt;

/// Errors reported by fee math and RPC configuration handling.
///
/// Fallible APIs in this crate return `anyhow::Result`; callers that need
/// to branch on the kind can recover it with `err.downcast_ref::<Error>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied amount or parameter was rejected.
    InvalidArgument(String),
    /// The RPC endpoint configuration is missing or malformed.
    Configuration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
