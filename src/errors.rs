//! Error types for the crate.
//!
//! This module defines low-level backend errors returned by the concrete
//! pairing backend (blstrs) as well as the high-level `Error` type used by
//! the polynomial, Lagrange and batch-encryption APIs.
//!
//! The errors are implemented with `thiserror` so they are easy to convert
//! and debug in higher-level code.
//!
//! # Examples
//!
//! ```rust
//! use bibe::{BatchParameters, Error};
//!
//! let err = BatchParameters::new(0).unwrap_err();
//! assert!(matches!(err, Error::InvalidParameter(_)));
//! ```

use thiserror::Error;

/// Errors bubbled up from the backend implementation.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("serialization failure: {0}")]
    Serialization(&'static str),
    #[error("math error: {0}")]
    Math(&'static str),
    #[error("randomness source failure: {0}")]
    Randomness(String),
}

/// High-level errors returned by the public API.
///
/// The first three variants are the failure classes callers are expected to
/// branch on:
///
/// - [`Error::InvalidParameter`]: do not retry without fixing the input.
/// - [`Error::Randomness`]: nothing was constructed; the call may be retried.
/// - [`Error::DegenerateInput`]: repeated identities or indices.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("randomness source failure: {0}")]
    Randomness(String),
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("backend error: {0}")]
    Backend(BackendError),
}

impl Error {
    /// Returns true when repeating the call with a working RNG may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Randomness(_))
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Randomness(reason) => Error::Randomness(reason),
            other => Error::Backend(other),
        }
    }
}
