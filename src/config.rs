//! Setup parameters for the batch encryption scheme.
//!
//! [`BatchParameters`] is the capacity descriptor produced by `Setup`: it fixes
//! how many distinct batch positions (powers of tau) the system will ever
//! support. Growing the capacity later requires a fresh setup, since the
//! trapdoor powers cannot be extended without the trapdoor.
//!
//! # Example
//!
//! ```rust
//! use bibe::BatchParameters;
//!
//! // Room for up to 16 identities per batch
//! let params = BatchParameters::new(16).expect("valid params");
//! assert_eq!(params.capacity, 16);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Capacity descriptor returned by `Setup`.
///
/// # Constraints
///
/// - `capacity` must be at least 1
///
/// The struct is serializable so deployments can pin their parameters in a
/// configuration file; deserialized values should be passed through
/// [`validate`](BatchParameters::validate) before use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchParameters {
    /// Number of G2 powers of tau, i.e. the maximum batch size
    pub capacity: usize,
}

impl BatchParameters {
    /// Creates and validates batch parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bibe::{BatchParameters, Error};
    ///
    /// assert!(matches!(BatchParameters::new(0), Err(Error::InvalidParameter(_))));
    /// ```
    pub fn new(capacity: usize) -> Result<Self, Error> {
        let params = Self { capacity };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), Error> {
        if self.capacity < 1 {
            return Err(Error::InvalidParameter(
                "batch capacity must be at least one".into(),
            ));
        }
        Ok(())
    }
}
