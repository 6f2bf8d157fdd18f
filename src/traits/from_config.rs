//! Generic construction trait for building a pool from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed pool is empty and ready for
//! its first deposit.

use crate::error::AmmError;

/// Generic construction trait for building a pool from a configuration.
///
/// There is no blanket implementation; every pool-config pairing is
/// explicit.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// The configuration is taken by reference because it may be reused.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of
    ///   range or inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
