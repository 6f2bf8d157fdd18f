//! Unified error types for the reserve AMM engine.
//!
//! Every fallible operation across the crate returns [`AmmError`].  An
//! operation either yields a fully computed result or fails with exactly
//! one variant; there are no partial results and no silent clamping.

use thiserror::Error;

/// Errors produced by the pricing engine, liquidity accounting, and the
/// pool owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// An empty reserve or share supply was used as a divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A pricing call was given a zero reserve.
    #[error("invalid reserves: both reserves must be non-zero")]
    InvalidReserves,

    /// A reverse quote asked for at least the whole output reserve.
    #[error("requested output meets or exceeds the available reserve")]
    OutputExceedsReserve,

    /// The first deposit is too small to mint shares above the locked
    /// minimum liquidity.
    #[error("initial deposit too small to mint shares above the minimum liquidity")]
    InsufficientInitialLiquidity,

    /// A withdrawal asked to burn more shares than the holder owns.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: u128,
        /// Shares the caller actually holds.
        available: u128,
    },

    /// An intermediate product or sum exceeded the integer width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A quantity is zero or otherwise unusable for the operation.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// Settled output fell below the caller's minimum.
    #[error("slippage exceeded: expected at least {minimum}, got {actual}")]
    SlippageExceeded {
        /// Minimum output the caller accepts.
        minimum: u128,
        /// Output the pool would actually deliver.
        actual: u128,
    },

    /// A pool state violates the reserve/supply invariants.
    #[error("invalid pool state: {0}")]
    InvalidState(&'static str),

    /// Decimal precision is out of range or a decimal string is malformed.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A pool configuration parameter is out of range or inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
