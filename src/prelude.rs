//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use reserve_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, Asset, BasisPoints, Decimals, HolderId, LiquidityQuote, PoolState, Rounding, Shares,
    SwapDirection, SwapQuote, SwapSpec,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::engine::{FEE_DENOMINATOR, FEE_NUMERATOR, MINIMUM_LIQUIDITY};

pub use crate::error::{AmmError, Result};

pub use crate::pools::ConstantProductPool;
