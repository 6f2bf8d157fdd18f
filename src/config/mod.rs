//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a pool owner is built from
//! (see [`FromConfig`](crate::traits::FromConfig)): the two assets' display
//! metadata and the slippage tolerance applied when a caller does not
//! supply one.

mod pool_config;

pub use pool_config::PoolConfig;
