//! Fundamental domain value types used throughout the engine.
//!
//! Amounts, shares, percentages, pool snapshots, and the ephemeral quote
//! values the engine hands back to callers.  All types are newtypes or
//! small structs with validated constructors.

mod amount;
mod asset;
mod basis_points;
mod decimals;
mod holder_id;
mod liquidity_quote;
mod pool_state;
mod rounding;
mod shares;
mod shares_ledger;
mod swap_direction;
mod swap_quote;
mod swap_spec;

pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use holder_id::HolderId;
pub use liquidity_quote::LiquidityQuote;
pub use pool_state::PoolState;
pub use rounding::Rounding;
pub use shares::Shares;
pub use shares_ledger::SharesLedger;
pub use swap_direction::SwapDirection;
pub use swap_quote::SwapQuote;
pub use swap_spec::SwapSpec;
