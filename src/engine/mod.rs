//! The pure pricing and liquidity accounting engine.
//!
//! Every function here is a deterministic function of its arguments: it
//! reads a [`PoolState`](crate::domain::PoolState) snapshot (or raw
//! reserves), and mutating operations return the *next* state instead of
//! changing anything in place.  Nothing here logs, retries, or keeps state
//! between calls; that is the owner's job (see [`crate::pools`]).
//!
//! # Layout
//!
//! | Module | Operations |
//! |--------|-----------|
//! | [`pricing`] | `quote`, `get_amount_out`, `get_required_input`, `price_impact_bps`, swap quotes and settlement |
//! | [`liquidity`] | initial and proportional deposit previews, withdrawal previews, deposit/withdraw commits |
//!
//! # Fixed parameters
//!
//! The fee and the minimum liquidity are engine constants, not runtime
//! parameters.  The forward and reverse swap formulas must agree on them
//! exactly for `get_amount_out(get_required_input(y)) >= y` to hold.

pub mod liquidity;
pub mod pricing;

use crate::domain::{BasisPoints, Shares};

/// Fraction of the input that reaches the curve, numerator (99.7%).
pub const FEE_NUMERATOR: u128 = 997;

/// Fraction of the input that reaches the curve, denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// The swap fee as a percentage, for display.
pub const FEE_RATE: BasisPoints = BasisPoints::new(30);

/// Shares permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

pub use liquidity::{
    commit_deposit, commit_withdraw, paired_amount, preview_add_liquidity, preview_deposit,
    preview_initial_deposit, preview_withdraw, DepositOutcome, WithdrawOutcome,
};
pub use pricing::{
    commit_swap, fee_amount, get_amount_out, get_required_input, price_impact_bps, quote,
    quote_exact_in, quote_exact_out, quote_swap, spot_price,
};
