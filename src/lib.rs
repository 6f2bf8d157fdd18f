//! # Reserve AMM
//!
//! Constant-product pricing and liquidity accounting engine for a
//! two-asset pool (`x · y = k`, 0.3% input fee).
//!
//! The crate has two layers:
//!
//! - a **pure engine** ([`engine`]) of deterministic integer functions:
//!   swap quotes, reverse quotes, price impact, share issuance, and
//!   proportional redemption.  Every operation takes a
//!   [`PoolState`](domain::PoolState) snapshot and returns a result or the
//!   next state; nothing is mutated in place and nothing is logged.
//! - a **pool owner** ([`pools::ConstantProductPool`]) that holds the
//!   reserves and the share ledger, serialises mutations through
//!   `&mut self`, and applies each commit atomically.
//!
//! All amounts are `u128` smallest units.  Intermediate products are
//! computed in 256 bits and every overflow is an error, never a wrap.
//! Floating point appears nowhere in the numeric contract; decimal
//! formatting is confined to [`Decimals`](domain::Decimals).
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for config, state, and quotes |
//!
//! # Quick Start
//!
//! ```rust
//! use reserve_amm::prelude::*;
//!
//! let cfg = PoolConfig::eth_usdt();
//! let mut pool = ConstantProductPool::from_config(&cfg).expect("valid config");
//! let alice = HolderId::from_evm([0xA1; 20]);
//!
//! // 1. Seed the pool: 10 ETH against 30 000 USDT.
//! let eth = cfg.asset_a().parse("10").expect("decimal");
//! let usdt = cfg.asset_b().parse("30000").expect("decimal");
//! let shares = pool.add_liquidity(alice, eth, usdt).expect("first deposit");
//! assert_eq!(pool.shares_of(&alice), shares);
//!
//! // 2. Preview a swap of 1 ETH, then settle it with 1% slippage protection.
//! let spec = SwapSpec::exact_in(cfg.asset_a().parse("1").expect("decimal")).expect("non-zero");
//! let min_out = pool.minimum_received(SwapDirection::AToB, spec).expect("priced");
//! let quote = pool.swap(SwapDirection::AToB, spec, min_out).expect("settled");
//! assert!(quote.amount_out() >= min_out);
//! println!("{}", cfg.asset_b().display(quote.amount_out()));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PoolState`](domain::PoolState), quotes, the share ledger |
//! | [`math`]   | Checked arithmetic, 256-bit `mul_div`, integer square root |
//! | [`engine`] | Pure pricing and liquidity functions, fee and minimum-liquidity constants |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
