//! Pool implementations.
//!
//! | Pool | Curve | Owner of |
//! |------|-------|----------|
//! | [`ConstantProductPool`] | `x · y = k`, 0.3% input fee | reserves, share supply, share ledger |

pub mod constant_product;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
