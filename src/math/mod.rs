//! Arithmetic utilities for AMM calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on domain types, 256-bit intermediates ([`U256`], [`mul_div`]),
//! [`div_round`] for explicit division rounding, and [`isqrt`] for the
//! first-deposit share bootstrap.
//!
//! Nothing in this module uses floating point.

mod checked;
mod isqrt;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use isqrt::{isqrt, sqrt_product};
pub use rounding::div_round;
pub use wide::{checked_add, checked_mul, mul_div, narrow, widen, U256};
