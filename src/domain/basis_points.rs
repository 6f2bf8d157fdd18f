//! Basis-point representation for percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for price impact, share percentages, and slippage tolerances.
/// All `u32` values are representable, but values above 10 000 are not
/// valid percentages; see [`is_valid_percent`](Self::is_valid_percent).
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!(bp.is_valid_percent());
/// assert_eq!(bp.to_string(), "0.30%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Wraps a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a value that must lie in `0..=10_000`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `value` exceeds 100%.
    pub const fn percent(value: u32) -> Result<Self> {
        if value > MAX_BPS {
            return Err(AmmError::InvalidConfiguration(
                "basis points must not exceed 10000",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is within `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 − self`, the remaining fraction of a whole.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the value exceeds 100%.
    pub const fn complement(&self) -> Result<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::Underflow("basis points above 100%")),
        }
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        amount.scale(u128::from(self.0), u128::from(MAX_BPS), rounding)
    }

    /// Computes `numerator × 10_000 / denominator`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the ratio does not fit in `u32`.
    pub fn ratio(numerator: u128, denominator: u128) -> Result<Self> {
        let raw = crate::math::mul_div(
            numerator,
            u128::from(MAX_BPS),
            denominator,
            Rounding::Down,
        )?;
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| AmmError::Overflow("basis point ratio exceeds u32"))
    }
}

impl fmt::Display for BasisPoints {
    /// Renders as a two-decimal percentage, e.g. `30` → `0.30%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}
