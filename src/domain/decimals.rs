//! Asset decimal places and display conversion.
//!
//! Conversion between smallest-unit integers and decimal strings happens
//! only at the presentation boundary; nothing here touches floating point.

use super::Amount;
use crate::error::{AmmError, Result};

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places an asset uses for display.
///
/// Valid range is `0..=18`.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, Decimals};
///
/// let usdt = Decimals::new(6).expect("6 is valid");
/// assert_eq!(usdt.format(Amount::new(3_000_500_000)), "3000.500000");
/// assert_eq!(usdt.parse("1.5"), Ok(Amount::new(1_500_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Native asset precision (wei).
    pub const NATIVE: Self = Self(MAX_DECIMALS);

    /// Precision of the common USD stablecoins.
    pub const STABLE: Self = Self(6);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the smallest-unit size of one whole unit.
    #[must_use]
    pub const fn one(&self) -> Amount {
        Amount::new(self.factor())
    }

    /// Formats a raw amount with every decimal place, e.g. `1.500000`.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        self.format_with(amount, self.0)
    }

    /// Formats a raw amount truncated to `places` fractional digits.
    ///
    /// `places` is capped at the asset's own precision.  Truncation, not
    /// rounding, so a displayed balance is never more than what is held.
    #[must_use]
    pub fn format_with(&self, amount: Amount, places: u8) -> String {
        let raw = amount.get();
        let whole = raw / self.factor();
        if self.0 == 0 || places == 0 {
            return whole.to_string();
        }
        let places = places.min(self.0);
        let frac = raw % self.factor();
        let digits = format!("{:0width$}", frac, width = usize::from(self.0));
        format!("{whole}.{}", &digits[..usize::from(places)])
    }

    /// Parses a decimal string into a raw amount.
    ///
    /// Accepts `"12"`, `"12.5"` and `".5"`; rejects signs, exponents,
    /// and more fractional digits than the asset supports.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPrecision`] for malformed input or excess
    ///   fractional digits.
    /// - [`AmmError::Overflow`] if the value exceeds `u128`.
    pub fn parse(&self, text: &str) -> Result<Amount> {
        let text = text.trim();
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(AmmError::InvalidPrecision("empty amount"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(AmmError::InvalidPrecision("amount must be a plain decimal"));
        }
        if frac.len() > usize::from(self.0) {
            return Err(AmmError::InvalidPrecision(
                "too many fractional digits for asset",
            ));
        }

        let mut raw: u128 = 0;
        let padding = usize::from(self.0) - frac.len();
        for b in whole
            .bytes()
            .chain(frac.bytes())
            .chain(core::iter::repeat(b'0').take(padding))
        {
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(b - b'0')))
                .ok_or(AmmError::Overflow("parsed amount exceeds u128"))?;
        }
        Ok(Amount::new(raw))
    }

    /// Returns `10^decimals` as `u128`.
    #[must_use]
    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
