//! Swap operation specification.

use core::fmt;

use super::Amount;
use crate::error::{AmmError, Result};

/// What constraint drives a swap: a fixed input or a desired output.
///
/// # Invariants
///
/// The contained amount is always non-zero.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000));
/// assert!(spec.is_ok());
/// assert!(SwapSpec::exact_out(Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapSpec {
    /// The caller sells exactly `amount_in`; the output is computed.
    ExactIn {
        /// Fixed input amount.
        amount_in: Amount,
    },
    /// The caller wants at least `amount_out`; the required input is
    /// computed by the reverse quote.
    ExactOut {
        /// Desired output amount.
        amount_out: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is zero.
    pub const fn exact_in(amount: Amount) -> Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output specification.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount` is zero.
    pub const fn exact_out(amount: Amount) -> Result<Self> {
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Returns `true` for [`SwapSpec::ExactIn`].
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    /// Returns the amount regardless of variant.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
