//! Snapshot of pool reserves and share supply.

use core::fmt;

use super::{Amount, Shares};
use crate::error::{AmmError, Result};
use crate::math::{widen, U256};

/// The two reserves and the outstanding share supply of a pool.
///
/// A `PoolState` is a value: the engine never keeps one between calls.
/// Every operation takes the current state and returns the next one, and
/// the owner swaps the whole value in one assignment.
///
/// # Invariants
///
/// Exactly one of the following holds:
///
/// - **Empty**: both reserves and the share supply are zero.
/// - **Funded**: both reserves and the share supply are non-zero.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, PoolState, Shares};
///
/// assert!(PoolState::EMPTY.is_empty());
///
/// let funded = PoolState::new(Amount::new(10), Amount::new(30), Shares::new(17));
/// assert!(funded.is_ok());
///
/// let broken = PoolState::new(Amount::new(10), Amount::ZERO, Shares::new(17));
/// assert!(broken.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolState"))]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

impl PoolState {
    /// A freshly created pool with nothing in it.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        total_shares: Shares::ZERO,
    };

    /// Creates a state after checking the empty/funded invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if some but not all of the three
    /// quantities are zero.
    pub const fn new(reserve_a: Amount, reserve_b: Amount, total_shares: Shares) -> Result<Self> {
        let state = Self {
            reserve_a,
            reserve_b,
            total_shares,
        };
        match state.validate() {
            Ok(()) => Ok(state),
            Err(e) => Err(e),
        }
    }

    /// Checks the empty/funded invariant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidState`] if the state is neither empty
    /// nor fully funded.
    pub const fn validate(&self) -> Result<()> {
        let zeros = self.reserve_a.is_zero() as u8
            + self.reserve_b.is_zero() as u8
            + self.total_shares.is_zero() as u8;
        match zeros {
            0 | 3 => Ok(()),
            _ => Err(AmmError::InvalidState(
                "reserves and share supply must be all zero or all non-zero",
            )),
        }
    }

    /// Returns the reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns `true` if no liquidity has been deposited yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns the constant-product invariant `k = reserve_a × reserve_b`.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        widen(self.reserve_a.get()) * widen(self.reserve_b.get())
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolState(a={}, b={}, shares={})",
            self.reserve_a, self.reserve_b, self.total_shares
        )
    }
}

/// Unchecked wire form, validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolState> for PoolState {
    type Error = AmmError;

    fn try_from(raw: RawPoolState) -> Result<Self> {
        Self::new(raw.reserve_a, raw.reserve_b, raw.total_shares)
    }
}
