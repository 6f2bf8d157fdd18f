//! Per-holder share balances.

use std::collections::BTreeMap;

use super::{HolderId, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Share balances keyed by holder: the sub-ledger of a pool's supply.
///
/// # Invariant
///
/// The owner keeps `Σ balances == PoolState::total_shares()`.  The ledger
/// itself only guarantees that no balance is ever stored as zero, so
/// [`len`](Self::len) counts holders with a position.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{HolderId, Shares, SharesLedger};
///
/// let alice = HolderId::from_bytes([1u8; 32]);
/// let mut ledger = SharesLedger::new();
/// ledger.set_balance(alice, Shares::new(500));
/// assert_eq!(ledger.balance_of(&alice), Shares::new(500));
/// assert_eq!(ledger.total(), Ok(Shares::new(500)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharesLedger {
    balances: BTreeMap<HolderId, Shares>,
}

impl SharesLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the balance of `holder` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, holder: &HolderId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns the balance `holder` may burn.
    ///
    /// Always zero for [`HolderId::LOCKED`].
    #[must_use]
    pub fn spendable(&self, holder: &HolderId) -> Shares {
        if holder.is_locked() {
            Shares::ZERO
        } else {
            self.balance_of(holder)
        }
    }

    /// Computes `holder`'s balance after crediting `amount`, without
    /// writing it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn credited(&self, holder: &HolderId, amount: Shares) -> Result<Shares> {
        self.balance_of(holder).safe_add(&amount)
    }

    /// Computes `holder`'s balance after debiting `amount`, without
    /// writing it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `amount` exceeds the
    /// spendable balance.
    pub fn debited(&self, holder: &HolderId, amount: Shares) -> Result<Shares> {
        let available = self.spendable(holder);
        available
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientShares {
                requested: amount.get(),
                available: available.get(),
            })
    }

    /// Overwrites `holder`'s balance; a zero balance removes the entry.
    pub fn set_balance(&mut self, holder: HolderId, balance: Shares) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }

    /// Sums every balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128`.
    pub fn total(&self) -> Result<Shares> {
        self.balances
            .values()
            .try_fold(Shares::ZERO, |acc, b| acc.safe_add(b))
    }

    /// Number of holders with a non-zero balance.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns `true` if no holder has a balance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Iterates holders and balances in holder order.
    pub fn iter(&self) -> impl Iterator<Item = (&HolderId, &Shares)> {
        self.balances.iter()
    }
}
