//! Constant product pool: the single-writer owner of a [`PoolState`].
//!
//! The pool holds the reserves, the share supply, and the per-holder
//! [`SharesLedger`], and applies the pure functions of [`crate::engine`]
//! to them.  Every mutation follows the same shape:
//!
//! 1. read the current state and the holder's balance
//! 2. compute the next state and every balance delta
//! 3. write them all, or return the error and write nothing
//!
//! # Invariants
//!
//! After every operation:
//!
//! - the state is empty or fully funded (see [`PoolState`])
//! - `Σ ledger balances == total_shares`
//! - `reserve_a × reserve_b` has not decreased, except by a withdrawal

use core::fmt;

use tracing::{debug, info, warn};

use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, BasisPoints, HolderId, LiquidityQuote, PoolState, Rounding, Shares,
    SharesLedger, SwapDirection, SwapQuote, SwapSpec,
};
use crate::engine::{self, DepositOutcome, WithdrawOutcome};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A constant product pool (`x · y = k`) with a share ledger.
///
/// Created empty from a [`PoolConfig`] via [`FromConfig`], or rebuilt from
/// a persisted snapshot with [`restore`](Self::restore).
///
/// # Example
///
/// ```rust
/// use reserve_amm::config::PoolConfig;
/// use reserve_amm::domain::{Amount, HolderId, SwapDirection, SwapSpec};
/// use reserve_amm::pools::ConstantProductPool;
/// use reserve_amm::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let mut pool = ConstantProductPool::from_config(&PoolConfig::eth_usdt()).expect("valid");
/// let alice = HolderId::from_bytes([1u8; 32]);
///
/// // 1 ETH against 3000 USDT.
/// pool.add_liquidity(alice, Amount::new(10u128.pow(18)), Amount::new(3_000_000_000))
///     .expect("first deposit");
///
/// let spec = SwapSpec::exact_in(Amount::new(10u128.pow(16))).expect("non-zero");
/// let quote = pool.swap(SwapDirection::AToB, spec, Amount::ZERO).expect("swap ok");
/// assert!(quote.amount_out().get() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    config: PoolConfig,
    state: PoolState,
    ledger: SharesLedger,
}

impl ConstantProductPool {
    /// Rebuilds a pool from a persisted state and ledger.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if `config` is invalid.
    /// - [`AmmError::InvalidState`] if `state` is inconsistent or the
    ///   ledger does not sum to its share supply.
    pub fn restore(
        config: PoolConfig,
        state: PoolState,
        ledger: SharesLedger,
    ) -> Result<Self, AmmError> {
        config.validate()?;
        state.validate()?;
        if ledger.total()? != state.total_shares() {
            return Err(AmmError::InvalidState(
                "ledger balances do not sum to total shares",
            ));
        }
        Ok(Self {
            config,
            state,
            ledger,
        })
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the share ledger.
    #[must_use]
    pub const fn ledger(&self) -> &SharesLedger {
        &self.ledger
    }

    /// Returns the current reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.state.reserve_a()
    }

    /// Returns the current reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.state.reserve_b()
    }

    /// Returns the asset sold in `direction`.
    #[must_use]
    pub const fn asset_in(&self, direction: SwapDirection) -> &Asset {
        match direction {
            SwapDirection::AToB => self.config.asset_a(),
            SwapDirection::BToA => self.config.asset_b(),
        }
    }

    /// Returns the asset bought in `direction`.
    #[must_use]
    pub const fn asset_out(&self, direction: SwapDirection) -> &Asset {
        self.asset_in(direction.reverse())
    }

    /// Counterpart deposit for `amount` of the input side of `direction`
    /// at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] on an empty pool.
    pub fn paired_amount(
        &self,
        direction: SwapDirection,
        amount: Amount,
    ) -> Result<Amount, AmmError> {
        engine::paired_amount(&self.state, direction, amount)
    }

    /// Lowest output to accept for a swap under the configured default
    /// slippage tolerance.
    ///
    /// # Errors
    ///
    /// Propagates [`SwapPool::quote_swap`] errors.
    pub fn minimum_received(
        &self,
        direction: SwapDirection,
        spec: SwapSpec,
    ) -> Result<Amount, AmmError> {
        self.quote_swap(direction, spec)?
            .minimum_received(self.config.default_slippage())
    }

    /// Reserves redeemable by `holder`'s entire balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on arithmetic overflow.
    pub fn position_value(&self, holder: &HolderId) -> Result<(Amount, Amount), AmmError> {
        let balance = self.ledger.balance_of(holder);
        if balance.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }
        engine::preview_withdraw(
            balance,
            self.state.reserve_a(),
            self.state.reserve_b(),
            self.state.total_shares(),
            balance,
        )
    }

    /// Shares to burn to redeem `percent` of `holder`'s balance, rounded
    /// down so the result never exceeds the balance.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `percent` exceeds 100%.
    pub fn shares_for_percent(
        &self,
        holder: &HolderId,
        percent: BasisPoints,
    ) -> Result<Shares, AmmError> {
        let percent = BasisPoints::percent(percent.get())?;
        self.ledger.spendable(holder).scale(
            u128::from(percent.get()),
            u128::from(BasisPoints::MAX_PERCENT.get()),
            Rounding::Down,
        )
    }

    /// Next state, depositor balance, and locked balance for a deposit.
    fn stage_deposit(
        &self,
        holder: &HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<(DepositOutcome, Shares, Shares), AmmError> {
        if holder.is_locked() {
            return Err(AmmError::InvalidQuantity(
                "locked holder cannot receive deposits",
            ));
        }
        let outcome = engine::commit_deposit(&self.state, amount_a, amount_b)?;
        let balance = self.ledger.credited(holder, outcome.shares_issued)?;
        let locked = self.ledger.credited(&HolderId::LOCKED, outcome.locked)?;
        Ok((outcome, balance, locked))
    }

    /// Next state and holder balance for a withdrawal.
    fn stage_withdraw(
        &self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<(WithdrawOutcome, Shares), AmmError> {
        let outcome = engine::commit_withdraw(&self.state, shares, self.ledger.spendable(holder))?;
        let balance = self.ledger.debited(holder, shares)?;
        Ok((outcome, balance))
    }

    fn pair(&self) -> String {
        format!(
            "{}/{}",
            self.config.asset_a().symbol(),
            self.config.asset_b().symbol()
        )
    }

    fn rejected(&self, operation: &'static str, error: AmmError) -> AmmError {
        warn!(pool = %self.pair(), operation, %error, "commit rejected");
        error
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            state: PoolState::EMPTY,
            ledger: SharesLedger::new(),
        })
    }
}

impl SwapPool for ConstantProductPool {
    fn quote_swap(&self, direction: SwapDirection, spec: SwapSpec) -> Result<SwapQuote, AmmError> {
        let quote = engine::quote_swap(&self.state, direction, spec)?;
        debug!(pool = %self.pair(), %quote, "swap previewed");
        Ok(quote)
    }

    /// Settles a swap through [`engine::commit_swap`].
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].  A rejected swap leaves the pool unchanged.
    fn swap(
        &mut self,
        direction: SwapDirection,
        spec: SwapSpec,
        min_amount_out: Amount,
    ) -> Result<SwapQuote, AmmError> {
        let (next, quote) = engine::commit_swap(&self.state, direction, spec, min_amount_out)
            .map_err(|e| self.rejected("swap", e))?;
        self.state = next;
        debug!(
            pool = %self.pair(),
            %quote,
            reserve_a = %next.reserve_a(),
            reserve_b = %next.reserve_b(),
            "swap settled"
        );
        Ok(quote)
    }

    fn spot_price(&self, direction: SwapDirection) -> Result<Amount, AmmError> {
        let unit = self.asset_in(direction).decimals().one();
        engine::spot_price(&self.state, direction, unit)
    }

    fn state(&self) -> PoolState {
        self.state
    }
}

impl LiquidityPool for ConstantProductPool {
    fn preview_add_liquidity(
        &self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityQuote, AmmError> {
        engine::preview_add_liquidity(&self.state, amount_a, amount_b)
    }

    /// Deposits both assets.  The first deposit also credits
    /// [`engine::MINIMUM_LIQUIDITY`] to [`HolderId::LOCKED`].
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::add_liquidity`].  A rejected deposit leaves
    /// the pool unchanged.
    fn add_liquidity(
        &mut self,
        holder: HolderId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Shares, AmmError> {
        let (outcome, balance, locked) = self
            .stage_deposit(&holder, amount_a, amount_b)
            .map_err(|e| self.rejected("add_liquidity", e))?;

        self.state = outcome.state;
        self.ledger.set_balance(holder, balance);
        self.ledger.set_balance(HolderId::LOCKED, locked);
        info!(
            pool = %self.pair(),
            %holder,
            %amount_a,
            %amount_b,
            shares = %outcome.shares_issued,
            locked = %outcome.locked,
            total_shares = %self.state.total_shares(),
            "liquidity added"
        );
        Ok(outcome.shares_issued)
    }

    fn preview_remove_liquidity(
        &self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError> {
        engine::preview_withdraw(
            shares,
            self.state.reserve_a(),
            self.state.reserve_b(),
            self.state.total_shares(),
            self.ledger.spendable(holder),
        )
    }

    /// Burns shares and pays out both assets.
    ///
    /// # Errors
    ///
    /// See [`LiquidityPool::remove_liquidity`].  A rejected withdrawal
    /// leaves the pool unchanged.
    fn remove_liquidity(
        &mut self,
        holder: HolderId,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError> {
        let (outcome, balance) = self
            .stage_withdraw(&holder, shares)
            .map_err(|e| self.rejected("remove_liquidity", e))?;

        self.state = outcome.state;
        self.ledger.set_balance(holder, balance);
        info!(
            pool = %self.pair(),
            %holder,
            %shares,
            amount_a = %outcome.amount_a,
            amount_b = %outcome.amount_b,
            total_shares = %self.state.total_shares(),
            "liquidity removed"
        );
        Ok((outcome.amount_a, outcome.amount_b))
    }

    fn shares_of(&self, holder: &HolderId) -> Shares {
        self.ledger.balance_of(holder)
    }

    fn total_shares(&self) -> Shares {
        self.state.total_shares()
    }
}

impl fmt::Display for ConstantProductPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}",
            self.config.asset_a().symbol(),
            self.config.asset_b().symbol(),
            self.state
        )
    }
}
