//! Configuration for a constant-product pool.

use crate::domain::{Asset, BasisPoints};
use crate::error::{AmmError, Result};

/// Default slippage tolerance applied by the pool owner: 1%.
const DEFAULT_SLIPPAGE: BasisPoints = BasisPoints::new(100);

/// Immutable parameters of a pool.
///
/// The fee and minimum liquidity are engine constants and are not part of
/// the configuration.  What remains is display metadata for both assets
/// and the slippage tolerance used when a caller does not name one.
///
/// # Validation
///
/// - Both assets have well-formed symbols.
/// - The symbols differ.
/// - `default_slippage` is at most 100%.
///
/// # Examples
///
/// ```
/// use reserve_amm::config::PoolConfig;
///
/// let cfg = PoolConfig::eth_usdt();
/// assert_eq!(cfg.asset_a().symbol(), "ETH");
/// assert_eq!(cfg.asset_b().symbol(), "USDT");
/// assert_eq!(cfg.default_slippage().to_string(), "1.00%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPoolConfig"))]
pub struct PoolConfig {
    asset_a: Asset,
    asset_b: Asset,
    default_slippage: BasisPoints,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant fails.
    pub fn new(asset_a: Asset, asset_b: Asset, default_slippage: BasisPoints) -> Result<Self> {
        let config = Self {
            asset_a,
            asset_b,
            default_slippage,
        };
        config.validate()?;
        Ok(config)
    }

    /// The native/stablecoin pool: ETH (18 decimals) against USDT
    /// (6 decimals) with 1% default slippage.
    #[must_use]
    pub fn eth_usdt() -> Self {
        Self {
            asset_a: Asset::native(),
            asset_b: Asset::usdt(),
            default_slippage: DEFAULT_SLIPPAGE,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on a malformed symbol,
    /// identical symbols, or a tolerance above 100%.
    pub fn validate(&self) -> Result<()> {
        self.asset_a.validate()?;
        self.asset_b.validate()?;
        if self.asset_a.symbol() == self.asset_b.symbol() {
            return Err(AmmError::InvalidConfiguration(
                "pool assets must have distinct symbols",
            ));
        }
        if !self.default_slippage.is_valid_percent() {
            return Err(AmmError::InvalidConfiguration(
                "default slippage exceeds 100%",
            ));
        }
        Ok(())
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> &Asset {
        &self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> &Asset {
        &self.asset_b
    }

    /// Returns the default slippage tolerance.
    #[must_use]
    pub const fn default_slippage(&self) -> BasisPoints {
        self.default_slippage
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::eth_usdt()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPoolConfig {
    asset_a: Asset,
    asset_b: Asset,
    default_slippage: BasisPoints,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoolConfig> for PoolConfig {
    type Error = AmmError;

    fn try_from(raw: RawPoolConfig) -> Result<Self> {
        Self::new(raw.asset_a, raw.asset_b, raw.default_slippage)
    }
}
