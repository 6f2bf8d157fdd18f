//! Display metadata for one side of the pool.

use core::fmt;

use super::{Amount, Decimals};
use crate::error::{AmmError, Result};

/// Maximum symbol length accepted in configuration.
const MAX_SYMBOL_LEN: usize = 16;

/// Ticker and precision of a pooled asset.
///
/// The engine itself only sees raw [`Amount`]s; an `Asset` lets the pool
/// owner render and parse those amounts for people.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, Asset, Decimals};
///
/// let usdt = Asset::new("USDT", Decimals::new(6).expect("valid")).expect("valid symbol");
/// assert_eq!(usdt.display(Amount::new(2_500_000)), "2.500000 USDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
    symbol: String,
    decimals: Decimals,
}

impl Asset {
    /// Creates a new asset descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the symbol is empty,
    /// longer than 16 bytes, or contains whitespace.
    pub fn new(symbol: impl Into<String>, decimals: Decimals) -> Result<Self> {
        let asset = Self {
            symbol: symbol.into(),
            decimals,
        };
        asset.validate()?;
        Ok(asset)
    }

    /// The native asset: `ETH` with 18 decimals.
    #[must_use]
    pub fn native() -> Self {
        Self {
            symbol: "ETH".to_owned(),
            decimals: Decimals::NATIVE,
        }
    }

    /// The pool's default quote asset: `USDT` with 6 decimals.
    #[must_use]
    pub fn usdt() -> Self {
        Self {
            symbol: "USDT".to_owned(),
            decimals: Decimals::STABLE,
        }
    }

    /// Checks the symbol constraints.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on a malformed symbol.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.is_empty() {
            return Err(AmmError::InvalidConfiguration("asset symbol is empty"));
        }
        if self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(AmmError::InvalidConfiguration("asset symbol too long"));
        }
        if self.symbol.chars().any(char::is_whitespace) {
            return Err(AmmError::InvalidConfiguration(
                "asset symbol contains whitespace",
            ));
        }
        Ok(())
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Renders `amount` with full precision followed by the symbol.
    #[must_use]
    pub fn display(&self, amount: Amount) -> String {
        format!("{} {}", self.decimals.format(amount), self.symbol)
    }

    /// Parses a decimal string in this asset's precision.
    ///
    /// # Errors
    ///
    /// Propagates [`Decimals::parse`] errors.
    pub fn parse(&self, text: &str) -> Result<Amount> {
        self.decimals.parse(text)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, self.decimals.get())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn usdt() -> Asset {
        let Ok(d) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        let Ok(a) = Asset::new("USDT", d) else {
            panic!("valid asset");
        };
        a
    }

    #[test]
    fn usdt_preset_matches_validated() {
        assert_eq!(Asset::usdt(), usdt());
    }

    #[test]
    fn accessors() {
        let a = usdt();
        assert_eq!(a.symbol(), "USDT");
        assert_eq!(a.decimals().get(), 6);
        assert_eq!(a.to_string(), "USDT(6)");
    }

    #[test]
    fn native_is_eth() {
        let eth = Asset::native();
        assert_eq!(eth.symbol(), "ETH");
        assert_eq!(eth.decimals(), Decimals::NATIVE);
        assert!(eth.validate().is_ok());
    }

    #[test]
    fn rejects_bad_symbols() {
        for bad in ["", "WAY_TOO_LONG_SYMBOL", "US DT"] {
            let Err(AmmError::InvalidConfiguration(_)) = Asset::new(bad, Decimals::ZERO) else {
                panic!("accepted {bad:?}");
            };
        }
    }

    #[test]
    fn display_and_parse() {
        let a = usdt();
        assert_eq!(a.display(Amount::new(1)), "0.000001 USDT");
        assert_eq!(a.parse("10000"), Ok(Amount::new(10_000_000_000)));
    }
}
