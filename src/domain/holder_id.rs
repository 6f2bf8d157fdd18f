//! Share holder identity.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Opaque identity of a share holder (an account address on the ledger).
///
/// Wraps 32 raw bytes so that both 20-byte EVM addresses (left-padded)
/// and 32-byte account keys fit.  The all-zero identity is reserved for
/// [`HolderId::LOCKED`], which receives the minimum liquidity minted on
/// the first deposit and can never withdraw.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::HolderId;
///
/// let alice = HolderId::from_bytes([1u8; 32]);
/// assert!(!alice.is_locked());
/// assert!(HolderId::LOCKED.is_locked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct HolderId([u8; 32]);

impl HolderId {
    /// Burn identity that owns the permanently locked minimum liquidity.
    pub const LOCKED: Self = Self([0u8; 32]);

    /// Creates a `HolderId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a `HolderId` from a 20-byte EVM address, left-padded.
    #[must_use]
    pub fn from_evm(address: [u8; 20]) -> Self {
        let mut bytes = [0u8; 32];
        bytes[12..].copy_from_slice(&address);
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` for the reserved burn identity.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self == Self::LOCKED
    }

    /// Full 32-byte lower-case hex with a `0x` prefix.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for HolderId {
    type Err = AmmError;

    /// Parses `0x`-prefixed hex of a 20-byte address or a 32-byte key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const MALFORMED: AmmError = AmmError::InvalidConfiguration("malformed holder id");
        let digits = s.strip_prefix("0x").ok_or(MALFORMED)?;
        let mut bytes = [0u8; 32];
        let target = match digits.len() {
            40 => &mut bytes[12..],
            64 => &mut bytes[..],
            _ => return Err(MALFORMED),
        };
        hex::decode_to_slice(digits, target).map_err(|_| MALFORMED)?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for HolderId {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HolderId> for String {
    fn from(id: HolderId) -> Self {
        id.to_hex()
    }
}

impl fmt::Display for HolderId {
    /// Lower-case hex with a `0x` prefix, shortened to the last 20 bytes
    /// when the leading 12 are zero (EVM form).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = if self.0[..12].iter().all(|b| *b == 0) {
            &self.0[12..]
        } else {
            &self.0[..]
        };
        write!(f, "0x{}", hex::encode(bytes))
    }
}
