//! Which reserve a swap draws from.

use core::fmt;

use super::{Amount, PoolState};

/// Direction of a swap through the pool.
///
/// Asset A is the native asset, asset B the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Returns `(reserve_in, reserve_out)` for this direction.
    #[must_use]
    pub const fn reserves(&self, state: &PoolState) -> (Amount, Amount) {
        match self {
            Self::AToB => (state.reserve_a(), state.reserve_b()),
            Self::BToA => (state.reserve_b(), state.reserve_a()),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Shares;

    #[test]
    fn reverse_is_involution() {
        assert_eq!(SwapDirection::AToB.reverse(), SwapDirection::BToA);
        assert_eq!(SwapDirection::AToB.reverse().reverse(), SwapDirection::AToB);
    }

    #[test]
    fn reserves_follow_direction() {
        let Ok(state) = PoolState::new(Amount::new(10), Amount::new(30), Shares::new(17)) else {
            panic!("valid state");
        };
        assert_eq!(
            SwapDirection::AToB.reserves(&state),
            (Amount::new(10), Amount::new(30))
        );
        assert_eq!(
            SwapDirection::BToA.reserves(&state),
            (Amount::new(30), Amount::new(10))
        );
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::AToB.to_string(), "A->B");
        assert_eq!(SwapDirection::BToA.to_string(), "B->A");
    }
}
