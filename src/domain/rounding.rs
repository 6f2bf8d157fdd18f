//! Explicit rounding direction for integer division.

/// Direction in which an inexact integer quotient is rounded.
///
/// Every division in the engine names its direction so that precision
/// loss always lands on the pool's side of the trade: outputs and minted
/// shares round [`Down`](Self::Down), required inputs round
/// [`Up`](Self::Up).
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::{Amount, Rounding};
/// use reserve_amm::math::CheckedArithmetic;
///
/// let a = Amount::new(10);
/// assert_eq!(a.scale(1, 3, Rounding::Down), Ok(Amount::new(3)));
/// assert_eq!(a.scale(1, 3, Rounding::Up), Ok(Amount::new(4)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: the smallest integer not below the exact quotient.
    Up,
    /// Floor: the largest integer not above the exact quotient.
    Down,
}
