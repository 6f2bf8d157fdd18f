//! Constant-product swap pricing.
//!
//! The pool holds `x · y = k`.  A 0.3% fee is taken from the input before
//! it reaches the curve, so with `x` the input reserve and `y` the output
//! reserve:
//!
//! ```text
//! out = ⌊ in · 997 · y / (x · 1000 + in · 997) ⌋          (forward)
//! in  = ⌈ x · out · 1000 / ((y − out) · 997) ⌉            (reverse)
//! ```
//!
//! The forward direction rounds down and the reverse rounds up, so the
//! pool never loses value to rounding and
//! `get_amount_out(get_required_input(y, Rout, Rin), Rin, Rout) >= y`.
//!
//! Because the denominator grows with `in`, `out < y` for every input: a
//! single swap can never drain a reserve.

use super::{FEE_DENOMINATOR, FEE_NUMERATOR};
use crate::domain::{Amount, BasisPoints, PoolState, Rounding, SwapDirection, SwapQuote, SwapSpec};
use crate::error::{AmmError, Result};
use crate::math::{checked_add, checked_mul, div_round, narrow, widen, CheckedArithmetic};

/// Fee-free proportional cross rate: `⌊amount_a × reserve_b / reserve_a⌋`.
///
/// For preview ratios only; swaps never settle at this rate.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve_a` is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::Amount;
/// use reserve_amm::engine::quote;
///
/// let b = quote(Amount::new(1), Amount::new(10), Amount::new(30_000));
/// assert_eq!(b, Ok(Amount::new(3_000)));
/// ```
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if reserve_a.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    amount_a.scale(reserve_b.get(), reserve_a.get(), Rounding::Down)
}

/// Output of selling `amount_in` into the pool, after the 0.3% fee.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if `amount_in × 997 × reserve_out` exceeds
///   256 bits.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::Amount;
/// use reserve_amm::engine::get_amount_out;
///
/// // ⌊1 · 997 · 30000 / (10 · 1000 + 1 · 997)⌋ = 2719
/// let out = get_amount_out(Amount::new(1), Amount::new(10), Amount::new(30_000));
/// assert_eq!(out, Ok(Amount::new(2_719)));
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    let in_with_fee = widen(amount_in.get()) * widen(FEE_NUMERATOR);
    let numerator = checked_mul(
        in_with_fee,
        widen(reserve_out.get()),
        "swap output numerator overflow",
    )?;
    let denominator = checked_add(
        widen(reserve_in.get()) * widen(FEE_DENOMINATOR),
        in_with_fee,
        "swap output denominator overflow",
    )?;
    let out = div_round(numerator, denominator, Rounding::Down).ok_or(AmmError::DivisionByZero)?;
    narrow(out, "swap output exceeds u128").map(Amount::new)
}

/// Smallest input that yields at least `amount_out` after the fee.
///
/// Exact inverse of [`get_amount_out`] under integer rounding.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::OutputExceedsReserve`] if `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
///
/// # Examples
///
/// ```
/// use reserve_amm::domain::Amount;
/// use reserve_amm::engine::{get_amount_out, get_required_input};
///
/// let (r_in, r_out) = (Amount::new(10_000), Amount::new(30_000_000));
/// let need = get_required_input(Amount::new(2_700_000), r_out, r_in).expect("satisfiable");
/// let got = get_amount_out(need, r_in, r_out).expect("valid reserves");
/// assert!(got >= Amount::new(2_700_000));
/// ```
pub fn get_required_input(
    amount_out: Amount,
    reserve_out: Amount,
    reserve_in: Amount,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::OutputExceedsReserve);
    }
    let numerator = checked_mul(
        widen(reserve_in.get()) * widen(amount_out.get()),
        widen(FEE_DENOMINATOR),
        "required input numerator overflow",
    )?;
    let remaining = reserve_out.safe_sub(&amount_out)?;
    let denominator = widen(remaining.get()) * widen(FEE_NUMERATOR);
    let amount_in =
        div_round(numerator, denominator, Rounding::Up).ok_or(AmmError::DivisionByZero)?;
    narrow(amount_in, "required input exceeds u128").map(Amount::new)
}

/// Portion of `amount_in` kept by the pool as fee:
/// `amount_in − ⌊amount_in × 997 / 1000⌋`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] on arithmetic overflow (unreachable for
/// `u128` inputs).
pub fn fee_amount(amount_in: Amount) -> Result<Amount> {
    let net = amount_in.scale(FEE_NUMERATOR, FEE_DENOMINATOR, Rounding::Down)?;
    amount_in.safe_sub(&net)
}

/// Deviation of the realized average price `amount_out / amount_in` from
/// the pre-trade marginal price `reserve_out / reserve_in`, in basis
/// points.
///
/// Informational only: used for display and risk signalling, never for
/// settlement.  Rounded up so a trade is never shown as cheaper than it
/// is.  A zero `amount_in` has no impact.
///
/// # Errors
///
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the intermediate products overflow or the
///   result does not fit in `u32`.
pub fn price_impact_bps(
    amount_in: Amount,
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<BasisPoints> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    if amount_in.is_zero() {
        return Ok(BasisPoints::ZERO);
    }
    // Compare out/in with r_out/r_in by cross-multiplying.
    let at_marginal = widen(amount_in.get()) * widen(reserve_out.get());
    let realized = widen(amount_out.get()) * widen(reserve_in.get());
    let gap = if at_marginal >= realized {
        at_marginal - realized
    } else {
        realized - at_marginal
    };
    let scaled = checked_mul(gap, widen(10_000), "price impact overflow")?;
    let bps = div_round(scaled, at_marginal, Rounding::Up).ok_or(AmmError::DivisionByZero)?;
    let bps = narrow(bps, "price impact overflow")?;
    u32::try_from(bps)
        .map(BasisPoints::new)
        .map_err(|_| AmmError::Overflow("price impact exceeds u32"))
}

/// Price of `unit` of the input asset in output smallest units, at the
/// fee-free marginal rate.
///
/// Pass the input asset's one-whole-unit amount
/// ([`Decimals::one`](crate::domain::Decimals::one)) for a per-unit
/// display price.
///
/// # Errors
///
/// Propagates [`quote`] errors; an empty pool yields
/// [`AmmError::DivisionByZero`].
pub fn spot_price(state: &PoolState, direction: SwapDirection, unit: Amount) -> Result<Amount> {
    let (reserve_in, reserve_out) = direction.reserves(state);
    quote(unit, reserve_in, reserve_out)
}

/// Prices an exact-input swap.
///
/// # Errors
///
/// Propagates [`get_amount_out`] and [`price_impact_bps`] errors.
pub fn quote_exact_in(
    state: &PoolState,
    direction: SwapDirection,
    amount_in: Amount,
) -> Result<SwapQuote> {
    let (reserve_in, reserve_out) = direction.reserves(state);
    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out)?;
    build_quote(direction, amount_in, amount_out, reserve_in, reserve_out)
}

/// Prices an exact-output swap.
///
/// The returned quote charges [`get_required_input`] and reports the
/// output the forward formula actually delivers for that input, which is
/// never less than `amount_out`.
///
/// # Errors
///
/// Propagates [`get_required_input`], [`get_amount_out`], and
/// [`price_impact_bps`] errors.
pub fn quote_exact_out(
    state: &PoolState,
    direction: SwapDirection,
    amount_out: Amount,
) -> Result<SwapQuote> {
    let (reserve_in, reserve_out) = direction.reserves(state);
    let amount_in = get_required_input(amount_out, reserve_out, reserve_in)?;
    let delivered = get_amount_out(amount_in, reserve_in, reserve_out)?;
    build_quote(direction, amount_in, delivered, reserve_in, reserve_out)
}

/// Prices a swap described by a [`SwapSpec`].
///
/// # Errors
///
/// See [`quote_exact_in`] and [`quote_exact_out`].
pub fn quote_swap(state: &PoolState, direction: SwapDirection, spec: SwapSpec) -> Result<SwapQuote> {
    match spec {
        SwapSpec::ExactIn { amount_in } => quote_exact_in(state, direction, amount_in),
        SwapSpec::ExactOut { amount_out } => quote_exact_out(state, direction, amount_out),
    }
}

/// Settles a swap against `state` and returns the next state with the
/// quote it settled at.
///
/// The input reserve grows by the full input (fee included) and the
/// output reserve shrinks by the output; the share supply is unchanged.
///
/// # Errors
///
/// - Any pricing error from [`quote_swap`].
/// - [`AmmError::InvalidQuantity`] if the output rounds to zero.
/// - [`AmmError::SlippageExceeded`] if the output is below
///   `min_amount_out`.
/// - [`AmmError::Overflow`] if the input reserve would exceed `u128`.
pub fn commit_swap(
    state: &PoolState,
    direction: SwapDirection,
    spec: SwapSpec,
    min_amount_out: Amount,
) -> Result<(PoolState, SwapQuote)> {
    let quote = quote_swap(state, direction, spec)?;
    if quote.amount_out().is_zero() {
        return Err(AmmError::InvalidQuantity("swap output rounds to zero"));
    }
    if quote.amount_out() < min_amount_out {
        return Err(AmmError::SlippageExceeded {
            minimum: min_amount_out.get(),
            actual: quote.amount_out().get(),
        });
    }

    let (reserve_in, reserve_out) = direction.reserves(state);
    let new_in = reserve_in.safe_add(&quote.amount_in())?;
    let new_out = reserve_out.safe_sub(&quote.amount_out())?;
    let (reserve_a, reserve_b) = match direction {
        SwapDirection::AToB => (new_in, new_out),
        SwapDirection::BToA => (new_out, new_in),
    };
    let next = PoolState::new(reserve_a, reserve_b, state.total_shares())?;
    Ok((next, quote))
}

fn build_quote(
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<SwapQuote> {
    let fee = fee_amount(amount_in)?;
    let impact = price_impact_bps(amount_in, amount_out, reserve_in, reserve_out)?;
    SwapQuote::new(direction, amount_in, amount_out, fee, impact)
}
