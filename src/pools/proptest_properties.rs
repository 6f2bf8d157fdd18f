//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant growth**: `reserve_a × reserve_b` strictly grows with
//!    every settled swap.
//! 2. **Forward/reverse consistency**: the input from `get_required_input`
//!    always buys at least the requested output.
//! 3. **Swap reversibility**: a round trip A→B→A never returns more.
//! 4. **Fee monotonicity**: a larger input never pays a smaller fee or
//!    receives a smaller output.
//! 5. **Withdrawal round-trip**: deposit then full withdrawal returns at
//!    most what was deposited.
//! 6. **isqrt correctness**: `r² ≤ n < (r + 1)²`.
//! 7. **Ledger conservation**: `Σ balances == total_shares` across any
//!    sequence of operations.

#![allow(clippy::panic)]

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Amount, HolderId, PoolState, Shares, SwapDirection, SwapSpec};
use crate::engine::{fee_amount, get_amount_out, get_required_input, MINIMUM_LIQUIDITY};
use crate::math::{isqrt, widen, U256};
use crate::pools::ConstantProductPool;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn holder(n: u8) -> HolderId {
    HolderId::from_bytes([n; 32])
}

fn make_pool(ra: u128, rb: u128) -> ConstantProductPool {
    let Ok(mut pool) = ConstantProductPool::from_config(&PoolConfig::eth_usdt()) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(holder(1), Amount::new(ra), Amount::new(rb)) else {
        panic!("valid first deposit");
    };
    pool
}

fn exact_in(v: u128) -> Option<SwapSpec> {
    SwapSpec::exact_in(Amount::new(v)).ok()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves large enough to clear the locked minimum on the first deposit.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000_000_000u128
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::AToB), Just(SwapDirection::BToA)]
}

#[derive(Debug, Clone)]
enum Op {
    Deposit { who: u8, a: u128, b: u128 },
    Withdraw { who: u8, fraction_bps: u32 },
    Swap { direction: SwapDirection, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u8..=3, 1u128..=1_000_000_000_000u128, 1u128..=1_000_000_000_000u128)
            .prop_map(|(who, a, b)| Op::Deposit { who, a, b }),
        (1u8..=3, 1u32..=10_000u32).prop_map(|(who, fraction_bps)| Op::Withdraw { who, fraction_bps }),
        (direction_strategy(), 1u128..=1_000_000_000_000u128)
            .prop_map(|(direction, amount)| Op::Swap { direction, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant growth
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariant_grows_on_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        fraction in 1u128..=1_000u128,
    ) {
        let mut pool = make_pool(ra, rb);
        let before = pool.state();
        let (reserve_in, _) = direction.reserves(&before);
        let Some(spec) = exact_in((reserve_in.get() * fraction / 1_000).max(1)) else {
            return Ok(());
        };
        // Dust swaps whose output rounds to zero are rejected outright.
        let Ok(_) = pool.swap(direction, spec, Amount::ZERO) else {
            prop_assert_eq!(pool.state(), before);
            return Ok(());
        };
        let after = pool.state();
        prop_assert!(after.invariant() > before.invariant());
        prop_assert_eq!(after.total_shares(), before.total_shares());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Forward/reverse consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_required_input_buys_requested_output(
        r_in in 1u128..=u128::from(u64::MAX),
        r_out in 2u128..=u128::from(u64::MAX),
        out_fraction in 1u128..=9_999u128,
    ) {
        let wanted = (r_out * out_fraction / 10_000).max(1).min(r_out - 1);
        let Ok(need) = get_required_input(Amount::new(wanted), Amount::new(r_out), Amount::new(r_in)) else {
            return Err(TestCaseError::fail("request below the reserve must be satisfiable"));
        };
        let Ok(got) = get_amount_out(need, Amount::new(r_in), Amount::new(r_out)) else {
            return Err(TestCaseError::fail("forward pricing failed"));
        };
        prop_assert!(got.get() >= wanted, "need={} got={} wanted={}", need, got, wanted);

        // One unit less must fall short, so the inverse is tight.
        if need.get() > 0 {
            let Ok(short) = get_amount_out(Amount::new(need.get() - 1), Amount::new(r_in), Amount::new(r_out)) else {
                return Err(TestCaseError::fail("forward pricing failed"));
            };
            prop_assert!(short.get() < wanted);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_loses_value(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = make_pool(ra, rb);

        let Some(spec_ab) = exact_in(swap_in) else {
            return Ok(());
        };
        let Ok(ab) = pool.swap(SwapDirection::AToB, spec_ab, Amount::ZERO) else {
            return Ok(());
        };
        let Some(spec_ba) = exact_in(ab.amount_out().get()) else {
            return Ok(());
        };
        let Ok(ba) = pool.swap(SwapDirection::BToA, spec_ba, Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            ba.amount_out(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_larger_input_never_worse(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in 1u128..=1_000_000_000u128,
        extra in 0u128..=1_000_000_000u128,
    ) {
        let large = small + extra;
        let (Ok(fee_s), Ok(fee_l)) = (fee_amount(Amount::new(small)), fee_amount(Amount::new(large))) else {
            return Err(TestCaseError::fail("fee computation failed"));
        };
        prop_assert!(fee_s <= fee_l);

        let (ra, rb) = (Amount::new(ra), Amount::new(rb));
        let (Ok(out_s), Ok(out_l)) = (
            get_amount_out(Amount::new(small), ra, rb),
            get_amount_out(Amount::new(large), ra, rb),
        ) else {
            return Err(TestCaseError::fail("pricing failed"));
        };
        prop_assert!(out_s <= out_l);
        prop_assert!(out_l < rb);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Withdrawal round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_then_withdraw_returns_at_most_deposit(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let Ok(mut pool) = ConstantProductPool::from_config(&PoolConfig::eth_usdt()) else {
            return Err(TestCaseError::fail("valid pool"));
        };
        let Ok(shares) = pool.add_liquidity(holder(1), Amount::new(a), Amount::new(b)) else {
            // Too small to clear the locked minimum.
            prop_assert_eq!(pool.state(), PoolState::EMPTY);
            return Ok(());
        };
        match pool.remove_liquidity(holder(1), shares) {
            Ok((out_a, out_b)) => {
                prop_assert!(out_a.get() <= a);
                prop_assert!(out_b.get() <= b);
                prop_assert_eq!(pool.total_shares(), MINIMUM_LIQUIDITY);
            }
            Err(crate::error::AmmError::InvalidQuantity(_)) => {}
            Err(e) => return Err(TestCaseError::fail(format!("unexpected {e}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: isqrt correctness
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_isqrt_brackets_root(x in any::<u128>(), y in any::<u128>()) {
        let n = widen(x) * widen(y);
        let r = isqrt(n);
        prop_assert!(r * r <= n);
        let next = r + U256::from(1u8);
        // (r + 1)² may exceed 256 bits only when n is near U256::MAX.
        match next.checked_mul(next) {
            Some(sq) => prop_assert!(n < sq),
            None => prop_assert!(r >= U256::from(u128::MAX)),
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: Ledger conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_ledger_sums_to_supply(
        seed_a in reserve_strategy(),
        seed_b in reserve_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..32),
    ) {
        let mut pool = make_pool(seed_a, seed_b);
        for op in ops {
            let before = pool.clone();
            let result = match op {
                Op::Deposit { who, a, b } => pool
                    .add_liquidity(holder(who), Amount::new(a), Amount::new(b))
                    .map(|_| ()),
                Op::Withdraw { who, fraction_bps } => {
                    let balance = pool.shares_of(&holder(who)).get();
                    let burn = Shares::new(balance / 10_000 * u128::from(fraction_bps));
                    pool.remove_liquidity(holder(who), burn).map(|_| ())
                }
                Op::Swap { direction, amount } => match exact_in(amount) {
                    Some(spec) => pool.swap(direction, spec, Amount::ZERO).map(|_| ()),
                    None => Ok(()),
                },
            };
            if result.is_err() {
                prop_assert_eq!(&pool, &before);
            }
            prop_assert_eq!(pool.ledger().total(), Ok(pool.total_shares()));
            prop_assert!(pool.state().validate().is_ok());
            prop_assert_eq!(pool.shares_of(&HolderId::LOCKED), MINIMUM_LIQUIDITY);
        }
    }
}
