//! Integration tests exercising the full system from config to pool operation.
//!
//! These tests verify end-to-end flows through the public API: pool
//! bootstrap, swaps in both directions, exact-output swaps, slippage
//! rejection, multi-holder liquidity, and state restoration.

#![allow(clippy::panic)]

use reserve_amm::config::PoolConfig;
use reserve_amm::domain::{
    Amount, Asset, BasisPoints, Decimals, HolderId, PoolState, Shares, SwapDirection, SwapSpec,
};
use reserve_amm::engine::{self, MINIMUM_LIQUIDITY};
use reserve_amm::error::AmmError;
use reserve_amm::math::{isqrt, narrow, widen};
use reserve_amm::pools::ConstantProductPool;
use reserve_amm::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ETH: u128 = 1_000_000_000_000_000_000;
const USDT: u128 = 1_000_000;

fn alice() -> HolderId {
    HolderId::from_evm([0xA1; 20])
}

fn bob() -> HolderId {
    HolderId::from_evm([0xB0; 20])
}

fn empty_pool() -> ConstantProductPool {
    let Ok(pool) = ConstantProductPool::from_config(&PoolConfig::eth_usdt()) else {
        panic!("valid pool");
    };
    pool
}

fn funded_pool(eth: u128, usdt: u128) -> ConstantProductPool {
    let mut pool = empty_pool();
    let Ok(_) = pool.add_liquidity(alice(), Amount::new(eth), Amount::new(usdt)) else {
        panic!("first deposit");
    };
    pool
}

fn exact_in(v: u128) -> SwapSpec {
    let Ok(spec) = SwapSpec::exact_in(Amount::new(v)) else {
        panic!("valid spec");
    };
    spec
}

fn exact_out(v: u128) -> SwapSpec {
    let Ok(spec) = SwapSpec::exact_out(Amount::new(v)) else {
        panic!("valid spec");
    };
    spec
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[test]
fn first_deposit_eth_usdt() {
    let mut pool = empty_pool();
    let Ok(shares) = pool.add_liquidity(alice(), Amount::new(ETH), Amount::new(3_000 * USDT))
    else {
        panic!("first deposit");
    };

    let Ok(root) = narrow(isqrt(widen(ETH) * widen(3_000 * USDT)), "root") else {
        panic!("root fits");
    };
    assert_eq!(shares, Shares::new(root - 1_000));
    assert_eq!(pool.reserve_a(), Amount::new(ETH));
    assert_eq!(pool.reserve_b(), Amount::new(3_000_000_000));
    assert_eq!(pool.total_shares(), Shares::new(root));
    assert_eq!(pool.shares_of(&HolderId::LOCKED), MINIMUM_LIQUIDITY);
}

#[test]
fn first_deposit_below_minimum_is_rejected() {
    let mut pool = empty_pool();
    assert_eq!(
        pool.add_liquidity(alice(), Amount::new(1_000), Amount::new(1_000)),
        Err(AmmError::InsufficientInitialLiquidity)
    );
    assert_eq!(pool.state(), PoolState::EMPTY);
    assert!(pool.ledger().is_empty());
}

// ---------------------------------------------------------------------------
// Swaps
// ---------------------------------------------------------------------------

#[test]
fn swap_in_asset_units() {
    // Sell 1 into reserves of (10, 30 000).
    let out = engine::get_amount_out(Amount::new(1), Amount::new(10), Amount::new(30_000));
    assert_eq!(out, Ok(Amount::new(997 * 30_000 / (10 * 1_000 + 997))));
}

#[test]
fn required_input_for_whole_reserve_fails() {
    let pool = funded_pool(10 * ETH, 30_000 * USDT);
    assert_eq!(
        engine::get_required_input(pool.reserve_b(), pool.reserve_b(), pool.reserve_a()),
        Err(AmmError::OutputExceedsReserve)
    );
    assert_eq!(
        pool.quote_swap(SwapDirection::AToB, exact_out(30_000 * USDT)),
        Err(AmmError::OutputExceedsReserve)
    );
}

#[test]
fn buy_usdt_with_eth_then_back() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let k0 = pool.state().invariant();

    let Ok(sell) = pool.swap(SwapDirection::AToB, exact_in(ETH), Amount::ZERO) else {
        panic!("sell ETH");
    };
    assert_eq!(sell.fee_amount(), Amount::new(3 * ETH / 1_000));
    assert!(sell.price_impact() > BasisPoints::new(30));
    let k1 = pool.state().invariant();
    assert!(k1 > k0);

    let Ok(buy) = pool.swap(SwapDirection::BToA, exact_in(sell.amount_out().get()), Amount::ZERO)
    else {
        panic!("buy ETH back");
    };
    assert!(buy.amount_out() < Amount::new(ETH));
    assert!(pool.state().invariant() > k1);
}

#[test]
fn exact_output_swap_delivers_requested_amount() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let wanted = 1_000 * USDT;
    let Ok(preview) = pool.quote_swap(SwapDirection::AToB, exact_out(wanted)) else {
        panic!("preview");
    };
    let Ok(settled) = pool.swap(SwapDirection::AToB, exact_out(wanted), Amount::new(wanted))
    else {
        panic!("settle");
    };
    assert_eq!(settled, preview);
    assert!(settled.amount_out() >= Amount::new(wanted));
    assert_eq!(
        pool.reserve_a(),
        Amount::new(10 * ETH + settled.amount_in().get())
    );
}

#[test]
fn slippage_rejection_leaves_state() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let before = pool.clone();
    let Err(AmmError::SlippageExceeded { minimum, actual }) =
        pool.swap(SwapDirection::AToB, exact_in(ETH), Amount::new(3_000 * USDT))
    else {
        panic!("expected SlippageExceeded");
    };
    assert_eq!(minimum, 3_000 * USDT);
    assert!(actual < minimum);
    assert_eq!(pool, before);
}

#[test]
fn stale_minimum_after_front_run_is_rejected() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let spec = exact_in(ETH);
    let Ok(min_out) = pool.minimum_received(SwapDirection::AToB, spec) else {
        panic!("minimum");
    };
    // Someone else moves the price first.
    let Ok(_) = pool.swap(SwapDirection::AToB, exact_in(2 * ETH), Amount::ZERO) else {
        panic!("front run");
    };
    let Err(AmmError::SlippageExceeded { .. }) = pool.swap(SwapDirection::AToB, spec, min_out)
    else {
        panic!("expected SlippageExceeded");
    };
}

// ---------------------------------------------------------------------------
// Liquidity lifecycle
// ---------------------------------------------------------------------------

#[test]
fn two_providers_share_fees() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let Ok(paired) = pool.paired_amount(SwapDirection::AToB, Amount::new(10 * ETH)) else {
        panic!("paired");
    };
    assert_eq!(paired, Amount::new(30_000 * USDT));
    let Ok(bob_shares) = pool.add_liquidity(bob(), Amount::new(10 * ETH), paired) else {
        panic!("second deposit");
    };
    assert!(bob_shares > Shares::ZERO);

    let Ok(before) = pool.position_value(&bob()) else {
        panic!("position value");
    };
    for _ in 0..10 {
        let Ok(_) = pool.swap(SwapDirection::AToB, exact_in(ETH), Amount::ZERO) else {
            panic!("swap");
        };
        let Ok(_) = pool.swap(SwapDirection::BToA, exact_in(3_000 * USDT), Amount::ZERO) else {
            panic!("swap");
        };
    }
    let Ok(after) = pool.position_value(&bob()) else {
        panic!("position value");
    };
    // Fees accrue to the reserves, so the position's invariant grows.
    assert!(widen(after.0.get()) * widen(after.1.get()) > widen(before.0.get()) * widen(before.1.get()));

    let Ok((a, b)) = pool.remove_liquidity(bob(), bob_shares) else {
        panic!("withdraw");
    };
    assert_eq!((a, b), after);
    assert_eq!(pool.ledger().total(), Ok(pool.total_shares()));
}

#[test]
fn over_withdrawal_fails_without_mutation() {
    let mut pool = funded_pool(ETH, 3_000 * USDT);
    let before = pool.clone();
    let balance = pool.shares_of(&alice());
    let Some(too_many) = balance.checked_add(&Shares::new(1)) else {
        panic!("no overflow");
    };
    assert_eq!(
        pool.remove_liquidity(alice(), too_many),
        Err(AmmError::InsufficientShares {
            requested: too_many.get(),
            available: balance.get()
        })
    );
    assert_eq!(pool, before);
}

#[test]
fn stranger_cannot_withdraw() {
    let mut pool = funded_pool(ETH, 3_000 * USDT);
    assert_eq!(
        pool.preview_remove_liquidity(&bob(), Shares::new(1)),
        Err(AmmError::InsufficientShares {
            requested: 1,
            available: 0
        })
    );
    let Err(AmmError::InsufficientShares { .. }) = pool.remove_liquidity(bob(), Shares::new(1))
    else {
        panic!("expected InsufficientShares");
    };
}

// ---------------------------------------------------------------------------
// Display and persistence
// ---------------------------------------------------------------------------

#[test]
fn human_readable_amounts() {
    let cfg = PoolConfig::eth_usdt();
    let Ok(amount) = cfg.asset_b().parse("2719.5") else {
        panic!("parse");
    };
    assert_eq!(amount, Amount::new(2_719_500_000));
    assert_eq!(cfg.asset_b().display(amount), "2719.500000 USDT");
    assert_eq!(cfg.asset_a().decimals().one(), Amount::new(ETH));
}

#[test]
fn custom_pair_config() {
    let (Ok(d8), Ok(d18)) = (Decimals::new(8), Decimals::new(18)) else {
        panic!("valid decimals");
    };
    let (Ok(wbtc), Ok(dai)) = (Asset::new("WBTC", d8), Asset::new("DAI", d18)) else {
        panic!("valid assets");
    };
    let Ok(cfg) = PoolConfig::new(wbtc, dai, BasisPoints::new(50)) else {
        panic!("valid config");
    };
    let Ok(mut pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(alice(), Amount::new(100_000_000), Amount::new(60_000 * ETH))
    else {
        panic!("deposit");
    };
    // 1 WBTC = 60 000 DAI.
    assert_eq!(
        pool.spot_price(SwapDirection::AToB),
        Ok(Amount::new(60_000 * ETH))
    );
}

#[test]
fn restore_round_trip() {
    let mut pool = funded_pool(10 * ETH, 30_000 * USDT);
    let Ok(_) = pool.add_liquidity(bob(), Amount::new(ETH), Amount::new(3_000 * USDT)) else {
        panic!("deposit");
    };
    let Ok(restored) =
        ConstantProductPool::restore(pool.config().clone(), pool.state(), pool.ledger().clone())
    else {
        panic!("restore");
    };
    assert_eq!(restored, pool);

    let mut forged = pool.ledger().clone();
    forged.set_balance(bob(), Shares::new(1));
    let Err(AmmError::InvalidState(_)) =
        ConstantProductPool::restore(pool.config().clone(), pool.state(), forged)
    else {
        panic!("expected InvalidState");
    };
}

#[cfg(feature = "serde")]
#[test]
fn serde_snapshot_round_trip() {
    let pool = funded_pool(10 * ETH, 30_000 * USDT);
    let Ok(state_json) = serde_json::to_string(&pool.state()) else {
        panic!("serialize state");
    };
    let Ok(ledger_json) = serde_json::to_string(pool.ledger()) else {
        panic!("serialize ledger");
    };
    let (Ok(state), Ok(ledger)) = (
        serde_json::from_str::<PoolState>(&state_json),
        serde_json::from_str::<reserve_amm::domain::SharesLedger>(&ledger_json),
    ) else {
        panic!("deserialize");
    };
    let Ok(restored) = ConstantProductPool::restore(pool.config().clone(), state, ledger) else {
        panic!("restore");
    };
    assert_eq!(restored, pool);

    let bad = r#"{"reserve_a":1,"reserve_b":0,"total_shares":1}"#;
    assert!(serde_json::from_str::<PoolState>(bad).is_err());
}
