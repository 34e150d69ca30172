//! Property-based tests for the pricing engine and the ledger.
//!
//! 1. **Bounded output**: any funded pool prices, and
//!    `0 < amount_out ≤ reserve_out`, strict unless the quotient floors to
//!    zero.
//! 2. **Invariant drift**: `k_after ≤ k_before` and the gap is below
//!    `reserve_in_after`.
//! 3. **Monotonicity**: a larger input never yields a smaller output.
//! 4. **Ledger round trip**: credit then debit of the same amount restores
//!    every balance.

use proptest::prelude::*;

use super::ConstantProduct;
use crate::domain::{Address, Amount, Asset, AssetPair, Decimals, PairKey, Symbol, DEFAULT_SEPARATOR};
use crate::ledger::LiquidityLedger;
use crate::math::U256;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const E18: u128 = 1_000_000_000_000_000_000;

/// Dust, 18-decimal token amounts, and magnitudes whose product needs far
/// more than 128 bits.
fn magnitude_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1u128..=1_000_000_000u128,
        E18..=E18 * 1_000_000_000,
        E18 * 1_000_000_000..=E18 * E18,
    ]
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    magnitude_strategy()
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    magnitude_strategy()
}

fn key() -> PairKey {
    let (Ok(a), Ok(b), Ok(d)) = (Symbol::new("USDC"), Symbol::new("HD"), Decimals::new(18)) else {
        panic!("valid metadata");
    };
    let Ok(pair) = AssetPair::new(
        Asset::new(Address::repeat_byte(1), a, d),
        Asset::new(Address::repeat_byte(2), b, d),
    ) else {
        panic!("distinct assets");
    };
    PairKey::from_pair(&pair, DEFAULT_SEPARATOR)
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_bounded(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        amt in amount_strategy(),
    ) {
        // every funded pool prices, however wide x · y is
        let result = ConstantProduct::quote_exact_in(Amount::new(ri), Amount::new(ro), Amount::new(amt));
        prop_assert!(result.is_ok(), "ri={} ro={} amt={} -> {:?}", ri, ro, amt, result);
        let Ok(q) = result else {
            return Ok(());
        };
        let out = q.amount_out().get();
        prop_assert!(out > 0);
        prop_assert!(out <= ro);
        let k = U256::from(ri) * U256::from(ro);
        if k >= U256::from(ri + amt) {
            prop_assert!(out < ro, "out={} drained ro={} although k >= post_x", out, ro);
        }
    }

    #[test]
    fn prop_invariant_drifts_down_by_less_than_post_x(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        amt in amount_strategy(),
    ) {
        let Ok(q) = ConstantProduct::quote_exact_in(Amount::new(ri), Amount::new(ro), Amount::new(amt)) else {
            return Ok(());
        };
        let before = q.k_before();
        let after = q.k_after();
        prop_assert!(after <= before);
        prop_assert!(before - after < U256::from(q.reserve_in_after().get()));
        prop_assert_eq!(q.reserve_out_after().get(), ro - q.amount_out().get());
    }

    #[test]
    fn prop_output_monotone_in_input(
        ri in reserve_strategy(),
        ro in reserve_strategy(),
        small in amount_strategy(),
        extra in 0u128..=1_000_000u128,
    ) {
        let large = small + extra;
        let (Ok(qs), Ok(ql)) = (
            ConstantProduct::quote_exact_in(Amount::new(ri), Amount::new(ro), Amount::new(small)),
            ConstantProduct::quote_exact_in(Amount::new(ri), Amount::new(ro), Amount::new(large)),
        ) else {
            return Ok(());
        };
        prop_assert!(ql.amount_out() >= qs.amount_out());
    }
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_credit_then_debit_restores(
        seed in 1u128..=1_000_000_000u128,
        amt in 1u128..=1_000_000_000u128,
        user_byte in 0x10u8..=0x20u8,
    ) {
        let k = key();
        let asset = Address::repeat_byte(1);
        let user = Address::repeat_byte(user_byte);
        let seeder = Address::repeat_byte(0xf0);
        let mut ledger = LiquidityLedger::new();
        let Ok(()) = ledger.credit(&k, &seeder, &asset, Amount::new(seed)) else {
            panic!("seed credit ok");
        };
        let before = ledger.clone();

        let Ok(()) = ledger.credit(&k, &user, &asset, Amount::new(amt)) else {
            panic!("credit ok");
        };
        prop_assert_eq!(ledger.total_balance(k.as_str(), &asset).get(), seed + amt);
        let Ok(()) = ledger.debit(&k, &user, &asset, Amount::new(amt)) else {
            panic!("debit ok");
        };
        prop_assert_eq!(ledger, before);
    }

    #[test]
    fn prop_over_withdrawal_rejected_without_effect(
        deposit in 1u128..=1_000_000u128,
        excess in 1u128..=1_000_000u128,
    ) {
        let k = key();
        let asset = Address::repeat_byte(2);
        let user = Address::repeat_byte(0xa1);
        let mut ledger = LiquidityLedger::new();
        let Ok(()) = ledger.credit(&k, &user, &asset, Amount::new(deposit)) else {
            panic!("credit ok");
        };
        let before = ledger.clone();
        prop_assert!(ledger.debit(&k, &user, &asset, Amount::new(deposit + excess)).is_err());
        prop_assert_eq!(ledger, before);
    }
}
