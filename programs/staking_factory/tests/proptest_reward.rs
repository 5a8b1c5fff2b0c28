//! Property-based tests for the reward math.
//!
//! These run the production functions from `staking_factory::reward` across
//! wide random ranges: conservation (no payout beyond entitlement or
//! reserve), no double claim, monotonicity, rounding direction, and
//! no-panic at extremes.

use proptest::prelude::*;
use staking_factory::reward::{claimable, elapsed_periods, entitlement};

proptest! {
    // ── No Double Claim / Conservation ──

    #[test]
    fn prop_repeated_claims_never_exceed_entitlement(
        deposited in 1u64..1_000_000_000,
        numerator in 1u64..1_000,
        precision in 1u64..1_000,
        periods in 0u64..10_000,
        reserve in 0u64..1_000_000_000,
        rounds in 1usize..6,
    ) {
        let ent = match entitlement(deposited, numerator, precision, periods) {
            Ok(e) => e, Err(_) => return Ok(()),
        };

        // Claim repeatedly without advancing time.
        let mut claimed = 0u64;
        let mut remaining_reserve = reserve;
        let mut paid_total = 0u64;
        for _ in 0..rounds {
            let due = claimable(ent, claimed, remaining_reserve);
            claimed += due;
            remaining_reserve -= due;
            paid_total += due;
        }

        prop_assert!(paid_total <= ent, "paid {} > entitlement {}", paid_total, ent);
        prop_assert!(paid_total <= reserve, "paid {} > reserve {}", paid_total, reserve);
        // Once settled, a further claim pays nothing.
        prop_assert_eq!(claimable(ent, claimed, remaining_reserve), 0);
    }

    #[test]
    fn prop_watermark_never_overtaken(
        ent in 0u64..u64::MAX,
        claimed in 0u64..u64::MAX,
        reserve in 0u64..u64::MAX,
    ) {
        let due = claimable(ent, claimed, reserve);
        prop_assert!(due <= reserve);
        prop_assert!(claimed.checked_add(due).map_or(false, |c| c <= ent.max(claimed)));
    }

    #[test]
    fn prop_window_rebase_pays_each_window_fully(
        deposited in 1u64..1_000_000,
        topup in 1u64..1_000_000,
        numerator in 1u64..1_000,
        precision in 1u64..1_000,
        periods1 in 1u64..1_000,
        periods2 in 1u64..1_000,
    ) {
        // Window 1: claim everything, reserve permitting.
        let w1 = match entitlement(deposited, numerator, precision, periods1) {
            Ok(e) => e, Err(_) => return Ok(()),
        };
        let paid1 = claimable(w1, 0, u64::MAX);
        prop_assert_eq!(paid1, w1);

        // A top-up restarts the window; the deposit handler rebases the
        // watermark to zero along with the timestamp. Accrual in the new
        // window must be independent of what window 1 paid.
        let w2 = match entitlement(deposited + topup, numerator, precision, periods2) {
            Ok(e) => e, Err(_) => return Ok(()),
        };
        let paid2 = claimable(w2, 0, u64::MAX);
        prop_assert_eq!(paid2, w2);
    }

    // ── Monotonicity ──

    #[test]
    fn prop_entitlement_monotone_in_periods(
        deposited in 1u64..1_000_000_000,
        numerator in 1u64..1_000,
        precision in 1u64..1_000,
        periods in 0u64..10_000,
    ) {
        match (
            entitlement(deposited, numerator, precision, periods),
            entitlement(deposited, numerator, precision, periods + 1),
        ) {
            (Ok(a), Ok(b)) => prop_assert!(b >= a),
            _ => {}
        }
    }

    #[test]
    fn prop_periods_monotone_in_time(
        start in 0i64..1_000_000_000,
        elapsed in 0i64..1_000_000_000,
        period in 1i64..1_000_000,
    ) {
        let a = elapsed_periods(start, start + elapsed, period);
        let b = elapsed_periods(start, start + elapsed + 1, period);
        prop_assert!(b >= a);
    }

    // ── Rounding Direction ──

    #[test]
    fn prop_entitlement_rounds_down(
        deposited in 1u64..1_000_000_000,
        numerator in 1u64..1_000,
        precision in 1u64..1_000,
        periods in 0u64..10_000,
    ) {
        if let Ok(ent) = entitlement(deposited, numerator, precision, periods) {
            // ent * precision <= deposited * numerator * periods (pool-favoring)
            prop_assert!(
                (ent as u128) * (precision as u128)
                    <= (deposited as u128) * (numerator as u128) * (periods as u128),
                "rounding up: ent={} d={} n={} p={} k={}",
                ent, deposited, numerator, precision, periods,
            );
        }
    }

    #[test]
    fn prop_periods_truncate_toward_zero(
        start in 0i64..1_000_000_000,
        elapsed in 0i64..1_000_000_000,
        period in 1i64..1_000_000,
    ) {
        let k = elapsed_periods(start, start + elapsed, period);
        prop_assert!((k as i64) * period <= elapsed);
        prop_assert!((k as i64 + 1) * period > elapsed);
    }

    // ── Clock Skew / Degenerate Periods ──

    #[test]
    fn prop_time_before_deposit_accrues_nothing(
        start in 0i64..1_000_000_000,
        back in 1i64..1_000_000_000,
        period in 1i64..1_000_000,
    ) {
        prop_assert_eq!(elapsed_periods(start, start - back, period), 0);
    }

    #[test]
    fn prop_nonpositive_period_accrues_nothing(
        start in any::<i64>(),
        now in any::<i64>(),
        period in i64::MIN..=0,
    ) {
        prop_assert_eq!(elapsed_periods(start, now, period), 0);
    }

    // ── Large Values (no panic) ──

    #[test]
    fn prop_entitlement_no_panic(
        deposited in any::<u64>(),
        numerator in any::<u64>(),
        precision in any::<u64>(),
        periods in any::<u64>(),
    ) {
        let _ = entitlement(deposited, numerator, precision, periods);
    }

    #[test]
    fn prop_claimable_no_panic(ent: u64, claimed: u64, reserve: u64) {
        let _ = claimable(ent, claimed, reserve);
    }
}

// ═══════════════════════════════════════════════════════════════
// Targeted Edge Cases (not random)
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_spec_scenario_one_period() {
    // Pool: lock 60s, rate 1/1. Position: 100 deposited at t=0.
    // One full lock period pays 100% of the deposit.
    let periods = elapsed_periods(0, 60, 60);
    assert_eq!(periods, 1);
    let ent = entitlement(100, 1, 1, periods).unwrap();
    assert_eq!(ent, 100);

    // Fully funded reserve: first claim pays it all, second pays nothing.
    assert_eq!(claimable(ent, 0, 1_000), 100);
    assert_eq!(claimable(ent, 100, 900), 0);
}

#[test]
fn test_topup_after_claim_starts_a_fresh_window() {
    // Pool: lock 60s, rate 1/1. Deposit 100 at t=0, claim the full 100 at
    // t=60, then top up by 1. The top-up resets the window (timestamp and
    // watermark both), so at t=120 the whole 101 is claimable.
    let w1 = entitlement(100, 1, 1, elapsed_periods(0, 60, 60)).unwrap();
    assert_eq!(claimable(w1, 0, 1_000), 100);

    let w2 = entitlement(101, 1, 1, elapsed_periods(60, 120, 60)).unwrap();
    assert_eq!(w2, 101);
    assert_eq!(claimable(w2, 0, 1_000), 101);
}

#[test]
fn test_reserve_starvation_then_refund() {
    // Entitlement 100 but only 30 reserved.
    let ent = entitlement(100, 1, 1, 1).unwrap();
    let first = claimable(ent, 0, 30);
    assert_eq!(first, 30);
    // Reserve topped back up: the rest becomes claimable, no double pay.
    let second = claimable(ent, first, 70);
    assert_eq!(second, 70);
    assert_eq!(claimable(ent, first + second, 70), 0);
}

#[test]
fn test_withdrawal_shrinks_entitlement_below_watermark() {
    // Claimed 100, then the position withdrew; entitlement is now 40.
    // Nothing further is due, and nothing underflows.
    let ent = entitlement(40, 1, 1, 1).unwrap();
    assert_eq!(claimable(ent, 100, 1_000), 0);
}

#[test]
fn test_zero_precision_rejected() {
    assert!(entitlement(100, 1, 0, 1).is_err());
}
