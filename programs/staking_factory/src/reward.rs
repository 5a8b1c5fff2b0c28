//! Pure reward math.
//!
//! All functions here are side-effect free so the claim logic can be tested
//! and property-checked off-chain. Intermediates are u128 and every step is
//! checked; division truncates toward zero, always in the pool's favor.

use crate::error::StakingError;
use anchor_lang::prelude::*;

/// Number of whole lock periods elapsed since the deposit timestamp.
///
/// A period of zero (no-lock pool) accrues no periodic reward, which also
/// removes the division-by-zero case. Clock skew that puts `now` before the
/// deposit counts as zero periods rather than underflowing.
pub fn elapsed_periods(deposit_timestamp: i64, now: i64, period: i64) -> u64 {
    if period <= 0 {
        return 0;
    }
    let elapsed = now.saturating_sub(deposit_timestamp);
    if elapsed <= 0 {
        0
    } else {
        (elapsed / period) as u64
    }
}

/// Deterministic total entitlement of a position:
/// `deposited * numerator / precision * periods`, truncating toward zero.
pub fn entitlement(deposited: u64, numerator: u64, precision: u64, periods: u64) -> Result<u64> {
    // Precision is validated at pool creation; a zero here means corrupted
    // state and must abort, not divide.
    require!(precision > 0, StakingError::ZeroRewardPrecision);

    let per_period = (deposited as u128)
        .checked_mul(numerator as u128)
        .ok_or(StakingError::MathOverflow)?
        / precision as u128;
    let total = per_period
        .checked_mul(periods as u128)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(total).map_err(|_| error!(StakingError::MathOverflow))
}

/// Amount actually payable now: the unclaimed slice of the entitlement,
/// bounded above by the pool's reward reserve.
///
/// Saturating on the watermark side is deliberate: a withdrawal can shrink
/// the entitlement below what was already claimed, which simply means
/// nothing further is due.
pub fn claimable(entitlement: u64, claimed: u64, reserve: u64) -> u64 {
    entitlement.saturating_sub(claimed).min(reserve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_truncate() {
        assert_eq!(elapsed_periods(0, 59, 60), 0);
        assert_eq!(elapsed_periods(0, 60, 60), 1);
        assert_eq!(elapsed_periods(0, 119, 60), 1);
        assert_eq!(elapsed_periods(0, 120, 60), 2);
    }

    #[test]
    fn zero_period_accrues_nothing() {
        assert_eq!(elapsed_periods(0, 1_000_000, 0), 0);
        assert_eq!(elapsed_periods(0, 1_000_000, -5), 0);
    }

    #[test]
    fn clock_before_deposit_accrues_nothing() {
        assert_eq!(elapsed_periods(1_000, 900, 60), 0);
    }

    #[test]
    fn spec_scenario_rate_one_over_one() {
        // lock 60s, rate 1/1: one full period pays 100% of the deposit
        let periods = elapsed_periods(0, 60, 60);
        assert_eq!(entitlement(100, 1, 1, periods).unwrap(), 100);
    }

    #[test]
    fn entitlement_truncates_toward_zero() {
        // 100 * 1 / 3 = 33 per period
        assert_eq!(entitlement(100, 1, 3, 1).unwrap(), 33);
        assert_eq!(entitlement(100, 1, 3, 2).unwrap(), 66);
    }

    #[test]
    fn zero_periods_pay_nothing() {
        assert_eq!(entitlement(u64::MAX, u64::MAX, 1, 0).unwrap(), 0);
    }

    #[test]
    fn zero_precision_is_rejected() {
        assert!(entitlement(100, 1, 0, 1).is_err());
    }

    #[test]
    fn overflow_is_surfaced_not_wrapped() {
        assert!(entitlement(u64::MAX, u64::MAX, 1, u64::MAX).is_err());
    }

    #[test]
    fn claimable_respects_watermark() {
        assert_eq!(claimable(100, 0, 1_000), 100);
        assert_eq!(claimable(100, 40, 1_000), 60);
        assert_eq!(claimable(100, 100, 1_000), 0);
        // withdrawal shrank the entitlement below the watermark
        assert_eq!(claimable(50, 100, 1_000), 0);
    }

    #[test]
    fn rebased_watermark_pays_new_window_in_full() {
        // Window 1: 100 deposited, rate 1/1, one period claimed in full.
        let w1 = entitlement(100, 1, 1, 1).unwrap();
        assert_eq!(claimable(w1, 0, 1_000), 100);

        // A top-up of 1 restarts the window and rebases the watermark to
        // zero. One period later the full 101 is due, not 101 minus the
        // previous window's claim.
        let w2 = entitlement(101, 1, 1, 1).unwrap();
        assert_eq!(claimable(w2, 0, 1_000), 101);
    }

    #[test]
    fn claimable_bounded_by_reserve() {
        assert_eq!(claimable(100, 0, 30), 30);
        assert_eq!(claimable(100, 0, 0), 0);
    }
}
