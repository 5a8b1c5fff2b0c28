//! User position account.

use anchor_lang::prelude::*;

/// One position per (user, pool) pair, enforced by the PDA seeds.
///
/// A position is never closed: a fully withdrawn position stays behind as a
/// reusable zero-balance record.
#[account]
pub struct UserPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,

    /// Principal currently deposited (free + staked vault share).
    pub deposited_amount: u64,
    /// Start of the current lock window. Reset on every deposit.
    pub deposit_timestamp: i64,
    /// Reward watermark: reward paid out of the current lock window.
    /// Rebased to zero whenever a deposit restarts the window.
    pub claimed_reward: u64,

    pub bump: u8,
}

impl UserPosition {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 1;

    /// Whether the lock window starting at `deposit_timestamp` has elapsed.
    pub fn lock_expired(&self, now: i64, lock_duration: i64) -> bool {
        now.saturating_sub(self.deposit_timestamp) >= lock_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(deposit_timestamp: i64) -> UserPosition {
        UserPosition {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            deposited_amount: 100,
            deposit_timestamp,
            claimed_reward: 0,
            bump: 255,
        }
    }

    #[test]
    fn lock_boundary_is_inclusive() {
        let pos = position(1_000);
        assert!(!pos.lock_expired(1_059, 60));
        assert!(pos.lock_expired(1_060, 60));
        assert!(pos.lock_expired(1_061, 60));
    }

    #[test]
    fn zero_lock_is_always_expired() {
        let pos = position(1_000);
        assert!(pos.lock_expired(1_000, 0));
    }
}
