//! Stake pool account and custody policy model.

use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Custody model for a pool's vaults, fixed at creation and never migrated.
///
/// The raw policy index stays part of the pool's PDA seeds (so each index is
/// a distinct pool), but custody behavior only distinguishes two shapes:
/// index 0 is sole program control, every other registered index is the
/// shared escrow signer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodyPolicy {
    /// Vault authority is the pool PDA itself. No external co-signer.
    Direct,
    /// Vault authority is an SPL-token multisig with threshold 1 over
    /// {creator, factory registry, pool PDA}. Any single member, including
    /// the program, can authorize a transfer.
    Escrow,
}

impl CustodyPolicy {
    /// Validates a raw policy index against the factory's registered count
    /// and maps it to a custody model. Membership is checked once here, at
    /// pool creation - transitions never re-validate the index.
    pub fn from_index(index: u8, policy_count: u8) -> Result<Self> {
        require!(index < policy_count, StakingError::InvalidPolicy);
        Ok(if index == 0 {
            CustodyPolicy::Direct
        } else {
            CustodyPolicy::Escrow
        })
    }
}

/// One staking pool per (creator, mint, policy) triple.
///
/// The triple is embedded in the PDA seeds, so at most one pool can ever
/// exist for it. Configuration is immutable after creation; only the
/// running totals change.
#[account]
pub struct StakePool {
    /// The signer whose key is part of the pool's seeds.
    pub creator: Pubkey,
    /// The staked token's mint. Locked at creation.
    pub mint: Pubkey,
    /// Raw custody policy index (seed byte, wire-stable).
    pub policy: u8,

    /// Lock window in seconds. Doubles as the reward accrual period.
    pub lock_duration: i64,
    /// Reward rate numerator: a position earns
    /// deposited * numerator / precision per elapsed lock period.
    pub reward_rate_numerator: u64,
    /// Reward rate precision, validated > 0 at creation.
    pub reward_rate_precision: u64,

    /// Sum of all live positions' deposited amounts.
    pub total_staked: u64,
    /// Tokens in the reward vault not yet paid out. Upper bound on any claim.
    pub total_reward_reserved: u64,

    /// Vault for deposits awaiting promotion.
    pub free_vault: Pubkey,
    /// Vault for locked principal.
    pub staked_vault: Pubkey,
    /// Vault rewards are paid from.
    pub reward_vault: Pubkey,
    /// Escrow multisig holding vault authority (Escrow policy only;
    /// `Pubkey::default()` under Direct).
    pub escrow_signers: Pubkey,

    pub bump: u8,
    pub free_vault_bump: u8,
    pub staked_vault_bump: u8,
    pub reward_vault_bump: u8,
}

impl StakePool {
    pub const LEN: usize = 8
        + (32 * 2) + 1
        + 8 + (8 * 2)
        + (8 * 2)
        + (32 * 4)
        + 4;

    /// The custody model this pool was created under.
    pub fn custody_policy(&self) -> CustodyPolicy {
        if self.policy == 0 {
            CustodyPolicy::Direct
        } else {
            CustodyPolicy::Escrow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_zero_is_direct() {
        assert_eq!(
            CustodyPolicy::from_index(0, 3).unwrap(),
            CustodyPolicy::Direct
        );
    }

    #[test]
    fn nonzero_policies_are_escrow() {
        assert_eq!(
            CustodyPolicy::from_index(1, 3).unwrap(),
            CustodyPolicy::Escrow
        );
        assert_eq!(
            CustodyPolicy::from_index(2, 3).unwrap(),
            CustodyPolicy::Escrow
        );
    }

    #[test]
    fn out_of_range_policy_rejected() {
        assert!(CustodyPolicy::from_index(3, 3).is_err());
        assert!(CustodyPolicy::from_index(0, 0).is_err());
    }
}
