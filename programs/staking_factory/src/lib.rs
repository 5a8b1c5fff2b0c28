//! # Staking Factory Program
//!
//! A factory for time-locked staking pools. A singleton registry records
//! the factory authority and the number of supported custody policies;
//! anyone can then create one pool per (creator, token mint, policy)
//! triple, and users open per-pool positions to deposit, withdraw, and
//! claim period-based rewards.
//!
//! ## Custody policies
//! - **Direct** (policy 0): the pool's three vaults (free / staked /
//!   reward) are solely controlled by the pool PDA.
//! - **Escrow** (policy >= 1): vault authority is an SPL-token multisig
//!   with threshold 1 over {creator, factory, pool PDA}, so any single
//!   quorum member can authorize a transfer.
//!
//! ## Features
//! - Deterministic PDAs for registry, pools, vaults, and positions
//! - Deposits held in a free vault until promoted to the staked vault
//! - Period-based reward accrual with a claimed-reward watermark
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("DBa1q9iY3ZrvXBgEpVq453adWqZUrVDmRQztiW6FRJek");

pub mod constants;
pub mod custody;
pub mod error;
pub mod instructions;
pub mod reward;
pub mod state;

use instructions::*;

#[program]
pub mod staking_factory {
    use super::*;

    /// Initializes the factory registry.
    ///
    /// # Arguments
    /// * `policy_count` - Number of custody policies the factory recognizes
    ///
    /// # Errors
    /// Fails if `policy_count` is zero or if the registry already exists.
    pub fn initialize(ctx: Context<Initialize>, policy_count: u8) -> Result<()> {
        instructions::initialize::handler(ctx, policy_count)
    }

    /// Creates a staking pool for (creator, mint, policy) with its three
    /// vaults, wiring vault authority per the custody policy.
    ///
    /// # Arguments
    /// * `policy` - Custody policy index, must be below the registry count
    /// * `lock_duration` - Lock window in seconds (also the reward period)
    /// * `reward_rate_numerator` - Reward rate numerator
    /// * `reward_rate_precision` - Reward rate precision, must be non-zero
    ///
    /// # Errors
    /// Fails on an out-of-range policy, negative lock duration, zero
    /// precision, or a pool that already exists for the triple.
    pub fn create_staking(
        ctx: Context<CreateStaking>,
        policy: u8,
        lock_duration: i64,
        reward_rate_numerator: u64,
        reward_rate_precision: u64,
    ) -> Result<()> {
        instructions::create_staking::handler(
            ctx,
            policy,
            lock_duration,
            reward_rate_numerator,
            reward_rate_precision,
        )
    }

    /// Opens a zeroed user position for (user, pool). No token movement.
    pub fn create_user_account(ctx: Context<CreateUserAccount>) -> Result<()> {
        instructions::create_user_account::handler(ctx)
    }

    /// Deposits tokens into the pool's free vault and resets the
    /// position's lock window.
    ///
    /// # Errors
    /// Fails on a zero amount, a position/pool mismatch, or insufficient
    /// source balance (surfaced by the token program).
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraws principal after the lock window, staked vault first.
    ///
    /// # Errors
    /// Fails on a zero amount, more than the deposited balance, or an
    /// unexpired lock.
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Claims all reward currently due, bounded by the reward reserve.
    ///
    /// # Errors
    /// Fails with `NoRewardDue` when the entitlement is fully claimed or
    /// the reserve is empty.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Funds the pool's reward vault (permissionless).
    pub fn fund_reward(ctx: Context<FundReward>, amount: u64) -> Result<()> {
        instructions::fund_reward::handler(ctx, amount)
    }

    /// Moves the free vault's balance into the staked vault
    /// (permissionless crank).
    pub fn promote_stake(ctx: Context<PromoteStake>) -> Result<()> {
        instructions::promote_stake::handler(ctx)
    }
}
