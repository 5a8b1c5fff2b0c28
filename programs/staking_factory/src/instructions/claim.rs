//! Claim instruction handler.
//!
//! Pays out the unclaimed slice of a position's deterministic reward
//! entitlement from the reward vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody;
use crate::error::StakingError;
use crate::reward;
use crate::state::{StakePool, UserPosition};

/// Accounts required to claim rewards.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The claiming user.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool the position belongs to.
    #[account(
        mut,
        seeds = [STAKING_SEED, stake_pool.creator.as_ref(), stake_pool.mint.as_ref(), &[stake_pool.policy]],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The user's position.
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref(), stake_pool.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_position.pool == stake_pool.key() @ StakingError::PositionPoolMismatch
    )]
    pub user_position: Account<'info, UserPosition>,

    /// The user's destination token account.
    #[account(
        mut,
        constraint = user_token_account.mint == stake_pool.mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The pool's reward vault.
    #[account(
        mut,
        constraint = reward_vault.key() == stake_pool.reward_vault @ StakingError::VaultMismatch
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// The escrow multisig, required for escrow-policy pools.
    /// CHECK: Verified against `stake_pool.escrow_signers` in the custody
    /// helper before any transfer is signed.
    pub escrow_signers: Option<UncheckedAccount<'info>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim all reward currently due.
///
/// Entitlement is `deposited * numerator / precision * elapsed_lock_periods`
/// with integer truncation; the claimed-reward watermark guarantees no
/// double payment across repeated claims, and the payout is bounded by the
/// pool's reward reserve.
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let position = &ctx.accounts.user_position;
    let stake_pool = &ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    let periods = reward::elapsed_periods(
        position.deposit_timestamp,
        clock.unix_timestamp,
        stake_pool.lock_duration,
    );
    let entitlement = reward::entitlement(
        position.deposited_amount,
        stake_pool.reward_rate_numerator,
        stake_pool.reward_rate_precision,
        periods,
    )?;
    let due = reward::claimable(
        entitlement,
        position.claimed_reward,
        stake_pool.total_reward_reserved,
    );
    require!(due > 0, StakingError::NoRewardDue);

    custody::vault_transfer(
        stake_pool,
        &ctx.accounts.reward_vault,
        &ctx.accounts.user_token_account,
        ctx.accounts.escrow_signers.as_ref(),
        &ctx.accounts.token_program,
        due,
    )?;

    let position = &mut ctx.accounts.user_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    position.claimed_reward = position
        .claimed_reward
        .checked_add(due)
        .ok_or(StakingError::MathOverflow)?;
    stake_pool.total_reward_reserved = stake_pool
        .total_reward_reserved
        .checked_sub(due)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Claimed {} reward tokens over {} periods", due, periods);
    msg!("Position claimed total: {}", position.claimed_reward);
    msg!("Pool reward reserve: {}", stake_pool.total_reward_reserved);

    Ok(())
}
