//! Withdraw instruction handler.
//!
//! Returns principal to the user once the lock window has elapsed. Pays
//! from the staked vault first and covers any remainder from the free
//! vault, so un-promoted deposits are withdrawable without a separate path.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody;
use crate::error::StakingError;
use crate::state::{StakePool, UserPosition};

/// Accounts required for a withdrawal.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The withdrawing user.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool being withdrawn from.
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

    /// The pool's staked vault.
    #[account(
        mut,
        constraint = staked_vault.key() == stake_pool.staked_vault @ StakingError::VaultMismatch
    )]
    pub staked_vault: Account<'info, TokenAccount>,

    /// The pool's free vault.
    #[account(
        mut,
        constraint = free_vault.key() == stake_pool.free_vault @ StakingError::VaultMismatch
    )]
    pub free_vault: Account<'info, TokenAccount>,

    /// The escrow multisig, required for escrow-policy pools.
    /// CHECK: Verified against `stake_pool.escrow_signers` in the custody
    /// helper before any transfer is signed.
    pub escrow_signers: Option<UncheckedAccount<'info>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw `amount` of principal.
pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let position = &ctx.accounts.user_position;
    let stake_pool = &ctx.accounts.stake_pool;
    let clock = Clock::get()?;

    require!(amount > 0, StakingError::ZeroAmount);
    require!(
        amount <= position.deposited_amount,
        StakingError::InsufficientStakedBalance
    );
    // The lock covers the whole position, free-vault portion included.
    require!(
        position.lock_expired(clock.unix_timestamp, stake_pool.lock_duration),
        StakingError::LockNotExpired
    );

    // Split the payout: staked vault first, remainder from the free vault.
    // Conservation (staked + free == total_staked) guarantees the remainder
    // is covered; if it ever were not, the token program aborts the
    // transaction for us.
    let from_staked = amount.min(ctx.accounts.staked_vault.amount);
    let from_free = amount
        .checked_sub(from_staked)
        .ok_or(StakingError::MathOverflow)?;

    if from_staked > 0 {
        custody::vault_transfer(
            stake_pool,
            &ctx.accounts.staked_vault,
            &ctx.accounts.user_token_account,
            ctx.accounts.escrow_signers.as_ref(),
            &ctx.accounts.token_program,
            from_staked,
        )?;
    }
    if from_free > 0 {
        custody::vault_transfer(
            stake_pool,
            &ctx.accounts.free_vault,
            &ctx.accounts.user_token_account,
            ctx.accounts.escrow_signers.as_ref(),
            &ctx.accounts.token_program,
            from_free,
        )?;
    }

    let position = &mut ctx.accounts.user_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    position.deposited_amount = position
        .deposited_amount
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;
    stake_pool.total_staked = stake_pool
        .total_staked
        .checked_sub(amount)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Withdrew {} tokens ({} staked, {} free)", amount, from_staked, from_free);
    msg!("Position remaining: {}", position.deposited_amount);
    msg!("Pool total staked: {}", stake_pool.total_staked);

    Ok(())
}
