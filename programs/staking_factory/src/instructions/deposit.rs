//! Deposit instruction handler.
//!
//! Moves tokens from the user into the pool's free vault. Deposits sit in
//! the free vault until the promote crank moves them to the staked vault;
//! accepting a deposit is decoupled from lock-period bookkeeping.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{StakePool, UserPosition};

/// Accounts required for a deposit.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The depositing user.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The pool being deposited into.
    #[account(
        mut,
        seeds = [STAKING_SEED, stake_pool.creator.as_ref(), stake_pool.mint.as_ref(), &[stake_pool.policy]],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The user's position. The pool cross-check prevents a position from
    /// one pool being replayed against another.
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref(), stake_pool.key().as_ref()],
        bump = user_position.bump,
        constraint = user_position.owner == user.key() @ StakingError::Unauthorized,
        constraint = user_position.pool == stake_pool.key() @ StakingError::PositionPoolMismatch
    )]
    pub user_position: Account<'info, UserPosition>,

    /// The user's source token account for the pool's mint.
    #[account(
        mut,
        constraint = user_token_account.mint == stake_pool.mint @ StakingError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// The pool's free vault.
    #[account(
        mut,
        constraint = free_vault.key() == stake_pool.free_vault @ StakingError::VaultMismatch
    )]
    pub free_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit `amount` into the pool.
///
/// Every deposit resets the position's lock window (reset-on-deposit): the
/// timestamp restarts both the lock and the reward-period clock for the
/// whole position. No reward is computed or paid here.
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let clock = Clock::get()?;

    // Transfer user -> free vault. The token program surfaces insufficient
    // funds; on failure nothing below executes.
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.free_vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let position = &mut ctx.accounts.user_position;
    let stake_pool = &mut ctx.accounts.stake_pool;

    position.deposited_amount = position
        .deposited_amount
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;
    // New lock window: restart the clock and rebase the reward watermark
    // with it. The watermark counts reward paid out of the current window,
    // so carrying it across the reset would charge old claims against the
    // fresh window's accrual.
    position.deposit_timestamp = clock.unix_timestamp;
    position.claimed_reward = 0;

    stake_pool.total_staked = stake_pool
        .total_staked
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Deposited {} tokens", amount);
    msg!("Position total: {}", position.deposited_amount);
    msg!("Pool total staked: {}", stake_pool.total_staked);

    Ok(())
}
