//! Fund-reward instruction handler.
//!
//! Permissionless: anyone can move tokens into a pool's reward vault to
//! back future claims. How the funder prices rewards is not this program's
//! concern; only the reserve accounting is.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakePool;

/// Accounts required to fund the reward vault.
#[derive(Accounts)]
pub struct FundReward<'info> {
    /// The funder (no restriction on who).
    #[account(mut)]
    pub funder: Signer<'info>,

    /// The pool whose reserve grows.
    #[account(
        mut,
        seeds = [STAKING_SEED, stake_pool.creator.as_ref(), stake_pool.mint.as_ref(), &[stake_pool.policy]],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The funder's source token account.
    #[account(
        mut,
        constraint = funder_token_account.mint == stake_pool.mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    /// The pool's reward vault.
    #[account(
        mut,
        constraint = reward_vault.key() == stake_pool.reward_vault @ StakingError::VaultMismatch
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundReward>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.reward_vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_pool = &mut ctx.accounts.stake_pool;
    stake_pool.total_reward_reserved = stake_pool
        .total_reward_reserved
        .checked_add(amount)
        .ok_or(StakingError::MathOverflow)?;

    msg!("Reward vault funded with {} tokens", amount);
    msg!("Pool reward reserve: {}", stake_pool.total_reward_reserved);
    msg!("Funder: {}", ctx.accounts.funder.key());

    Ok(())
}
