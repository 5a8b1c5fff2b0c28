//! Promote-stake instruction handler.
//!
//! Permissionless crank that moves accepted deposits from the free vault
//! into the staked vault. Record fields do not change: promotion is custody
//! bookkeeping only, and free + staked always equals the pool's
//! total_staked.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody;
use crate::error::StakingError;
use crate::state::StakePool;

/// Accounts required to promote free deposits.
#[derive(Accounts)]
pub struct PromoteStake<'info> {
    /// Whoever turns the crank.
    pub cranker: Signer<'info>,

    /// The pool whose deposits are promoted.
    #[account(
        seeds = [STAKING_SEED, stake_pool.creator.as_ref(), stake_pool.mint.as_ref(), &[stake_pool.policy]],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The pool's free vault.
    #[account(
        mut,
        constraint = free_vault.key() == stake_pool.free_vault @ StakingError::VaultMismatch
    )]
    pub free_vault: Account<'info, TokenAccount>,

    /// The pool's staked vault.
    #[account(
        mut,
        constraint = staked_vault.key() == stake_pool.staked_vault @ StakingError::VaultMismatch
    )]
    pub staked_vault: Account<'info, TokenAccount>,

    /// The escrow multisig, required for escrow-policy pools.
    /// CHECK: Verified against `stake_pool.escrow_signers` in the custody
    /// helper before any transfer is signed.
    pub escrow_signers: Option<UncheckedAccount<'info>>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<PromoteStake>) -> Result<()> {
    let amount = ctx.accounts.free_vault.amount;
    require!(amount > 0, StakingError::NothingToPromote);

    custody::vault_transfer(
        &ctx.accounts.stake_pool,
        &ctx.accounts.free_vault,
        &ctx.accounts.staked_vault,
        ctx.accounts.escrow_signers.as_ref(),
        &ctx.accounts.token_program,
        amount,
    )?;

    msg!("Promoted {} tokens to the staked vault", amount);

    Ok(())
}
