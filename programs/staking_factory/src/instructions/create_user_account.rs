//! Create-user-account instruction handler.
//!
//! Allocates a zeroed position for (user, pool). No token movement.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{StakePool, UserPosition};

/// Accounts required to open a user position.
#[derive(Accounts)]
pub struct CreateUserAccount<'info> {
    /// The user opening the position. Pays for the record.
    #[account(mut)]
    pub user: Signer<'info>,

    /// The target pool. Must already exist; Anchor's owner and discriminator
    /// checks reject a missing or foreign account.
    #[account(
        seeds = [STAKING_SEED, stake_pool.creator.as_ref(), stake_pool.mint.as_ref(), &[stake_pool.policy]],
        bump = stake_pool.bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// The position record. One per (user, pool) by seed derivation.
    #[account(
        init,
        payer = user,
        space = UserPosition::LEN,
        seeds = [USER_SEED, user.key().as_ref(), stake_pool.key().as_ref()],
        bump
    )]
    pub user_position: Account<'info, UserPosition>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateUserAccount>) -> Result<()> {
    let position = &mut ctx.accounts.user_position;
    position.owner = ctx.accounts.user.key();
    position.pool = ctx.accounts.stake_pool.key();
    position.deposited_amount = 0;
    position.deposit_timestamp = 0;
    position.claimed_reward = 0;
    position.bump = ctx.bumps.user_position;

    msg!("User position opened");
    msg!("Owner: {}", position.owner);
    msg!("Pool: {}", position.pool);

    Ok(())
}
