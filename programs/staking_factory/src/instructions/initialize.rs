//! Initialize instruction handler.
//!
//! Creates the singleton factory registry.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::FactoryRegistry;

/// Accounts required to initialize the factory.
///
/// The registry PDA uses a fixed seed tag, so `init` doubles as the
/// first-use guard: a second initialize fails at allocation.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The factory authority. Pays for the registry and becomes a member of
    /// every escrow pool's quorum signer set.
    #[account(mut)]
    pub factory_creator: Signer<'info>,

    /// The registry record.
    #[account(
        init,
        payer = factory_creator,
        space = FactoryRegistry::LEN,
        seeds = [FACTORY_SEED],
        bump
    )]
    pub factory: Account<'info, FactoryRegistry>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the factory registry with the number of supported custody
/// policies.
pub fn handler(ctx: Context<Initialize>, policy_count: u8) -> Result<()> {
    require!(policy_count > 0, StakingError::ZeroPolicyCount);

    let factory = &mut ctx.accounts.factory;
    factory.authority = ctx.accounts.factory_creator.key();
    factory.policy_count = policy_count;
    factory.bump = ctx.bumps.factory;

    msg!("Factory registry initialized");
    msg!("Authority: {}", factory.authority);
    msg!("Policy count: {}", policy_count);

    Ok(())
}
