//! Policy-aware vault transfers.
//!
//! Every token movement out of a pool vault funnels through here, so the
//! custody trust model stays in one place:
//!
//! - **Direct**: the vault authority is the pool PDA and the program signs
//!   with the pool seeds.
//! - **Escrow**: the vault authority is an SPL-token multisig (threshold 1
//!   over creator, factory, pool). The program authorizes the transfer as a
//!   quorum member by signing for the pool PDA.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_spl::token::{self, spl_token, Token, TokenAccount, Transfer};

use crate::constants::STAKING_SEED;
use crate::error::StakingError;
use crate::state::{CustodyPolicy, StakePool};

/// Transfer `amount` out of one of `pool`'s vaults under the pool's custody
/// policy. `escrow_signers` is required for Escrow pools and ignored for
/// Direct pools.
pub fn vault_transfer<'info>(
    pool: &Account<'info, StakePool>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    escrow_signers: Option<&UncheckedAccount<'info>>,
    token_program: &Program<'info, Token>,
    amount: u64,
) -> Result<()> {
    let creator = pool.creator;
    let mint = pool.mint;
    let seeds = &[
        STAKING_SEED,
        creator.as_ref(),
        mint.as_ref(),
        &[pool.policy],
        &[pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    match pool.custody_policy() {
        CustodyPolicy::Direct => {
            let cpi_accounts = Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: pool.to_account_info(),
            };
            let cpi_ctx = CpiContext::new_with_signer(
                token_program.to_account_info(),
                cpi_accounts,
                signer_seeds,
            );
            token::transfer(cpi_ctx, amount)
        }
        CustodyPolicy::Escrow => {
            let escrow = escrow_signers.ok_or(StakingError::EscrowSignersMismatch)?;
            require_keys_eq!(
                escrow.key(),
                pool.escrow_signers,
                StakingError::EscrowSignersMismatch
            );

            // Multisig-authorized transfer: the pool PDA is the single
            // quorum signature, provided via invoke_signed.
            let pool_key = pool.key();
            #[allow(deprecated)]
            let ix = spl_token::instruction::transfer(
                token_program.key,
                &from.key(),
                &to.key(),
                &escrow.key(),
                &[&pool_key],
                amount,
            )?;
            invoke_signed(
                &ix,
                &[
                    from.to_account_info(),
                    to.to_account_info(),
                    escrow.to_account_info(),
                    pool.to_account_info(),
                ],
                signer_seeds,
            )?;
            Ok(())
        }
    }
}
