//! Create-staking instruction handler.
//!
//! Creates one pool per (creator, mint, policy) triple together with its
//! three purpose-segregated vaults, and wires vault authority according to
//! the chosen custody policy.
//!
//! ## Security Guarantees
//! - Pool and vault PDAs embed the triple, so a duplicate triple fails at
//!   allocation.
//! - The creator must sign: pool identity is bound to its creator key.
//! - The custody policy is validated against the registry once, here, and
//!   the resulting vault authority model is never migrated.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::token::{
    self, spl_token, spl_token::instruction::AuthorityType, Mint, Token, TokenAccount,
};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{CustodyPolicy, FactoryRegistry, StakePool};

/// Accounts required to create a staking pool.
#[derive(Accounts)]
#[instruction(policy: u8)]
pub struct CreateStaking<'info> {
    /// The pool creator. Part of every PDA seed tuple below.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The factory registry; its policy count bounds the policy index.
    #[account(
        seeds = [FACTORY_SEED],
        bump = factory.bump
    )]
    pub factory: Account<'info, FactoryRegistry>,

    /// The mint staked into this pool. Locked into pool state permanently.
    pub staking_mint: Account<'info, Mint>,

    /// The pool record.
    #[account(
        init,
        payer = creator,
        space = StakePool::LEN,
        seeds = [STAKING_SEED, creator.key().as_ref(), staking_mint.key().as_ref(), &[policy]],
        bump
    )]
    pub stake_pool: Account<'info, StakePool>,

    /// Vault for deposits awaiting promotion. Initialized with the pool PDA
    /// as authority; re-assigned to the escrow multisig for escrow pools.
    #[account(
        init,
        payer = creator,
        seeds = [FREE_VAULT_SEED, creator.key().as_ref(), staking_mint.key().as_ref(), &[policy]],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub free_vault: Account<'info, TokenAccount>,

    /// Vault for locked principal.
    #[account(
        init,
        payer = creator,
        seeds = [STAKED_VAULT_SEED, creator.key().as_ref(), staking_mint.key().as_ref(), &[policy]],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub staked_vault: Account<'info, TokenAccount>,

    /// Vault rewards are paid from.
    #[account(
        init,
        payer = creator,
        seeds = [REWARD_VAULT_SEED, creator.key().as_ref(), staking_mint.key().as_ref(), &[policy]],
        bump,
        token::mint = staking_mint,
        token::authority = stake_pool
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    /// The SPL-token multisig created for escrow pools. Required when
    /// `policy >= 1`, ignored for Direct pools.
    /// CHECK: Address is verified against the escrow-signers PDA derivation
    /// in the handler; the account is created and initialized there.
    #[account(mut)]
    pub escrow_signers: Option<UncheckedAccount<'info>>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for vault and multisig operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar, needed by the multisig initialization.
    pub rent: Sysvar<'info, Rent>,
}

/// Create a staking pool for (creator, mint, policy).
///
/// # Arguments
/// * `policy` - Custody policy index, must be below the registry's count
/// * `lock_duration` - Lock window in seconds, also the reward period
/// * `reward_rate_numerator` / `reward_rate_precision` - reward per period
///   is deposited * numerator / precision; precision must be non-zero
pub fn handler(
    ctx: Context<CreateStaking>,
    policy: u8,
    lock_duration: i64,
    reward_rate_numerator: u64,
    reward_rate_precision: u64,
) -> Result<()> {
    // === INPUT VALIDATION (before any state is written) ===
    require!(lock_duration >= 0, StakingError::NegativeLockDuration);
    require!(reward_rate_precision > 0, StakingError::ZeroRewardPrecision);
    let custody = CustodyPolicy::from_index(policy, ctx.accounts.factory.policy_count)?;

    // Anchor's token::authority constraint already guarantees this; explicit
    // re-check before authority is potentially handed to the multisig.
    for vault in [
        &ctx.accounts.free_vault,
        &ctx.accounts.staked_vault,
        &ctx.accounts.reward_vault,
    ] {
        require!(
            vault.owner == ctx.accounts.stake_pool.key(),
            StakingError::InvalidVaultAuthority
        );
    }

    let escrow_signers = match custody {
        CustodyPolicy::Direct => Pubkey::default(),
        CustodyPolicy::Escrow => setup_escrow_quorum(&ctx, policy)?,
    };

    // === STATE INITIALIZATION ===
    let stake_pool = &mut ctx.accounts.stake_pool;
    stake_pool.creator = ctx.accounts.creator.key();
    stake_pool.mint = ctx.accounts.staking_mint.key();
    stake_pool.policy = policy;
    stake_pool.lock_duration = lock_duration;
    stake_pool.reward_rate_numerator = reward_rate_numerator;
    stake_pool.reward_rate_precision = reward_rate_precision;
    stake_pool.total_staked = 0;
    stake_pool.total_reward_reserved = 0;
    stake_pool.free_vault = ctx.accounts.free_vault.key();
    stake_pool.staked_vault = ctx.accounts.staked_vault.key();
    stake_pool.reward_vault = ctx.accounts.reward_vault.key();
    stake_pool.escrow_signers = escrow_signers;
    stake_pool.bump = ctx.bumps.stake_pool;
    stake_pool.free_vault_bump = ctx.bumps.free_vault;
    stake_pool.staked_vault_bump = ctx.bumps.staked_vault;
    stake_pool.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("Stake pool created: policy {} ({:?})", policy, custody);
    msg!("Creator: {}", stake_pool.creator);
    msg!("Mint: {}", stake_pool.mint);
    msg!(
        "Lock: {}s, rate: {}/{}",
        lock_duration,
        reward_rate_numerator,
        reward_rate_precision
    );

    Ok(())
}

/// Create the escrow multisig and hand vault authority to it.
///
/// The multisig is an SPL-token multisig PDA with threshold 1 over
/// {creator, factory registry, pool PDA}: any single member, including the
/// program signing for the pool PDA, can authorize a vault transfer.
fn setup_escrow_quorum(ctx: &Context<CreateStaking>, policy: u8) -> Result<Pubkey> {
    let escrow = ctx
        .accounts
        .escrow_signers
        .as_ref()
        .ok_or(StakingError::EscrowSignersMismatch)?;

    let creator_key = ctx.accounts.creator.key();
    let mint_key = ctx.accounts.staking_mint.key();
    let (expected, escrow_bump) = Pubkey::find_program_address(
        &[
            ESCROW_SIGNERS_SEED,
            creator_key.as_ref(),
            mint_key.as_ref(),
            &[policy],
        ],
        ctx.program_id,
    );
    require_keys_eq!(escrow.key(), expected, StakingError::EscrowSignersMismatch);

    // Allocate the multisig account, owned by the token program.
    let multisig_len = spl_token::state::Multisig::LEN;
    let lamports = Rent::get()?.minimum_balance(multisig_len);
    let escrow_seeds = &[
        ESCROW_SIGNERS_SEED,
        creator_key.as_ref(),
        mint_key.as_ref(),
        &[policy],
        &[escrow_bump],
    ];
    create_account(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.creator.to_account_info(),
                to: escrow.to_account_info(),
            },
            &[&escrow_seeds[..]],
        ),
        lamports,
        multisig_len as u64,
        ctx.accounts.token_program.key,
    )?;

    // Initialize the quorum signer set.
    let factory_key = ctx.accounts.factory.key();
    let pool_key = ctx.accounts.stake_pool.key();
    let members: [&Pubkey; ESCROW_QUORUM_SIZE] = [&creator_key, &factory_key, &pool_key];
    let ix = spl_token::instruction::initialize_multisig(
        ctx.accounts.token_program.key,
        &escrow.key(),
        &members,
        ESCROW_QUORUM_THRESHOLD,
    )?;
    invoke(
        &ix,
        &[
            escrow.to_account_info(),
            ctx.accounts.rent.to_account_info(),
            ctx.accounts.creator.to_account_info(),
            ctx.accounts.factory.to_account_info(),
            ctx.accounts.stake_pool.to_account_info(),
        ],
    )?;

    // Move each vault's authority from the pool PDA to the multisig, signed
    // by the pool PDA while it is still the authority.
    let pool_seeds = &[
        STAKING_SEED,
        creator_key.as_ref(),
        mint_key.as_ref(),
        &[policy],
        &[ctx.bumps.stake_pool],
    ];
    let pool_signer = &[&pool_seeds[..]];
    for vault in [
        &ctx.accounts.free_vault,
        &ctx.accounts.staked_vault,
        &ctx.accounts.reward_vault,
    ] {
        token::set_authority(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                token::SetAuthority {
                    current_authority: ctx.accounts.stake_pool.to_account_info(),
                    account_or_mint: vault.to_account_info(),
                },
                pool_signer,
            ),
            AuthorityType::AccountOwner,
            Some(escrow.key()),
        )?;
    }

    msg!("Escrow quorum created: {}", escrow.key());
    Ok(escrow.key())
}
