//! Program constants for the staking factory.
//!
//! The seed tags below are part of the public wire contract: clients derive
//! every program account from them, so they must remain stable across versions.

/// Seed for the singleton factory registry PDA
pub const FACTORY_SEED: &[u8] = b"factory_creator";

/// Seed for deriving stake pool PDAs (tag, creator, mint, policy byte)
pub const STAKING_SEED: &[u8] = b"staking";

/// Seed for the vault holding deposits awaiting promotion
pub const FREE_VAULT_SEED: &[u8] = b"free_tokens";

/// Seed for the vault holding locked principal
pub const STAKED_VAULT_SEED: &[u8] = b"staked_tokens";

/// Seed for the vault holding claimable rewards
pub const REWARD_VAULT_SEED: &[u8] = b"reward_tokens";

/// Seed for deriving user position PDAs (tag, user, pool)
pub const USER_SEED: &[u8] = b"user";

/// Seed for the escrow multisig PDA that holds vault authority under
/// shared-custody policies
pub const ESCROW_SIGNERS_SEED: &[u8] = b"escrow_signers";

/// Signatures required to move funds out of an escrow-policy vault.
/// Threshold 1 means any single quorum member (creator, factory, or the
/// pool PDA itself) can authorize a transfer.
pub const ESCROW_QUORUM_THRESHOLD: u8 = 1;

/// Members of the escrow quorum signer set
pub const ESCROW_QUORUM_SIZE: usize = 3;
