//! Factory registry account.

use anchor_lang::prelude::*;

/// Singleton registry for the deployment. Tracks who may act as the factory
/// authority and how many custody policies pools may be created with.
///
/// There is exactly one registry per deployment: its address is fully
/// determined by the fixed `FACTORY_SEED` tag, and a second `initialize`
/// fails at account allocation.
#[account]
pub struct FactoryRegistry {
    /// The signer that initialized the factory. Also a member of the escrow
    /// quorum for every shared-custody pool.
    pub authority: Pubkey,
    /// Number of custody policies this factory recognizes. Pool creation
    /// rejects any policy index at or above this count.
    pub policy_count: u8,
    /// PDA derivation bump.
    pub bump: u8,
}

impl FactoryRegistry {
    pub const LEN: usize = 8 + 32 + 1 + 1;
}
