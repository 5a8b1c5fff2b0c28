//! Error types for the staking factory program.
//!
//! ## Error Code Ranges
//! - 6000-6009: Input validation errors (rejected before any state mutation)
//! - 6010-6019: State/balance errors
//! - 6020-6029: Time/lock errors
//! - 6030-6039: Math/overflow errors
//! - 6040-6049: Authorization errors
//! - 6050-6059: Account validation errors

use anchor_lang::prelude::*;

/// Custom error codes, starting at Anchor's 6000 offset.
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors (6000-6009) ==========
    /// [6000] Cannot deposit, withdraw, or fund a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    /// [6001] Policy index is not below the registry's policy count.
    #[msg("Policy index exceeds the factory's registered policy count")]
    InvalidPolicy,

    /// [6002] Reward rate precision of zero would divide by zero at claim time.
    #[msg("Reward rate precision must be greater than zero")]
    ZeroRewardPrecision,

    /// [6003] Lock duration cannot be negative.
    #[msg("Lock duration must be non-negative")]
    NegativeLockDuration,

    /// [6004] Factory must recognize at least one custody policy.
    #[msg("Policy count must be greater than zero")]
    ZeroPolicyCount,

    // ========== State/Balance Errors (6010-6019) ==========
    /// [6010] Withdrawal exceeds the position's deposited amount.
    #[msg("Insufficient staked balance for this operation")]
    InsufficientStakedBalance,

    /// [6011] Entitlement is fully claimed or the reward reserve is empty.
    #[msg("No reward due for this position")]
    NoRewardDue,

    /// [6012] Free vault holds nothing to promote.
    #[msg("Free vault is empty, nothing to promote")]
    NothingToPromote,

    // ========== Time/Lock Errors (6020-6029) ==========
    /// [6020] The lock window has not yet elapsed.
    #[msg("Lock period has not expired - cannot withdraw yet")]
    LockNotExpired,

    // ========== Math/Overflow Errors (6030-6039) ==========
    /// [6030] Checked arithmetic overflowed.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors (6040-6049) ==========
    /// [6040] Signer does not own the position.
    #[msg("Unauthorized: signer does not match position owner")]
    Unauthorized,

    // ========== Account Validation Errors (6050-6059) ==========
    /// [6050] Token account is for a different mint than the pool's.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6051] Supplied vault does not match the pool's recorded vault.
    #[msg("Vault address does not match the pool record")]
    VaultMismatch,

    /// [6052] Position references a different pool than the one supplied.
    #[msg("User position does not belong to this pool")]
    PositionPoolMismatch,

    /// [6053] Escrow multisig account does not match the pool's signer set.
    #[msg("Escrow signer set does not match the pool record")]
    EscrowSignersMismatch,

    /// [6054] Vault authority does not match the pool's custody policy.
    #[msg("Vault authority does not match the custody policy")]
    InvalidVaultAuthority,
}
