//! Instruction handlers for the staking factory program.
//!
//! This module contains all instruction implementations.

pub mod claim;
pub mod create_staking;
pub mod create_user_account;
pub mod deposit;
pub mod fund_reward;
pub mod initialize;
pub mod promote_stake;
pub mod withdraw;

pub use claim::*;
pub use create_staking::*;
pub use create_user_account::*;
pub use deposit::*;
pub use fund_reward::*;
pub use initialize::*;
pub use promote_stake::*;
pub use withdraw::*;
