//! State structures for the staking factory program.
//!
//! This module defines all account structures used to store program state.

pub mod factory;
pub mod stake_pool;
pub mod user_position;

pub use factory::*;
pub use stake_pool::*;
pub use user_position::*;
