pub mod contract;
pub mod error;
pub mod query;
pub mod staking;
pub mod state;
