pub mod join;
pub mod querier;
pub mod router;
pub mod staking;
