use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// The only pool of a V1 staking contract
pub const V1_POOL_ID: u64 = 0;

/// Staking interface with a single implicit pool.
pub mod v1 {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        /// LP token accepted by pool 0
        pub lp_token: String,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Pulls `amount` LP tokens from the sender and credits them in pool 0
        Deposit { amount: Uint128 },
    }
}

/// Staking interface with explicitly addressed pools.
pub mod v2 {
    use super::*;

    #[cw_serde]
    pub struct InstantiateMsg {
        pub owner: String,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Adds a new pool. Pool ids are assigned sequentially starting from 0.
        Add { lp_token: String },
        /// Pulls `amount` LP tokens of pool `pid` from the sender and credits them
        Deposit { pid: u64, amount: Uint128 },
    }
}

/// Queries shared by both staking interfaces
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(UserInfoResponse)]
    UserInfo { pid: u64, user: String },
    #[returns(PoolInfoResponse)]
    PoolInfo { pid: u64 },
}

#[cw_serde]
#[derive(Default)]
pub struct UserInfoResponse {
    pub amount: Uint128,
    pub reward_debt: Uint128,
}

#[cw_serde]
pub struct PoolInfoResponse {
    pub lp_token: Addr,
    pub total_deposited: Uint128,
}
