use std::fmt::{Display, Formatter, Result as FmtResult};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::staking::UserInfoResponse;

/// This structure describes the parameters used for creating a liquidity join contract.
#[cw_serde]
pub struct InstantiateMsg {
    /// The AMM router that mints LP tokens for the pair
    pub router: String,
    /// The first token of the pair
    pub token_a: String,
    /// The second token of the pair
    pub token_b: String,
    /// The staking contract that receives the LP tokens
    pub staking_contract: String,
    /// Whether the staking contract exposes the V1 interface (single implicit pool).
    /// Otherwise the V2 interface with explicit pool ids is used.
    pub is_staking_v1: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Converts `amount_a` of token A and `amount_b` of token B already held by the contract
    /// into an LP position and stakes the minted LP tokens.
    /// `pool_id` is required by the V2 staking interface and ignored by V1.
    JoinLiquidity {
        amount_a: Uint128,
        amount_b: Uint128,
        pool_id: Option<u64>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the immutable contract configuration
    #[returns(ConfigResponse)]
    Config {},
    /// Returns the token A and token B balances currently held by the contract
    #[returns(CustodyResponse)]
    Custody {},
    /// Returns the contract's own position in the staking contract
    #[returns(UserInfoResponse)]
    Position { pool_id: Option<u64> },
}

/// Staking contract interface selected once at instantiation.
#[cw_serde]
#[derive(Copy)]
pub enum StakingVersion {
    /// `deposit { amount }` into the single implicit pool 0
    V1,
    /// `deposit { pid, amount }` into an explicitly chosen pool
    V2,
}

impl StakingVersion {
    pub fn from_v1_flag(is_staking_v1: bool) -> Self {
        if is_staking_v1 {
            StakingVersion::V1
        } else {
            StakingVersion::V2
        }
    }
}

impl Display for StakingVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StakingVersion::V1 => f.write_str("v1"),
            StakingVersion::V2 => f.write_str("v2"),
        }
    }
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub router: Addr,
    pub token_a: Addr,
    pub token_b: Addr,
    pub staking_contract: Addr,
    pub staking_version: StakingVersion,
}

#[cw_serde]
pub struct CustodyResponse {
    pub token_a: Uint128,
    pub token_b: Uint128,
}

/// This structure describes a migration message.
/// We currently take no arguments for migrations.
#[cw_serde]
pub struct MigrateMsg {}
