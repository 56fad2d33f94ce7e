use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use liquidity_join::join::StakingVersion;

/// This structure stores the pair configuration. It is written once at instantiation.
#[cw_serde]
pub struct Config {
    /// The account that instantiated the contract
    pub owner: Addr,
    pub router: Addr,
    pub token_a: Addr,
    pub token_b: Addr,
    pub staking_contract: Addr,
    pub staking_version: StakingVersion,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Parameters of a join that is waiting for the router reply
#[cw_serde]
pub struct JoinContext {
    /// Resolved staking pool (always 0 for V1)
    pub pool_id: u64,
    pub amount_a: Uint128,
    pub amount_b: Uint128,
}

/// Lives only between the router sub-message and its reply
pub const JOIN_CONTEXT: Item<JoinContext> = Item::new("join_context");
