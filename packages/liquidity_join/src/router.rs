use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// LP tokens permanently locked by the router on the first provision of a pair
pub const MINIMUM_LIQUIDITY_AMOUNT: Uint128 = Uint128::new(1_000);

#[cw_serde]
pub struct InstantiateMsg {}

/// Constant product router interface.
#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a pair. The router must be the minter of `lp_token`.
    CreatePair {
        token_a: String,
        token_b: String,
        lp_token: String,
    },
    /// Pulls the optimal amounts of both tokens from the sender via `transfer_from`
    /// and mints LP tokens to `to`. Sets [`AddLiquidityResponse`] as response data.
    AddLiquidity {
        token_a: String,
        token_b: String,
        amount_a_desired: Uint128,
        amount_b_desired: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: String,
        /// Unix timestamp in seconds after which the call is rejected
        deadline: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Reserves are returned in the order of the given tokens
    #[returns(PairResponse)]
    Pair { token_a: String, token_b: String },
}

#[cw_serde]
pub struct PairResponse {
    pub lp_token: Addr,
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
    pub total_supply: Uint128,
}

/// Response data of [`ExecuteMsg::AddLiquidity`]
#[cw_serde]
pub struct AddLiquidityResponse {
    /// Amount of token A actually pulled into the pool
    pub amount_a: Uint128,
    /// Amount of token B actually pulled into the pool
    pub amount_b: Uint128,
    /// LP tokens minted to the recipient
    pub liquidity: Uint128,
    pub lp_token: Addr,
}
