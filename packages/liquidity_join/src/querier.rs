use cosmwasm_std::{QuerierWrapper, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

use crate::staking::{QueryMsg as StakingQueryMsg, UserInfoResponse};

/// Returns a CW20 token balance for an account.
///
/// * **contract_addr** is the token contract.
///
/// * **account_addr** is the account whose balance is returned.
pub fn query_token_balance(
    querier: &QuerierWrapper,
    contract_addr: impl Into<String>,
    account_addr: impl Into<String>,
) -> StdResult<Uint128> {
    let resp: BalanceResponse = querier.query_wasm_smart(
        contract_addr,
        &Cw20QueryMsg::Balance {
            address: account_addr.into(),
        },
    )?;

    Ok(resp.balance)
}

/// Returns the staked position of `user` in pool `pid` of a staking contract.
pub fn query_user_info(
    querier: &QuerierWrapper,
    staking_contract: impl Into<String>,
    pid: u64,
    user: impl Into<String>,
) -> StdResult<UserInfoResponse> {
    querier.query_wasm_smart(
        staking_contract,
        &StakingQueryMsg::UserInfo {
            pid,
            user: user.into(),
        },
    )
}
