#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, Env, StdError, StdResult};

use liquidity_join::join::{ConfigResponse, CustodyResponse, QueryMsg};
use liquidity_join::querier::{query_token_balance, query_user_info};

use crate::staking::StakingVersionExt;
use crate::state::CONFIG;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Custody {} => to_json_binary(&query_custody(deps, env)?),
        QueryMsg::Position { pool_id } => {
            let config = CONFIG.load(deps.storage)?;
            let pid = config
                .staking_version
                .resolve_pool_id(pool_id)
                .map_err(|err| StdError::generic_err(err.to_string()))?;

            to_json_binary(&query_user_info(
                &deps.querier,
                &config.staking_contract,
                pid,
                &env.contract.address,
            )?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;

    Ok(ConfigResponse {
        owner: config.owner,
        router: config.router,
        token_a: config.token_a,
        token_b: config.token_b,
        staking_contract: config.staking_contract,
        staking_version: config.staking_version,
    })
}

/// Balances held by the contract, including remainders left over by previous joins.
fn query_custody(deps: Deps, env: Env) -> StdResult<CustodyResponse> {
    let config = CONFIG.load(deps.storage)?;

    Ok(CustodyResponse {
        token_a: query_token_balance(&deps.querier, &config.token_a, &env.contract.address)?,
        token_b: query_token_balance(&deps.querier, &config.token_b, &env.contract.address)?,
    })
}
