//! Minimal MasterChef style staking contracts. Deposits are tracked per (pool, depositor);
//! rewards are not accrued.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    attr, to_json_binary, wasm_execute, Addr, Binary, Deps, Env, MessageInfo, Response, StdError,
    StdResult, Storage, Uint128,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Map;

use liquidity_join::staking::{PoolInfoResponse, QueryMsg, UserInfoResponse};

use crate::error::StakingError;

#[cw_serde]
pub struct PoolState {
    pub lp_token: Addr,
    pub total_deposited: Uint128,
}

/// Pools by id
pub const POOLS: Map<u64, PoolState> = Map::new("pools");
/// Deposited LP amount by (pool id, depositor)
pub const USER_INFO: Map<(u64, &Addr), Uint128> = Map::new("user_info");

/// Pulls `amount` LP tokens of pool `pid` from the depositor and credits them.
fn deposit(
    storage: &mut dyn Storage,
    env: &Env,
    info: &MessageInfo,
    pid: u64,
    amount: Uint128,
) -> Result<Response, StakingError> {
    let mut pool = POOLS
        .may_load(storage, pid)?
        .ok_or(StakingError::PoolNotFound(pid))?;

    pool.total_deposited = pool.total_deposited.checked_add(amount)?;
    POOLS.save(storage, pid, &pool)?;
    USER_INFO.update(storage, (pid, &info.sender), |deposited| -> StdResult<_> {
        Ok(deposited.unwrap_or_default().checked_add(amount)?)
    })?;

    let mut response = Response::new().add_attributes([
        attr("action", "deposit"),
        attr("user", &info.sender),
        attr("pid", pid.to_string()),
        attr("amount", amount),
    ]);

    // Zero deposits are accepted as no-ops
    if !amount.is_zero() {
        response = response.add_message(wasm_execute(
            &pool.lp_token,
            &Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            },
            vec![],
        )?);
    }

    Ok(response)
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::UserInfo { pid, user } => {
            let user = deps.api.addr_validate(&user)?;
            let amount = USER_INFO
                .may_load(deps.storage, (pid, &user))?
                .unwrap_or_default();

            to_json_binary(&UserInfoResponse {
                amount,
                reward_debt: Uint128::zero(),
            })
        }
        QueryMsg::PoolInfo { pid } => {
            let pool = POOLS
                .may_load(deps.storage, pid)?
                .ok_or_else(|| StdError::generic_err(format!("Pool {pid} does not exist")))?;

            to_json_binary(&PoolInfoResponse {
                lp_token: pool.lp_token,
                total_deposited: pool.total_deposited,
            })
        }
    }
}

/// Single pool interface: `deposit { amount }` always targets pool 0.
pub mod v1 {
    use cosmwasm_std::DepsMut;

    use liquidity_join::staking::v1::{ExecuteMsg, InstantiateMsg};
    use liquidity_join::staking::V1_POOL_ID;

    use super::*;

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, StakingError> {
        POOLS.save(
            deps.storage,
            V1_POOL_ID,
            &PoolState {
                lp_token: deps.api.addr_validate(&msg.lp_token)?,
                total_deposited: Uint128::zero(),
            },
        )?;

        Ok(Response::new().add_attribute("action", "instantiate"))
    }

    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, StakingError> {
        match msg {
            ExecuteMsg::Deposit { amount } => {
                deposit(deps.storage, &env, &info, V1_POOL_ID, amount)
            }
        }
    }
}

/// Multi pool interface: pools are added by the owner and addressed by id.
pub mod v2 {
    use cosmwasm_std::DepsMut;
    use cw_storage_plus::Item;

    use liquidity_join::staking::v2::{ExecuteMsg, InstantiateMsg};

    use super::*;

    pub const OWNER: Item<Addr> = Item::new("owner");
    pub const POOL_COUNT: Item<u64> = Item::new("pool_count");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, StakingError> {
        OWNER.save(deps.storage, &deps.api.addr_validate(&msg.owner)?)?;
        POOL_COUNT.save(deps.storage, &0)?;

        Ok(Response::new().add_attribute("action", "instantiate"))
    }

    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, StakingError> {
        match msg {
            ExecuteMsg::Add { lp_token } => {
                if info.sender != OWNER.load(deps.storage)? {
                    return Err(StakingError::Unauthorized {});
                }

                let pid = POOL_COUNT.load(deps.storage)?;
                POOLS.save(
                    deps.storage,
                    pid,
                    &PoolState {
                        lp_token: deps.api.addr_validate(&lp_token)?,
                        total_deposited: Uint128::zero(),
                    },
                )?;
                POOL_COUNT.save(deps.storage, &(pid + 1))?;

                Ok(Response::new().add_attributes([
                    attr("action", "add_pool"),
                    attr("pid", pid.to_string()),
                    attr("lp_token", lp_token),
                ]))
            }
            ExecuteMsg::Deposit { pid, amount } => deposit(deps.storage, &env, &info, pid, amount),
        }
    }
}
