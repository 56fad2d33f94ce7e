#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, from_json, wasm_execute, Addr, DepsMut, Env, MessageInfo, Reply, Response, StdError,
    SubMsg, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::{Cw20ExecuteMsg, Expiration};
use cw_utils::{nonpayable, parse_reply_execute_data};

use liquidity_join::join::{ExecuteMsg, InstantiateMsg, MigrateMsg, StakingVersion};
use liquidity_join::querier::query_token_balance;
use liquidity_join::router::{AddLiquidityResponse, ExecuteMsg as RouterExecuteMsg};

use crate::error::{ContractError, TokenSide};
use crate::staking::StakingVersionExt;
use crate::state::{Config, JoinContext, CONFIG, JOIN_CONTEXT};

/// Contract name that is used for migration.
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// Contract version that is used for migration.
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ADD_LIQUIDITY_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token_a = deps.api.addr_validate(&msg.token_a)?;
    let token_b = deps.api.addr_validate(&msg.token_b)?;
    if token_a == token_b {
        return Err(ContractError::DoublingTokens {});
    }

    let staking_version = StakingVersion::from_v1_flag(msg.is_staking_v1);

    CONFIG.save(
        deps.storage,
        &Config {
            owner: info.sender,
            router: deps.api.addr_validate(&msg.router)?,
            token_a,
            token_b,
            staking_contract: deps.api.addr_validate(&msg.staking_contract)?,
            staking_version,
        },
    )?;

    Ok(Response::new().add_attributes([
        attr("action", "instantiate"),
        attr("contract", CONTRACT_NAME),
        attr("staking_version", staking_version.to_string()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::JoinLiquidity {
            amount_a,
            amount_b,
            pool_id,
        } => join_liquidity(deps, env, info, amount_a, amount_b, pool_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        ADD_LIQUIDITY_REPLY_ID => {
            let context = JOIN_CONTEXT.load(deps.storage)?;
            JOIN_CONTEXT.remove(deps.storage);

            let data = parse_reply_execute_data(msg)?
                .data
                .ok_or(ContractError::EmptyRouterResponse {})?;
            let provided: AddLiquidityResponse = from_json(data)?;

            stake_liquidity(deps, env, context, provided)
        }
        _ => Err(StdError::generic_err(format!("Unsupported reply id {}", msg.id)).into()),
    }
}

/// Validates the requested amounts against the contract custody, grants the router
/// allowances and dispatches `add_liquidity`. Staking happens in the reply.
///
/// Token A is not balance-checked here; a shortfall fails in the token contract when the
/// router pulls the funds.
fn join_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_a: Uint128,
    amount_b: Uint128,
    pool_id: Option<u64>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;

    if amount_a.is_zero() {
        return Err(ContractError::InvalidSupply(TokenSide::TokenA));
    }
    if amount_b.is_zero() {
        return Err(ContractError::InvalidSupply(TokenSide::TokenB));
    }

    let balance_b = query_token_balance(&deps.querier, &config.token_b, &env.contract.address)?;
    if balance_b < amount_b {
        return Err(ContractError::InsufficientBalance(TokenSide::TokenB));
    }

    let pool_id = config.staking_version.resolve_pool_id(pool_id)?;

    JOIN_CONTEXT.save(
        deps.storage,
        &JoinContext {
            pool_id,
            amount_a,
            amount_b,
        },
    )?;

    let allowances = [(&config.token_a, amount_a), (&config.token_b, amount_b)]
        .into_iter()
        .map(|(token, amount)| increase_allowance_msg(&env, token, &config.router, amount))
        .collect::<Result<Vec<_>, _>>()?;

    let add_liquidity_msg = wasm_execute(
        &config.router,
        &RouterExecuteMsg::AddLiquidity {
            token_a: config.token_a.to_string(),
            token_b: config.token_b.to_string(),
            amount_a_desired: amount_a,
            amount_b_desired: amount_b,
            amount_a_min: Uint128::zero(),
            amount_b_min: Uint128::zero(),
            to: env.contract.address.to_string(),
            deadline: env.block.time.seconds(),
        },
        vec![],
    )?;

    Ok(Response::new()
        .add_messages(allowances)
        .add_submessage(SubMsg::reply_on_success(
            add_liquidity_msg,
            ADD_LIQUIDITY_REPLY_ID,
        ))
        .add_attributes([
            attr("action", "join_liquidity"),
            attr("contract", CONTRACT_NAME),
            attr("sender", info.sender),
            attr("amount_a", amount_a),
            attr("amount_b", amount_b),
            attr("staking_version", config.staking_version.to_string()),
            attr("pool_id", pool_id.to_string()),
        ]))
}

/// Forwards every LP token minted by the router to the configured staking contract and
/// revokes the router allowance left over from the provision.
/// The position is credited to this contract's own address.
fn stake_liquidity(
    deps: DepsMut,
    env: Env,
    context: JoinContext,
    provided: AddLiquidityResponse,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let lp_allowance = increase_allowance_msg(
        &env,
        &provided.lp_token,
        &config.staking_contract,
        provided.liquidity,
    )?;
    let deposit_msg = config.staking_version.deposit_msg(
        &config.staking_contract,
        context.pool_id,
        provided.liquidity,
    )?;

    // Whatever the router did not consume stays in custody
    let retained_a = context.amount_a.saturating_sub(provided.amount_a);
    let retained_b = context.amount_b.saturating_sub(provided.amount_b);

    // cw20 re-arms an expired allowance on the next increase, so the unused part is revoked now
    let revoke_msgs = [(&config.token_a, retained_a), (&config.token_b, retained_b)]
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(token, amount)| {
            wasm_execute(
                token,
                &Cw20ExecuteMsg::DecreaseAllowance {
                    spender: config.router.to_string(),
                    amount,
                    expires: None,
                },
                vec![],
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Response::new()
        .add_messages(revoke_msgs)
        .add_message(lp_allowance)
        .add_message(deposit_msg)
        .add_attributes([
            attr("action", "stake_liquidity"),
            attr("lp_token", provided.lp_token),
            attr("lp_amount", provided.liquidity),
            attr("pool_id", context.pool_id.to_string()),
            attr("retained_a", retained_a),
            attr("retained_b", retained_b),
        ]))
}

/// The allowance expires with the current block. Any unused remainder is revoked in the reply.
fn increase_allowance_msg(
    env: &Env,
    token: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<WasmMsg, StdError> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount,
            expires: Some(Expiration::AtHeight(env.block.height + 1)),
        },
        vec![],
    )
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let contract_version = get_contract_version(deps.storage)?;

    if contract_version.contract != CONTRACT_NAME {
        return Err(ContractError::MigrationError {});
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default().add_attributes([
        ("previous_contract_name", contract_version.contract.as_str()),
        (
            "previous_contract_version",
            contract_version.version.as_str(),
        ),
        ("new_contract_name", CONTRACT_NAME),
        ("new_contract_version", CONTRACT_VERSION),
    ]))
}
