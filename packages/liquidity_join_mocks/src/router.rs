//! Constant product router with Uniswap V2 `add_liquidity` semantics.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    attr, to_json_binary, wasm_execute, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw20::Cw20ExecuteMsg;
use cw_storage_plus::Map;
use integer_sqrt::IntegerSquareRoot;

use liquidity_join::router::{
    AddLiquidityResponse, ExecuteMsg, InstantiateMsg, PairResponse, QueryMsg,
    MINIMUM_LIQUIDITY_AMOUNT,
};

use crate::error::RouterError;

#[cw_serde]
pub struct PairState {
    pub token_0: Addr,
    pub token_1: Addr,
    pub lp_token: Addr,
    pub reserve_0: Uint128,
    pub reserve_1: Uint128,
    pub total_supply: Uint128,
}

impl PairState {
    /// Reserves ordered as (`token`, other token)
    fn reserves_for(&self, token: &Addr) -> (Uint128, Uint128) {
        if *token == self.token_0 {
            (self.reserve_0, self.reserve_1)
        } else {
            (self.reserve_1, self.reserve_0)
        }
    }

    fn add_reserves(&mut self, token: &Addr, amount: Uint128, other: Uint128) -> StdResult<()> {
        let (amount_0, amount_1) = if *token == self.token_0 {
            (amount, other)
        } else {
            (other, amount)
        };
        self.reserve_0 = self.reserve_0.checked_add(amount_0)?;
        self.reserve_1 = self.reserve_1.checked_add(amount_1)?;
        Ok(())
    }
}

/// Pairs keyed by their tokens in ascending order
pub const PAIRS: Map<(&Addr, &Addr), PairState> = Map::new("pairs");

fn pair_key<'a>(token_a: &'a Addr, token_b: &'a Addr) -> (&'a Addr, &'a Addr) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, RouterError> {
    Ok(Response::new().add_attribute("action", "instantiate"))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, RouterError> {
    match msg {
        ExecuteMsg::CreatePair {
            token_a,
            token_b,
            lp_token,
        } => create_pair(deps, token_a, token_b, lp_token),
        ExecuteMsg::AddLiquidity {
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        } => {
            if env.block.time.seconds() > deadline {
                return Err(RouterError::Expired {});
            }

            let token_a = deps.api.addr_validate(&token_a)?;
            let token_b = deps.api.addr_validate(&token_b)?;
            let to = deps.api.addr_validate(&to)?;

            add_liquidity(
                deps,
                env,
                info,
                (token_a, token_b),
                (amount_a_desired, amount_b_desired),
                (amount_a_min, amount_b_min),
                to,
            )
        }
    }
}

fn create_pair(
    deps: DepsMut,
    token_a: String,
    token_b: String,
    lp_token: String,
) -> Result<Response, RouterError> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    if token_a == token_b {
        return Err(RouterError::IdenticalTokens {});
    }

    let (token_0, token_1) = pair_key(&token_a, &token_b);
    if PAIRS.has(deps.storage, (token_0, token_1)) {
        return Err(RouterError::PairExists {});
    }

    let pair = PairState {
        token_0: token_0.clone(),
        token_1: token_1.clone(),
        lp_token: deps.api.addr_validate(&lp_token)?,
        reserve_0: Uint128::zero(),
        reserve_1: Uint128::zero(),
        total_supply: Uint128::zero(),
    };
    PAIRS.save(deps.storage, (token_0, token_1), &pair)?;

    Ok(Response::new().add_attributes([
        attr("action", "create_pair"),
        attr("token_0", token_0),
        attr("token_1", token_1),
        attr("lp_token", pair.lp_token),
    ]))
}

/// Equivalent amount of the other token at the current pool price
pub fn quote(
    amount: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, RouterError> {
    if amount.is_zero() {
        return Err(RouterError::InsufficientAmount {});
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(RouterError::InsufficientLiquidity {});
    }

    amount
        .checked_multiply_ratio(reserve_out, reserve_in)
        .map_err(|err| StdError::generic_err(err.to_string()).into())
}

/// Picks the largest deposit that keeps the pool price, never exceeding the desired amounts.
pub fn optimal_amounts(
    (reserve_a, reserve_b): (Uint128, Uint128),
    (desired_a, desired_b): (Uint128, Uint128),
    (min_a, min_b): (Uint128, Uint128),
) -> Result<(Uint128, Uint128), RouterError> {
    if reserve_a.is_zero() && reserve_b.is_zero() {
        return Ok((desired_a, desired_b));
    }

    let optimal_b = quote(desired_a, reserve_a, reserve_b)?;
    if optimal_b <= desired_b {
        if optimal_b < min_b {
            return Err(RouterError::InsufficientBAmount {});
        }
        return Ok((desired_a, optimal_b));
    }

    let optimal_a = quote(desired_b, reserve_b, reserve_a)?;
    if optimal_a < min_a {
        return Err(RouterError::InsufficientAAmount {});
    }
    Ok((optimal_a, desired_b))
}

fn add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    (token_a, token_b): (Addr, Addr),
    desired: (Uint128, Uint128),
    min: (Uint128, Uint128),
    to: Addr,
) -> Result<Response, RouterError> {
    let key = pair_key(&token_a, &token_b);
    let mut pair = PAIRS
        .may_load(deps.storage, key)?
        .ok_or(RouterError::PairNotFound {})?;

    let (reserve_a, reserve_b) = pair.reserves_for(&token_a);
    let (amount_a, amount_b) = optimal_amounts((reserve_a, reserve_b), desired, min)?;

    let mut messages = vec![];
    for (token, amount) in [(&token_a, amount_a), (&token_b, amount_b)] {
        messages.push(wasm_execute(
            token,
            &Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount,
            },
            vec![],
        )?);
    }

    let liquidity = if pair.total_supply.is_zero() {
        let share = Uint128::new(amount_a.checked_mul(amount_b)?.u128().integer_sqrt())
            .checked_sub(MINIMUM_LIQUIDITY_AMOUNT)
            .map_err(|_| RouterError::InsufficientLiquidityMinted {})?;

        // Minimum liquidity stays with the router
        messages.push(mint_msg(&pair.lp_token, &env.contract.address, MINIMUM_LIQUIDITY_AMOUNT)?);
        pair.total_supply = MINIMUM_LIQUIDITY_AMOUNT;

        share
    } else {
        std::cmp::min(
            amount_a.multiply_ratio(pair.total_supply, reserve_a),
            amount_b.multiply_ratio(pair.total_supply, reserve_b),
        )
    };

    if liquidity.is_zero() {
        return Err(RouterError::InsufficientLiquidityMinted {});
    }

    messages.push(mint_msg(&pair.lp_token, &to, liquidity)?);

    pair.add_reserves(&token_a, amount_a, amount_b)?;
    pair.total_supply = pair.total_supply.checked_add(liquidity)?;
    PAIRS.save(deps.storage, key, &pair)?;

    let response = AddLiquidityResponse {
        amount_a,
        amount_b,
        liquidity,
        lp_token: pair.lp_token,
    };

    Ok(Response::new()
        .add_messages(messages)
        .set_data(to_json_binary(&response)?)
        .add_attributes([
            attr("action", "add_liquidity"),
            attr("sender", info.sender),
            attr("to", to),
            attr("amount_a", amount_a),
            attr("amount_b", amount_b),
            attr("liquidity", liquidity),
        ]))
}

fn mint_msg(
    lp_token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<cosmwasm_std::WasmMsg> {
    wasm_execute(
        lp_token,
        &Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
    )
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Pair { token_a, token_b } => {
            let token_a = deps.api.addr_validate(&token_a)?;
            let token_b = deps.api.addr_validate(&token_b)?;
            let pair = PAIRS
                .may_load(deps.storage, pair_key(&token_a, &token_b))?
                .ok_or_else(|| StdError::generic_err("Pair does not exist"))?;
            let (reserve_a, reserve_b) = pair.reserves_for(&token_a);

            to_json_binary(&PairResponse {
                lp_token: pair.lp_token,
                reserve_a,
                reserve_b,
                total_supply: pair.total_supply,
            })
        }
    }
}
