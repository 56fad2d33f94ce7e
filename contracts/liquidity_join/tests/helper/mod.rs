#![cfg(not(tarpaulin_include))]
#![allow(dead_code)]

use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{
    AllowanceResponse, BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use derivative::Derivative;

use liquidity_join::join::{
    CustodyResponse, ExecuteMsg, InstantiateMsg, QueryMsg, StakingVersion,
};
use liquidity_join::router::{
    ExecuteMsg as RouterExecuteMsg, InstantiateMsg as RouterInstantiateMsg, PairResponse,
    QueryMsg as RouterQueryMsg,
};
use liquidity_join::staking::{v1, v2, QueryMsg as StakingQueryMsg, UserInfoResponse};
use liquidity_join_mocks::{
    masterchef_v1_contract, masterchef_v2_contract, router_contract, token_contract,
};

/// Pool id the pair's LP token gets in the V2 staking contract
pub const V2_POOL_ID: u64 = 2;

const INIT_BALANCE: u128 = 1_000_000_000_000_000_000_000;

fn join_contract() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new_with_empty(
            liquidity_join_contract::contract::execute,
            liquidity_join_contract::contract::instantiate,
            liquidity_join_contract::query::query,
        )
        .with_reply_empty(liquidity_join_contract::contract::reply),
    )
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct Helper {
    #[derivative(Debug = "ignore")]
    pub app: App,
    pub owner: Addr,
    pub token_code_id: u64,
    pub join_code_id: u64,
    pub token_a: Addr,
    pub token_b: Addr,
    pub lp_token: Addr,
    pub router: Addr,
    pub staking: Addr,
    pub staking_version: StakingVersion,
    pub join: Addr,
}

impl Helper {
    pub fn new(owner: &Addr, staking_version: StakingVersion) -> AnyResult<Self> {
        let mut app = App::default();

        let token_code_id = app.store_code(token_contract());
        let router_code_id = app.store_code(router_contract());
        let join_code_id = app.store_code(join_contract());

        let token_a = Self::init_token(&mut app, token_code_id, "TOKA", owner, None)?;
        let token_b = Self::init_token(&mut app, token_code_id, "TOKB", owner, None)?;

        let router = app.instantiate_contract(
            router_code_id,
            owner.clone(),
            &RouterInstantiateMsg {},
            &[],
            "Router",
            None,
        )?;

        let lp_token = Self::init_token(&mut app, token_code_id, "ULP", owner, Some(&router))?;
        app.execute_contract(
            owner.clone(),
            router.clone(),
            &RouterExecuteMsg::CreatePair {
                token_a: token_a.to_string(),
                token_b: token_b.to_string(),
                lp_token: lp_token.to_string(),
            },
            &[],
        )?;

        let staking = match staking_version {
            StakingVersion::V1 => {
                let code_id = app.store_code(masterchef_v1_contract());
                app.instantiate_contract(
                    code_id,
                    owner.clone(),
                    &v1::InstantiateMsg {
                        lp_token: lp_token.to_string(),
                    },
                    &[],
                    "MasterChef V1",
                    None,
                )?
            }
            StakingVersion::V2 => {
                let code_id = app.store_code(masterchef_v2_contract());
                let staking = app.instantiate_contract(
                    code_id,
                    owner.clone(),
                    &v2::InstantiateMsg {
                        owner: owner.to_string(),
                    },
                    &[],
                    "MasterChef V2",
                    None,
                )?;

                // Occupy the lower pool ids with unrelated LP tokens
                for symbol in ["OTHERA", "OTHERB"] {
                    let other_lp = Self::init_token(&mut app, token_code_id, symbol, owner, None)?;
                    app.execute_contract(
                        owner.clone(),
                        staking.clone(),
                        &v2::ExecuteMsg::Add {
                            lp_token: other_lp.to_string(),
                        },
                        &[],
                    )?;
                }
                app.execute_contract(
                    owner.clone(),
                    staking.clone(),
                    &v2::ExecuteMsg::Add {
                        lp_token: lp_token.to_string(),
                    },
                    &[],
                )?;

                staking
            }
        };

        let join = Self::init_join(
            &mut app,
            join_code_id,
            owner,
            &router,
            (&token_a, &token_b),
            &staking,
            staking_version,
        )?;

        Ok(Self {
            app,
            owner: owner.clone(),
            token_code_id,
            join_code_id,
            token_a,
            token_b,
            lp_token,
            router,
            staking,
            staking_version,
            join,
        })
    }

    fn init_token(
        app: &mut App,
        token_code_id: u64,
        symbol: &str,
        owner: &Addr,
        minter: Option<&Addr>,
    ) -> AnyResult<Addr> {
        let initial_balances = if minter.is_some() {
            vec![]
        } else {
            vec![Cw20Coin {
                address: owner.to_string(),
                amount: Uint128::new(INIT_BALANCE),
            }]
        };

        app.instantiate_contract(
            token_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: format!("{symbol} token"),
                symbol: symbol.to_string(),
                decimals: 6,
                initial_balances,
                mint: minter.map(|minter| MinterResponse {
                    minter: minter.to_string(),
                    cap: None,
                }),
                marketing: None,
            },
            &[],
            symbol,
            None,
        )
    }

    fn init_join(
        app: &mut App,
        join_code_id: u64,
        owner: &Addr,
        router: &Addr,
        (token_a, token_b): (&Addr, &Addr),
        staking: &Addr,
        staking_version: StakingVersion,
    ) -> AnyResult<Addr> {
        app.instantiate_contract(
            join_code_id,
            owner.clone(),
            &InstantiateMsg {
                router: router.to_string(),
                token_a: token_a.to_string(),
                token_b: token_b.to_string(),
                staking_contract: staking.to_string(),
                is_staking_v1: staking_version == StakingVersion::V1,
            },
            &[],
            "Liquidity Join",
            None,
        )
    }

    /// Creates a token held by the owner that has no pair on the router
    pub fn unpaired_token(&mut self, symbol: &str) -> AnyResult<Addr> {
        Self::init_token(&mut self.app, self.token_code_id, symbol, &self.owner, None)
    }

    /// Instantiates another join contract for an arbitrary token pair
    pub fn join_for(&mut self, token_a: &Addr, token_b: &Addr) -> AnyResult<Addr> {
        Self::init_join(
            &mut self.app,
            self.join_code_id,
            &self.owner,
            &self.router,
            (token_a, token_b),
            &self.staking,
            self.staking_version,
        )
    }

    pub fn transfer(&mut self, token: &Addr, recipient: &Addr, amount: u128) -> AnyResult<()> {
        if amount == 0 {
            return Ok(());
        }

        self.app.execute_contract(
            self.owner.clone(),
            token.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )?;

        Ok(())
    }

    /// Moves token A and token B from the owner into the join contract custody
    pub fn fund_join(&mut self, amount_a: u128, amount_b: u128) -> AnyResult<()> {
        let join = self.join.clone();
        let (token_a, token_b) = (self.token_a.clone(), self.token_b.clone());
        self.transfer(&token_a, &join, amount_a)?;
        self.transfer(&token_b, &join, amount_b)
    }

    /// Provides liquidity directly through the router on behalf of the owner
    pub fn seed_pool(&mut self, amount_a: u128, amount_b: u128) -> AnyResult<AppResponse> {
        let deposits = [
            (self.token_a.clone(), amount_a),
            (self.token_b.clone(), amount_b),
        ];
        for (token, amount) in deposits {
            self.app.execute_contract(
                self.owner.clone(),
                token,
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.router.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )?;
        }

        let deadline = self.app.block_info().time.seconds();
        self.app.execute_contract(
            self.owner.clone(),
            self.router.clone(),
            &RouterExecuteMsg::AddLiquidity {
                token_a: self.token_a.to_string(),
                token_b: self.token_b.to_string(),
                amount_a_desired: Uint128::new(amount_a),
                amount_b_desired: Uint128::new(amount_b),
                amount_a_min: Uint128::zero(),
                amount_b_min: Uint128::zero(),
                to: self.owner.to_string(),
                deadline,
            },
            &[],
        )
    }

    pub fn join_liquidity(
        &mut self,
        sender: &Addr,
        amount_a: u128,
        amount_b: u128,
        pool_id: Option<u64>,
    ) -> AnyResult<AppResponse> {
        let join = self.join.clone();
        self.join_liquidity_on(&join, sender, amount_a, amount_b, pool_id)
    }

    pub fn join_liquidity_on(
        &mut self,
        join: &Addr,
        sender: &Addr,
        amount_a: u128,
        amount_b: u128,
        pool_id: Option<u64>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            join.clone(),
            &ExecuteMsg::JoinLiquidity {
                amount_a: Uint128::new(amount_a),
                amount_b: Uint128::new(amount_b),
                pool_id,
            },
            &[],
        )
    }

    pub fn token_balance(&self, token: &Addr, user: &Addr) -> u128 {
        let resp: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: user.to_string(),
                },
            )
            .unwrap();

        resp.balance.u128()
    }

    /// Amount the router may still pull from the join contract
    pub fn router_allowance(&self, token: &Addr) -> Uint128 {
        let resp: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Allowance {
                    owner: self.join.to_string(),
                    spender: self.router.to_string(),
                },
            )
            .unwrap();

        resp.allowance
    }

    /// Staked amount recorded for the join contract in pool `pid`
    pub fn staked(&self, pid: u64) -> u128 {
        let resp: UserInfoResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.staking,
                &StakingQueryMsg::UserInfo {
                    pid,
                    user: self.join.to_string(),
                },
            )
            .unwrap();

        resp.amount.u128()
    }

    pub fn position(&self, pool_id: Option<u64>) -> AnyResult<UserInfoResponse> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(&self.join, &QueryMsg::Position { pool_id })?)
    }

    pub fn custody(&self) -> CustodyResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.join, &QueryMsg::Custody {})
            .unwrap()
    }

    pub fn pair(&self) -> PairResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.router,
                &RouterQueryMsg::Pair {
                    token_a: self.token_a.to_string(),
                    token_b: self.token_b.to_string(),
                },
            )
            .unwrap()
    }

    pub fn next_block(&mut self) {
        self.app.update_block(|block| {
            block.height += 1;
            block.time = block.time.plus_seconds(5);
        })
    }
}
