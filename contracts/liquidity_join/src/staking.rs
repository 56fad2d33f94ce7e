use cosmwasm_std::{wasm_execute, Addr, CosmosMsg, StdResult, Uint128};

use liquidity_join::join::StakingVersion;
use liquidity_join::staking::{v1, v2, V1_POOL_ID};

use crate::error::ContractError;

/// Maps a [`StakingVersion`] onto the deposit call shape of the matching staking contract.
pub trait StakingVersionExt {
    /// Resolves the pool that receives the deposit.
    /// V1 has a single implicit pool, so any requested id is ignored.
    fn resolve_pool_id(&self, requested: Option<u64>) -> Result<u64, ContractError>;

    fn deposit_msg(
        &self,
        staking_contract: &Addr,
        pool_id: u64,
        amount: Uint128,
    ) -> StdResult<CosmosMsg>;
}

impl StakingVersionExt for StakingVersion {
    fn resolve_pool_id(&self, requested: Option<u64>) -> Result<u64, ContractError> {
        match self {
            StakingVersion::V1 => Ok(V1_POOL_ID),
            StakingVersion::V2 => requested.ok_or(ContractError::MissingPoolId {}),
        }
    }

    fn deposit_msg(
        &self,
        staking_contract: &Addr,
        pool_id: u64,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        let msg = match self {
            StakingVersion::V1 => {
                wasm_execute(staking_contract, &v1::ExecuteMsg::Deposit { amount }, vec![])?
            }
            StakingVersion::V2 => wasm_execute(
                staking_contract,
                &v2::ExecuteMsg::Deposit {
                    pid: pool_id,
                    amount,
                },
                vec![],
            )?,
        };

        Ok(msg.into())
    }
}
