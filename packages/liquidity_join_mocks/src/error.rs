use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

/// Errors of the mock constant product router
#[derive(Error, Debug, PartialEq)]
pub enum RouterError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Identical tokens")]
    IdenticalTokens {},

    #[error("Pair already exists")]
    PairExists {},

    #[error("Pair does not exist")]
    PairNotFound {},

    #[error("Expired")]
    Expired {},

    #[error("Insufficient amount")]
    InsufficientAmount {},

    #[error("Insufficient liquidity")]
    InsufficientLiquidity {},

    #[error("Insufficient A amount")]
    InsufficientAAmount {},

    #[error("Insufficient B amount")]
    InsufficientBAmount {},

    #[error("Insufficient liquidity minted")]
    InsufficientLiquidityMinted {},
}

/// Errors of the mock MasterChef contracts
#[derive(Error, Debug, PartialEq)]
pub enum StakingError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Pool {0} does not exist")]
    PoolNotFound(u64),
}
