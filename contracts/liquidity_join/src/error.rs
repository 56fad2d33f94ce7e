use std::fmt::{Display, Formatter, Result as FmtResult};

use cosmwasm_std::StdError;
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

/// One of the two tokens of the configured pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSide {
    TokenA,
    TokenB,
}

impl Display for TokenSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TokenSide::TokenA => f.write_str("TokenA"),
            TokenSide::TokenB => f.write_str("TokenB"),
        }
    }
}

/// This enum describes liquidity join contract errors
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    ParseReplyError(#[from] ParseReplyError),

    #[error("Invalid {0} Supply")]
    InvalidSupply(TokenSide),

    #[error("Insuficient Balance {0}")]
    InsufficientBalance(TokenSide),

    #[error("Pool id is required by the V2 staking interface")]
    MissingPoolId {},

    #[error("Doubling tokens in the pair")]
    DoublingTokens {},

    #[error("Router did not return add liquidity data")]
    EmptyRouterResponse {},

    #[error("Contract can't be migrated!")]
    MigrationError {},
}
