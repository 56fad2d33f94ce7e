#![cfg(not(tarpaulin_include))]

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub mod error;
pub mod masterchef;
pub mod router;

pub fn token_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new_with_empty(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

pub fn router_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new_with_empty(
        router::execute,
        router::instantiate,
        router::query,
    ))
}

pub fn masterchef_v1_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new_with_empty(
        masterchef::v1::execute,
        masterchef::v1::instantiate,
        masterchef::query,
    ))
}

pub fn masterchef_v2_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new_with_empty(
        masterchef::v2::execute,
        masterchef::v2::instantiate,
        masterchef::query,
    ))
}
