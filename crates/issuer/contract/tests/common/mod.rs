#![allow(dead_code)]

use issuer_contract::{ContractError, MockChain, Response};
use issuer_types::{DenomResponse, ExecuteMsg, InstantiateMsg, QueryMsg, Uint128};
use tracing_subscriber::EnvFilter;

pub const OWNER: &str = "osmo1owner";
pub const ALICE: &str = "osmo1alice";
pub const BOB: &str = "osmo1bob";
pub const CAROL: &str = "osmo1carol";

/// Route contract logs to the test writer; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A chain with a freshly created `factory/<contract>/uusd` issuer owned by [`OWNER`].
pub fn setup() -> MockChain {
    init_tracing();
    let mut chain = MockChain::new();
    chain
        .instantiate(
            OWNER,
            InstantiateMsg::NewToken {
                subdenom: "uusd".to_string(),
            },
        )
        .unwrap();
    chain
}

pub fn denom(chain: &MockChain) -> String {
    let res: DenomResponse = chain.query(QueryMsg::Denom {}).unwrap();
    res.denom
}

pub fn set_minter(chain: &mut MockChain, who: &str, allowance: u128) -> Response {
    chain
        .execute(
            OWNER,
            ExecuteMsg::SetMinter {
                address: who.to_string(),
                allowance: Uint128::new(allowance),
            },
        )
        .unwrap()
}

pub fn set_burner(chain: &mut MockChain, who: &str, allowance: u128) -> Response {
    chain
        .execute(
            OWNER,
            ExecuteMsg::SetBurner {
                address: who.to_string(),
                allowance: Uint128::new(allowance),
            },
        )
        .unwrap()
}

pub fn mint(
    chain: &mut MockChain,
    minter: &str,
    to: &str,
    amount: u128,
) -> Result<Response, ContractError> {
    chain.execute(
        minter,
        ExecuteMsg::Mint {
            to_address: to.to_string(),
            amount: Uint128::new(amount),
        },
    )
}

pub fn mint_allowance(chain: &MockChain, who: &str) -> Uint128 {
    let res: issuer_types::AllowanceResponse = chain
        .query(QueryMsg::MintAllowance {
            address: who.to_string(),
        })
        .unwrap();
    res.allowance
}

pub fn burn_allowance(chain: &MockChain, who: &str) -> Uint128 {
    let res: issuer_types::AllowanceResponse = chain
        .query(QueryMsg::BurnAllowance {
            address: who.to_string(),
        })
        .unwrap();
    res.allowance
}
