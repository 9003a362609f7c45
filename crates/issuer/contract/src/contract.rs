//! Entry points the host invokes: instantiate, execute, sudo and query.

use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Storage};
use cw2::{set_contract_version, ContractVersion};
use issuer_store::state::{self, Quota, Role};
use issuer_store::WriteBatch;
use issuer_types::{
    BlacklisterAllowancesResponse, EventKind, ExecuteMsg, FreezerAllowancesResponse,
    InstantiateMsg, QueryMsg, SudoMsg,
};
use tracing::{debug, info};

use crate::config::{Pagination, CONTRACT_NAME, CONTRACT_VERSION};
use crate::error::ContractError;
use crate::execute as handlers;
use crate::gate;
use crate::host::{normalize_address, TokenFactory};
use crate::queries;
use crate::response::Response;

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

/// Set up the issuer for one managed denom.
///
/// The sender becomes the owner. With [`InstantiateMsg::NewToken`] the host
/// token factory creates the denom with this contract as its admin.
pub fn instantiate(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    msg: InstantiateMsg,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    if state::OWNER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::invalid("contract is already instantiated"));
    }

    let denom = match msg {
        InstantiateMsg::NewToken { subdenom } => {
            if subdenom.is_empty() {
                return Err(ContractError::invalid("subdenom must not be empty"));
            }
            factory.create_denom(&env.contract.address, &subdenom)?
        }
        InstantiateMsg::ExistingToken { denom } => {
            validate_denom(&denom)?;
            denom
        }
    };

    let mut batch = WriteBatch::new();
    set_contract_version(&mut batch, CONTRACT_NAME, CONTRACT_VERSION)?;
    state::OWNER.save(&mut batch, &info.sender)?;
    state::DENOM.save(&mut batch, &denom)?;
    state::TOKEN_FACTORY_ADMIN.save(&mut batch, &env.contract.address)?;
    state::set_frozen(&mut batch, false)?;
    batch.commit(deps.storage);

    info!(
        owner = %info.sender,
        denom = %denom,
        contract = %env.contract.address,
        "Issuer instantiated"
    );

    Ok(Response::record(
        env,
        info,
        EventKind::Instantiated {
            owner: info.sender.clone(),
            denom,
        },
    ))
}

pub fn execute(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    msg: ExecuteMsg,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    debug!(action = msg.action(), sender = %info.sender, "Executing command");

    match msg {
        ExecuteMsg::ChangeTokenFactoryAdmin { new_admin } => {
            handlers::change_token_factory_admin(deps, env, info, &new_admin, factory)
        }
        ExecuteMsg::ChangeContractOwner { new_owner } => {
            handlers::change_contract_owner(deps, env, info, &new_owner)
        }
        ExecuteMsg::SetDenomMetadata { metadata } => {
            handlers::set_denom_metadata(deps, env, info, &metadata, factory)
        }
        ExecuteMsg::SetMinter { address, allowance } => {
            handlers::set_minter(deps, env, info, &address, allowance)
        }
        ExecuteMsg::SetBurner { address, allowance } => {
            handlers::set_burner(deps, env, info, &address, allowance)
        }
        ExecuteMsg::SetBlacklister { address, status } => {
            handlers::set_blacklister(deps, env, info, &address, status)
        }
        ExecuteMsg::SetFreezer { address, status } => {
            handlers::set_freezer(deps, env, info, &address, status)
        }
        ExecuteMsg::Mint { to_address, amount } => {
            handlers::mint(deps, env, info, &to_address, amount, factory)
        }
        ExecuteMsg::Burn { amount } => handlers::burn(deps, env, info, amount, factory),
        ExecuteMsg::ForceTransfer {
            amount,
            from_address,
            to_address,
        } => handlers::force_transfer(
            deps,
            env,
            info,
            amount,
            &from_address,
            &to_address,
            factory,
        ),
        ExecuteMsg::Blacklist { address, status } => {
            handlers::blacklist(deps, env, info, &address, status)
        }
        ExecuteMsg::Freeze { status } => handlers::freeze(deps, env, info, status),
    }
}

/// Host-only callbacks.
pub fn sudo(deps: Deps, _env: &Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::BlockBeforeSend { from, to, amount } => {
            // the host may hand over any encoding of an address; blacklist
            // keys are canonical
            let from = normalize_address(deps.api, &from)?;
            let to = normalize_address(deps.api, &to)?;
            gate::before_send(deps, &from, &to, &amount)?;
            Ok(Response::new())
        }
    }
}

/// Answer a query with the default page sizes.
pub fn query(deps: Deps, env: &Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    query_with(deps, env, msg, &Pagination::default())
}

/// Answer a query, encoding the response as JSON.
pub fn query_with(
    deps: Deps,
    _env: &Env,
    msg: QueryMsg,
    pagination: &Pagination,
) -> Result<Binary, ContractError> {
    pagination.validate()?;

    let bin = match msg {
        QueryMsg::IsFrozen {} => to_json_binary(&queries::query_is_frozen(deps)?),
        QueryMsg::Denom {} => to_json_binary(&queries::query_denom(deps)?),
        QueryMsg::Owner {} => to_json_binary(&queries::query_owner(deps)?),
        QueryMsg::TokenFactoryAdmin {} => {
            to_json_binary(&queries::query_token_factory_admin(deps)?)
        }
        QueryMsg::BurnAllowance { address } => {
            to_json_binary(&queries::query_allowance(deps, Quota::Burn, &address)?)
        }
        QueryMsg::BurnAllowances { start_after, limit } => to_json_binary(
            &queries::query_allowances(deps, Quota::Burn, start_after, limit, pagination)?,
        ),
        QueryMsg::MintAllowance { address } => {
            to_json_binary(&queries::query_allowance(deps, Quota::Mint, &address)?)
        }
        QueryMsg::MintAllowances { start_after, limit } => to_json_binary(
            &queries::query_allowances(deps, Quota::Mint, start_after, limit, pagination)?,
        ),
        QueryMsg::IsBlacklisted { address } => {
            to_json_binary(&queries::query_is_blacklisted(deps, &address)?)
        }
        QueryMsg::GetBlacklist { start_after, limit } => to_json_binary(
            &queries::query_blacklist(deps, start_after, limit, pagination)?,
        ),
        QueryMsg::IsBlacklister { address } => {
            to_json_binary(&queries::query_role(deps, Role::Blacklister, &address)?)
        }
        QueryMsg::BlacklisterAllowances { start_after, limit } => {
            to_json_binary(&BlacklisterAllowancesResponse {
                blacklisters: queries::query_role_holders(
                    deps,
                    Role::Blacklister,
                    start_after,
                    limit,
                    pagination,
                )?,
            })
        }
        QueryMsg::IsFreezer { address } => {
            to_json_binary(&queries::query_role(deps, Role::Freezer, &address)?)
        }
        QueryMsg::FreezerAllowances { start_after, limit } => {
            to_json_binary(&FreezerAllowancesResponse {
                freezers: queries::query_role_holders(
                    deps,
                    Role::Freezer,
                    start_after,
                    limit,
                    pagination,
                )?,
            })
        }
    }?;
    Ok(bin)
}

/// Name and version recorded when the contract was instantiated.
pub fn get_contract_version(storage: &dyn Storage) -> Result<ContractVersion, ContractError> {
    Ok(cw2::get_contract_version(storage)?)
}

fn validate_denom(denom: &str) -> Result<(), ContractError> {
    if denom.len() < MIN_DENOM_LEN || denom.len() > MAX_DENOM_LEN {
        return Err(ContractError::invalid(format!(
            "denom \"{denom}\" must be between {MIN_DENOM_LEN} and {MAX_DENOM_LEN} bytes"
        )));
    }
    if denom.chars().any(char::is_whitespace) {
        return Err(ContractError::invalid(format!(
            "denom \"{denom}\" contains whitespace"
        )));
    }
    Ok(())
}
