//! Command handlers.
//!
//! Every handler runs the same sequence: validate arguments, authorize the
//! caller, compute and stage every new value, make the host ledger call if the
//! command has one, then commit the staged writes and emit one event. Any
//! failure before the commit leaves storage untouched, and a quota check that
//! fails means the host ledger is never called.

use cosmwasm_std::{Addr, Coin, Deps, DepsMut, Env, MessageInfo, Uint128};
use issuer_policy::{authorize, Action, Basis, Decision};
use issuer_store::state::{self, Quota, Role, OWNER, TOKEN_FACTORY_ADMIN};
use issuer_store::WriteBatch;
use issuer_types::{DenomMetadata, EventKind};
use tracing::{info, warn};

use crate::error::ContractError;
use crate::gate;
use crate::host::{validate_address, TokenFactory};
use crate::response::Response;

/// Run the policy engine, turning a denial into the matching error.
fn require(deps: Deps, actor: &Addr, action: Action) -> Result<Basis, ContractError> {
    match authorize(deps.storage, actor, &action)? {
        Decision::Allow(basis) => Ok(basis),
        Decision::Deny(reason) => {
            warn!(
                actor = %actor,
                action = action.name(),
                reason = ?reason,
                "Command denied"
            );
            Err(reason.into())
        }
    }
}

fn nonzero(amount: Uint128) -> Result<Uint128, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    Ok(amount)
}

/// Quota left after consuming `amount` under an allowed decision.
fn remaining_quota(basis: Basis, amount: Uint128) -> Result<Uint128, ContractError> {
    match basis {
        Basis::Quota { available, .. } => Ok(available.checked_sub(amount)?),
        Basis::Owner | Basis::RoleHolder(_) => Err(ContractError::Unauthorized),
    }
}

pub fn mint(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    to_address: &str,
    amount: Uint128,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    let amount = nonzero(amount)?;
    let to = validate_address(deps.api, to_address)?;

    let basis = require(deps.as_ref(), &info.sender, Action::Mint { amount })?;
    let remaining = remaining_quota(basis, amount)?;
    let denom = state::denom(deps.storage)?;

    // freshly minted funds leave the issuer through the transfer gate
    gate::before_send(
        deps.as_ref(),
        &env.contract.address,
        &to,
        &Coin::new(amount.u128(), denom.clone()),
    )?;

    let mut batch = WriteBatch::new();
    state::set_quota(&mut batch, Quota::Mint, &info.sender, remaining)?;

    factory.mint(&env.contract.address, &denom, amount, &to)?;
    batch.commit(deps.storage);

    info!(
        minter = %info.sender,
        to = %to,
        amount = %amount,
        remaining_allowance = %remaining,
        "Minted"
    );

    Ok(Response::record(
        env,
        info,
        EventKind::Minted {
            to,
            amount,
            remaining_allowance: remaining,
        },
    ))
}

pub fn burn(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    amount: Uint128,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    let amount = nonzero(amount)?;

    let basis = require(deps.as_ref(), &info.sender, Action::Burn { amount })?;
    let remaining = remaining_quota(basis, amount)?;
    let denom = state::denom(deps.storage)?;

    let mut batch = WriteBatch::new();
    state::set_quota(&mut batch, Quota::Burn, &info.sender, remaining)?;

    factory.burn(&env.contract.address, &denom, amount, &info.sender)?;
    batch.commit(deps.storage);

    info!(
        burner = %info.sender,
        amount = %amount,
        remaining_allowance = %remaining,
        "Burned"
    );

    Ok(Response::record(
        env,
        info,
        EventKind::Burned {
            from: info.sender.clone(),
            amount,
            remaining_allowance: remaining,
        },
    ))
}

pub fn change_contract_owner(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    new_owner: &str,
) -> Result<Response, ContractError> {
    let new_owner = validate_address(deps.api, new_owner)?;
    require(deps.as_ref(), &info.sender, Action::ChangeContractOwner)?;

    let previous_owner = state::owner(deps.storage)?;
    let mut batch = WriteBatch::new();
    OWNER.save(&mut batch, &new_owner)?;
    batch.commit(deps.storage);

    info!(
        previous_owner = %previous_owner,
        new_owner = %new_owner,
        "Contract owner changed"
    );

    Ok(Response::record(
        env,
        info,
        EventKind::ContractOwnerChanged {
            previous_owner,
            new_owner,
        },
    ))
}

pub fn change_token_factory_admin(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    new_admin: &str,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    let new_admin = validate_address(deps.api, new_admin)?;
    require(deps.as_ref(), &info.sender, Action::ChangeTokenFactoryAdmin)?;

    let denom = state::denom(deps.storage)?;
    let mut batch = WriteBatch::new();
    TOKEN_FACTORY_ADMIN.save(&mut batch, &new_admin)?;

    factory.change_admin(&env.contract.address, &denom, &new_admin)?;
    batch.commit(deps.storage);

    info!(denom = %denom, new_admin = %new_admin, "Token factory admin changed");

    Ok(Response::record(
        env,
        info,
        EventKind::TokenFactoryAdminChanged { denom, new_admin },
    ))
}

pub fn set_denom_metadata(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    metadata: &DenomMetadata,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    let denom = state::denom(deps.storage)?;
    if metadata.base != denom {
        return Err(ContractError::invalid(format!(
            "metadata base \"{}\" does not match denom \"{}\"",
            metadata.base, denom
        )));
    }
    require(deps.as_ref(), &info.sender, Action::SetDenomMetadata)?;

    factory.set_denom_metadata(&env.contract.address, metadata)?;

    info!(denom = %denom, symbol = %metadata.symbol, "Denom metadata set");

    Ok(Response::record(
        env,
        info,
        EventKind::DenomMetadataSet { denom },
    ))
}

pub fn set_minter(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    address: &str,
    allowance: Uint128,
) -> Result<Response, ContractError> {
    let minter = set_quota(deps, info, Quota::Mint, address, allowance)?;
    Ok(Response::record(
        env,
        info,
        EventKind::MinterSet { minter, allowance },
    ))
}

pub fn set_burner(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    address: &str,
    allowance: Uint128,
) -> Result<Response, ContractError> {
    let burner = set_quota(deps, info, Quota::Burn, address, allowance)?;
    Ok(Response::record(
        env,
        info,
        EventKind::BurnerSet { burner, allowance },
    ))
}

fn set_quota(
    deps: DepsMut,
    info: &MessageInfo,
    quota: Quota,
    address: &str,
    allowance: Uint128,
) -> Result<Addr, ContractError> {
    let address = validate_address(deps.api, address)?;
    let action = match quota {
        Quota::Mint => Action::SetMinter,
        Quota::Burn => Action::SetBurner,
    };
    require(deps.as_ref(), &info.sender, action)?;

    let mut batch = WriteBatch::new();
    state::set_quota(&mut batch, quota, &address, allowance)?;
    batch.commit(deps.storage);

    info!(
        quota = %quota,
        address = %address,
        allowance = %allowance,
        "Quota set"
    );
    Ok(address)
}

pub fn set_blacklister(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    address: &str,
    status: bool,
) -> Result<Response, ContractError> {
    let blacklister = set_role(deps, info, Role::Blacklister, address, status)?;
    Ok(Response::record(
        env,
        info,
        EventKind::BlacklisterSet {
            blacklister,
            status,
        },
    ))
}

pub fn set_freezer(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    address: &str,
    status: bool,
) -> Result<Response, ContractError> {
    let freezer = set_role(deps, info, Role::Freezer, address, status)?;
    Ok(Response::record(
        env,
        info,
        EventKind::FreezerSet { freezer, status },
    ))
}

fn set_role(
    deps: DepsMut,
    info: &MessageInfo,
    role: Role,
    address: &str,
    status: bool,
) -> Result<Addr, ContractError> {
    let address = validate_address(deps.api, address)?;
    let action = match role {
        Role::Blacklister => Action::SetBlacklister,
        Role::Freezer => Action::SetFreezer,
    };
    require(deps.as_ref(), &info.sender, action)?;

    let mut batch = WriteBatch::new();
    state::set_role(&mut batch, role, &address, status)?;
    batch.commit(deps.storage);

    info!(role = %role, address = %address, status, "Role set");
    Ok(address)
}

/// Owner-directed move of the managed asset. The funds still pass the
/// transfer gate, so a frozen denom or a blacklisted party refuses it.
pub fn force_transfer(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    amount: Uint128,
    from_address: &str,
    to_address: &str,
    factory: &mut dyn TokenFactory,
) -> Result<Response, ContractError> {
    let amount = nonzero(amount)?;
    let from = validate_address(deps.api, from_address)?;
    let to = validate_address(deps.api, to_address)?;
    require(deps.as_ref(), &info.sender, Action::ForceTransfer)?;

    let denom = state::denom(deps.storage)?;
    gate::before_send(
        deps.as_ref(),
        &from,
        &to,
        &Coin::new(amount.u128(), denom.clone()),
    )?;

    factory.force_transfer(&env.contract.address, &denom, amount, &from, &to)?;

    info!(from = %from, to = %to, amount = %amount, "Force transferred");

    Ok(Response::record(
        env,
        info,
        EventKind::ForceTransferred { from, to, amount },
    ))
}

pub fn blacklist(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    address: &str,
    status: bool,
) -> Result<Response, ContractError> {
    let address = validate_address(deps.api, address)?;
    if status && address == env.contract.address {
        return Err(ContractError::invalid(
            "the issuing contract cannot blacklist itself",
        ));
    }
    require(deps.as_ref(), &info.sender, Action::Blacklist)?;

    let mut batch = WriteBatch::new();
    state::set_blacklisted(&mut batch, &address, status)?;
    batch.commit(deps.storage);

    info!(address = %address, status, "Blacklist updated");

    Ok(Response::record(
        env,
        info,
        EventKind::BlacklistUpdated { address, status },
    ))
}

pub fn freeze(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    status: bool,
) -> Result<Response, ContractError> {
    require(deps.as_ref(), &info.sender, Action::Freeze)?;

    let mut batch = WriteBatch::new();
    state::set_frozen(&mut batch, status)?;
    batch.commit(deps.storage);

    info!(status, "Freeze updated");

    Ok(Response::record(env, info, EventKind::FreezeUpdated { status }))
}
