//! Read-only projections over the issuer's state.
//!
//! Listings return principals in ascending byte order. `start_after` is
//! exclusive and the page size comes from [`Pagination`]. Revoked entries
//! (zero quota, false flag) are not listed.

use cosmwasm_std::{Addr, Deps, StdResult};
use issuer_store::state::{self, Quota, Role};
use issuer_types::{
    AllowanceInfo, AllowanceResponse, AllowancesResponse, BlacklisteesResponse,
    DenomResponse, IsFrozenResponse, OwnerResponse, StatusInfo, StatusResponse,
    TokenFactoryAdminResponse,
};
use tracing::debug;

use crate::config::Pagination;
use crate::error::ContractError;
use crate::host::validate_address;

pub fn query_is_frozen(deps: Deps) -> Result<IsFrozenResponse, ContractError> {
    Ok(IsFrozenResponse {
        is_frozen: state::is_frozen(deps.storage)?,
    })
}

pub fn query_denom(deps: Deps) -> Result<DenomResponse, ContractError> {
    Ok(DenomResponse {
        denom: state::denom(deps.storage)?,
    })
}

pub fn query_owner(deps: Deps) -> Result<OwnerResponse, ContractError> {
    Ok(OwnerResponse {
        address: state::owner(deps.storage)?.into_string(),
    })
}

pub fn query_token_factory_admin(deps: Deps) -> Result<TokenFactoryAdminResponse, ContractError> {
    Ok(TokenFactoryAdminResponse {
        address: state::TOKEN_FACTORY_ADMIN.load(deps.storage)?.into_string(),
    })
}

pub fn query_allowance(
    deps: Deps,
    quota: Quota,
    address: &str,
) -> Result<AllowanceResponse, ContractError> {
    let address = validate_address(deps.api, address)?;
    Ok(AllowanceResponse {
        allowance: state::quota(deps.storage, quota, &address)?,
    })
}

pub fn query_allowances(
    deps: Deps,
    quota: Quota,
    start_after: Option<String>,
    limit: Option<u32>,
    pagination: &Pagination,
) -> Result<AllowancesResponse, ContractError> {
    let size = pagination.page_size(limit)?;
    let start = cursor(deps, start_after)?;

    let allowances = state::quota_holders(deps.storage, quota, start.as_ref())
        .take(size)
        .map(|item| {
            item.map(|(address, allowance)| AllowanceInfo {
                address: address.into_string(),
                allowance,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    debug!(quota = %quota, returned = allowances.len(), "Listed allowances");
    Ok(AllowancesResponse { allowances })
}

pub fn query_role(deps: Deps, role: Role, address: &str) -> Result<StatusResponse, ContractError> {
    let address = validate_address(deps.api, address)?;
    Ok(StatusResponse {
        status: state::has_role(deps.storage, role, &address)?,
    })
}

pub fn query_role_holders(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
    pagination: &Pagination,
) -> Result<Vec<StatusInfo>, ContractError> {
    let size = pagination.page_size(limit)?;
    let start = cursor(deps, start_after)?;

    let holders = collect_statuses(state::role_holders(deps.storage, role, start.as_ref()), size)?;
    debug!(role = %role, returned = holders.len(), "Listed role holders");
    Ok(holders)
}

pub fn query_is_blacklisted(deps: Deps, address: &str) -> Result<StatusResponse, ContractError> {
    let address = validate_address(deps.api, address)?;
    Ok(StatusResponse {
        status: state::is_blacklisted(deps.storage, &address)?,
    })
}

pub fn query_blacklist(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
    pagination: &Pagination,
) -> Result<BlacklisteesResponse, ContractError> {
    let size = pagination.page_size(limit)?;
    let start = cursor(deps, start_after)?;

    let blacklistees = collect_statuses(state::blacklisted(deps.storage, start.as_ref()), size)?;
    Ok(BlacklisteesResponse { blacklistees })
}

fn cursor(deps: Deps, start_after: Option<String>) -> Result<Option<Addr>, ContractError> {
    start_after
        .map(|raw| validate_address(deps.api, &raw))
        .transpose()
}

fn collect_statuses(
    entries: impl Iterator<Item = StdResult<(Addr, bool)>>,
    size: usize,
) -> Result<Vec<StatusInfo>, ContractError> {
    let statuses = entries
        .take(size)
        .map(|item| {
            item.map(|(address, status)| StatusInfo {
                address: address.into_string(),
                status,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(statuses)
}
