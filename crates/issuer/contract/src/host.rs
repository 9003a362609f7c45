//! The host ledger's token issuance module, and address helpers.
//!
//! Storage, the address validator and block context arrive through the
//! host's `Deps`/`DepsMut`/`Env`. The token factory is passed alongside them
//! explicitly; the contract keeps no state of its own between calls.

use cosmwasm_std::{Addr, Api, Uint128};
use issuer_types::DenomMetadata;

use crate::error::{ContractError, HostError};

/// The host's token issuance module.
///
/// `sender` is always the issuing contract; the host rejects calls from a
/// sender that is not the denom's current admin.
pub trait TokenFactory {
    /// Create `factory/<sender>/<subdenom>` and return the full denom.
    fn create_denom(&mut self, sender: &Addr, subdenom: &str) -> Result<String, HostError>;

    fn mint(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        to: &Addr,
    ) -> Result<(), HostError>;

    fn burn(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        from: &Addr,
    ) -> Result<(), HostError>;

    /// Move `amount` of `denom` from `from` to `to` without their consent.
    fn force_transfer(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        from: &Addr,
        to: &Addr,
    ) -> Result<(), HostError>;

    fn change_admin(&mut self, sender: &Addr, denom: &str, new_admin: &Addr)
        -> Result<(), HostError>;

    fn set_denom_metadata(&mut self, sender: &Addr, metadata: &DenomMetadata)
        -> Result<(), HostError>;
}

/// Validate a caller-supplied address, reporting failure as a bad argument.
pub fn validate_address(api: &dyn Api, input: &str) -> Result<Addr, ContractError> {
    api.addr_validate(input)
        .map_err(|err| ContractError::InvalidArgument(err.to_string()))
}

/// Bring a host-supplied address to the canonical form stored keys use.
///
/// Addresses differing only in an encoding detail such as case map to the
/// same principal.
pub fn normalize_address(api: &dyn Api, input: &str) -> Result<Addr, ContractError> {
    api.addr_canonicalize(input)
        .and_then(|canonical| api.addr_humanize(&canonical))
        .map_err(|err| ContractError::InvalidArgument(err.to_string()))
}
