//! Issuer Policy - decides whether an actor may perform a command.
//!
//! Rules, in precedence order:
//!
//! 1. Owner and token-factory admin changes, forced transfers: current owner
//!    only.
//! 2. Granting or revoking roles and quotas: current owner only.
//! 3. Mint: the actor's own mint quota must cover the amount. The owner is
//!    not exempt.
//! 4. Burn: the actor's own burn quota must cover the amount.
//! 5. Blacklist: blacklister role, or owner.
//! 6. Freeze: freezer role, or owner.
//!
//! A missing role is [`DenyReason::Unauthorized`]; a quota that does not cover
//! the request (including a zero or absent quota) is
//! [`DenyReason::InsufficientAllowance`]. The engine only reads storage.

#![deny(unsafe_code)]

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use issuer_store::state::{self, Quota, Role};
use tracing::debug;

/// A role-gated action, with the amount for quota-consuming ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ChangeTokenFactoryAdmin,
    ChangeContractOwner,
    SetDenomMetadata,
    SetMinter,
    SetBurner,
    SetBlacklister,
    SetFreezer,
    Mint { amount: Uint128 },
    Burn { amount: Uint128 },
    ForceTransfer,
    Blacklist,
    Freeze,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChangeTokenFactoryAdmin => "change_token_factory_admin",
            Action::ChangeContractOwner => "change_contract_owner",
            Action::SetDenomMetadata => "set_denom_metadata",
            Action::SetMinter => "set_minter",
            Action::SetBurner => "set_burner",
            Action::SetBlacklister => "set_blacklister",
            Action::SetFreezer => "set_freezer",
            Action::Mint { .. } => "mint",
            Action::Burn { .. } => "burn",
            Action::ForceTransfer => "force_transfer",
            Action::Blacklist => "blacklist",
            Action::Freeze => "freeze",
        }
    }

    fn rule(&self) -> Rule {
        match *self {
            Action::ChangeTokenFactoryAdmin
            | Action::ChangeContractOwner
            | Action::SetDenomMetadata
            | Action::SetMinter
            | Action::SetBurner
            | Action::SetBlacklister
            | Action::SetFreezer
            | Action::ForceTransfer => Rule::OwnerOnly,
            Action::Mint { amount } => Rule::Quota(Quota::Mint, amount),
            Action::Burn { amount } => Rule::Quota(Quota::Burn, amount),
            Action::Blacklist => Rule::RoleOrOwner(Role::Blacklister),
            Action::Freeze => Rule::RoleOrOwner(Role::Freezer),
        }
    }
}

enum Rule {
    OwnerOnly,
    Quota(Quota, Uint128),
    RoleOrOwner(Role),
}

/// Why an action was allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basis {
    Owner,
    RoleHolder(Role),
    Quota { quota: Quota, available: Uint128 },
}

/// Why an action was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    Unauthorized,
    InsufficientAllowance {
        quota: Quota,
        required: Uint128,
        available: Uint128,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow(Basis),
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    pub fn into_result(self) -> Result<Basis, DenyReason> {
        match self {
            Decision::Allow(basis) => Ok(basis),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Evaluate `action` for `actor` against the current store.
pub fn authorize(store: &dyn Storage, actor: &Addr, action: &Action) -> StdResult<Decision> {
    let decision = match action.rule() {
        Rule::OwnerOnly => {
            if is_owner(store, actor)? {
                Decision::Allow(Basis::Owner)
            } else {
                Decision::Deny(DenyReason::Unauthorized)
            }
        }
        Rule::Quota(quota, required) => {
            let available = state::quota(store, quota, actor)?;
            if available.is_zero() || required > available {
                Decision::Deny(DenyReason::InsufficientAllowance {
                    quota,
                    required,
                    available,
                })
            } else {
                Decision::Allow(Basis::Quota { quota, available })
            }
        }
        Rule::RoleOrOwner(role) => {
            if state::has_role(store, role, actor)? {
                Decision::Allow(Basis::RoleHolder(role))
            } else if is_owner(store, actor)? {
                Decision::Allow(Basis::Owner)
            } else {
                Decision::Deny(DenyReason::Unauthorized)
            }
        }
    };

    debug!(
        actor = %actor,
        action = action.name(),
        allowed = decision.is_allowed(),
        "Authorization evaluated"
    );

    Ok(decision)
}

fn is_owner(store: &dyn Storage, actor: &Addr) -> StdResult<bool> {
    Ok(state::owner(store)? == *actor)
}
