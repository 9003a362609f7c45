//! Role & allowance store.
//!
//! Quotas (mint, burn) and binary grants (blacklister, freezer) live in two
//! distinct kinds of map so quantity and boolean logic cannot be mixed.
//! Unknown principals read as zero / false. Revocation writes zero / false
//! rather than deleting, and the holder iterators skip those entries, so an
//! absent key and a revoked key look the same on every read path.

use std::fmt;

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Item, Map};

pub const DENOM: Item<String> = Item::new("denom");
pub const OWNER: Item<Addr> = Item::new("owner");
pub const TOKEN_FACTORY_ADMIN: Item<Addr> = Item::new("token_factory_admin");
pub const IS_FROZEN: Item<bool> = Item::new("is_frozen");

pub const MINTER_ALLOWANCES: Map<&Addr, Uint128> = Map::new("minter_allowances");
pub const BURNER_ALLOWANCES: Map<&Addr, Uint128> = Map::new("burner_allowances");
pub const BLACKLISTER_ALLOWANCES: Map<&Addr, bool> = Map::new("blacklister_allowances");
pub const FREEZER_ALLOWANCES: Map<&Addr, bool> = Map::new("freezer_allowances");
pub const BLACKLISTED_ADDRESSES: Map<&Addr, bool> = Map::new("blacklisted_addresses");

/// A consumable allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quota {
    Mint,
    Burn,
}

impl Quota {
    pub fn map<'a>(self) -> Map<'a, &'a Addr, Uint128> {
        match self {
            Quota::Mint => MINTER_ALLOWANCES,
            Quota::Burn => BURNER_ALLOWANCES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quota::Mint => "mint",
            Quota::Burn => "burn",
        }
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binary delegated permission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Blacklister,
    Freezer,
}

impl Role {
    pub fn map<'a>(self) -> Map<'a, &'a Addr, bool> {
        match self {
            Role::Blacklister => BLACKLISTER_ALLOWANCES,
            Role::Freezer => FREEZER_ALLOWANCES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Blacklister => "blacklister",
            Role::Freezer => "freezer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn owner(store: &dyn Storage) -> StdResult<Addr> {
    OWNER.load(store)
}

pub fn denom(store: &dyn Storage) -> StdResult<String> {
    DENOM.load(store)
}

pub fn is_frozen(store: &dyn Storage) -> StdResult<bool> {
    Ok(IS_FROZEN.may_load(store)?.unwrap_or(false))
}

pub fn set_frozen(store: &mut dyn Storage, status: bool) -> StdResult<()> {
    IS_FROZEN.save(store, &status)
}

pub fn quota(store: &dyn Storage, kind: Quota, addr: &Addr) -> StdResult<Uint128> {
    Ok(kind.map().may_load(store, addr)?.unwrap_or_default())
}

pub fn set_quota(
    store: &mut dyn Storage,
    kind: Quota,
    addr: &Addr,
    allowance: Uint128,
) -> StdResult<()> {
    kind.map().save(store, addr, &allowance)
}

pub fn has_role(store: &dyn Storage, role: Role, addr: &Addr) -> StdResult<bool> {
    Ok(role.map().may_load(store, addr)?.unwrap_or(false))
}

pub fn set_role(store: &mut dyn Storage, role: Role, addr: &Addr, status: bool) -> StdResult<()> {
    role.map().save(store, addr, &status)
}

pub fn is_blacklisted(store: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(BLACKLISTED_ADDRESSES.may_load(store, addr)?.unwrap_or(false))
}

pub fn set_blacklisted(store: &mut dyn Storage, addr: &Addr, status: bool) -> StdResult<()> {
    BLACKLISTED_ADDRESSES.save(store, addr, &status)
}

/// Principals holding a non-zero quota, in principal order, resuming
/// strictly after `start_after`.
pub fn quota_holders<'s>(
    store: &'s dyn Storage,
    kind: Quota,
    start_after: Option<&Addr>,
) -> impl Iterator<Item = StdResult<(Addr, Uint128)>> + 's {
    kind.map()
        .range(store, start_after.map(Bound::exclusive), None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, allowance)) if allowance.is_zero()))
}

/// Principals holding a role, in principal order.
pub fn role_holders<'s>(
    store: &'s dyn Storage,
    role: Role,
    start_after: Option<&Addr>,
) -> impl Iterator<Item = StdResult<(Addr, bool)>> + 's {
    flagged(role.map(), store, start_after)
}

/// Blacklisted principals, in principal order.
pub fn blacklisted<'s>(
    store: &'s dyn Storage,
    start_after: Option<&Addr>,
) -> impl Iterator<Item = StdResult<(Addr, bool)>> + 's {
    flagged(BLACKLISTED_ADDRESSES, store, start_after)
}

fn flagged<'s, 'k>(
    map: Map<'k, &'k Addr, bool>,
    store: &'s dyn Storage,
    start_after: Option<&'k Addr>,
) -> impl Iterator<Item = StdResult<(Addr, bool)>> + 's {
    map.range(store, start_after.map(Bound::exclusive), None, Order::Ascending)
        .filter(|item| !matches!(item, Ok((_, false))))
}
