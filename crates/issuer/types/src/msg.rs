//! Command, query and host-callback messages, and query responses.

use serde::{Deserialize, Serialize};

use crate::{Coin, Uint128};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstantiateMsg {
    /// Create a new token through the host token factory. The full denom is
    /// `factory/<contract_address>/<subdenom>`.
    NewToken { subdenom: String },
    /// Adopt a token that was already created and whose admin was handed to
    /// this contract out of band.
    ExistingToken { denom: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    ChangeTokenFactoryAdmin {
        new_admin: String,
    },
    ChangeContractOwner {
        new_owner: String,
    },
    SetDenomMetadata {
        metadata: DenomMetadata,
    },
    /// Grant or overwrite a mint quota. Zero revokes.
    SetMinter {
        address: String,
        allowance: Uint128,
    },
    /// Grant or overwrite a burn quota. Zero revokes.
    SetBurner {
        address: String,
        allowance: Uint128,
    },
    SetBlacklister {
        address: String,
        status: bool,
    },
    SetFreezer {
        address: String,
        status: bool,
    },
    Mint {
        to_address: String,
        amount: Uint128,
    },
    /// Burn from the caller's own balance.
    Burn {
        amount: Uint128,
    },
    /// Move the managed asset between two accounts on the owner's say.
    ForceTransfer {
        amount: Uint128,
        from_address: String,
        to_address: String,
    },
    Blacklist {
        address: String,
        status: bool,
    },
    Freeze {
        status: bool,
    },
}

impl ExecuteMsg {
    /// Short action name used in logs and events.
    pub fn action(&self) -> &'static str {
        match self {
            ExecuteMsg::ChangeTokenFactoryAdmin { .. } => "change_token_factory_admin",
            ExecuteMsg::ChangeContractOwner { .. } => "change_contract_owner",
            ExecuteMsg::SetDenomMetadata { .. } => "set_denom_metadata",
            ExecuteMsg::SetMinter { .. } => "set_minter",
            ExecuteMsg::SetBurner { .. } => "set_burner",
            ExecuteMsg::SetBlacklister { .. } => "set_blacklister",
            ExecuteMsg::SetFreezer { .. } => "set_freezer",
            ExecuteMsg::Mint { .. } => "mint",
            ExecuteMsg::Burn { .. } => "burn",
            ExecuteMsg::ForceTransfer { .. } => "force_transfer",
            ExecuteMsg::Blacklist { .. } => "blacklist",
            ExecuteMsg::Freeze { .. } => "freeze",
        }
    }
}

/// Callbacks only the host ledger may invoke.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SudoMsg {
    /// Invoked for every leg of every transfer before balances change.
    BlockBeforeSend { from: String, to: String, amount: Coin },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    IsFrozen {},
    Denom {},
    Owner {},
    TokenFactoryAdmin {},
    BurnAllowance {
        address: String,
    },
    BurnAllowances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    MintAllowance {
        address: String,
    },
    MintAllowances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    IsBlacklisted {
        address: String,
    },
    GetBlacklist {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    IsBlacklister {
        address: String,
    },
    BlacklisterAllowances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    IsFreezer {
        address: String,
    },
    FreezerAllowances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

/// Bank denom metadata forwarded to the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    pub base: String,
    pub display: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsFrozenResponse {
    pub is_frozen: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomResponse {
    pub denom: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFactoryAdminResponse {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceInfo {
    pub address: String,
    pub allowance: Uint128,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowancesResponse {
    pub allowances: Vec<AllowanceInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub address: String,
    pub status: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklisteesResponse {
    pub blacklistees: Vec<StatusInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklisterAllowancesResponse {
    pub blacklisters: Vec<StatusInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezerAllowancesResponse {
    pub freezers: Vec<StatusInfo>,
}
