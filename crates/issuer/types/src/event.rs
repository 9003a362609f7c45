use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Addr, Uint128};

/// Structured record of one committed command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerEvent {
    pub actor: Addr,
    pub height: u64,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: EventKind,
}

/// What changed, with the resulting values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum EventKind {
    #[serde(rename = "instantiate")]
    Instantiated {
        owner: Addr,
        denom: String,
    },
    #[serde(rename = "change_contract_owner")]
    ContractOwnerChanged {
        previous_owner: Addr,
        new_owner: Addr,
    },
    #[serde(rename = "change_token_factory_admin")]
    TokenFactoryAdminChanged {
        denom: String,
        new_admin: Addr,
    },
    #[serde(rename = "set_denom_metadata")]
    DenomMetadataSet {
        denom: String,
    },
    #[serde(rename = "set_minter")]
    MinterSet {
        minter: Addr,
        allowance: Uint128,
    },
    #[serde(rename = "set_burner")]
    BurnerSet {
        burner: Addr,
        allowance: Uint128,
    },
    #[serde(rename = "set_blacklister")]
    BlacklisterSet {
        blacklister: Addr,
        status: bool,
    },
    #[serde(rename = "set_freezer")]
    FreezerSet {
        freezer: Addr,
        status: bool,
    },
    #[serde(rename = "mint")]
    Minted {
        to: Addr,
        amount: Uint128,
        remaining_allowance: Uint128,
    },
    #[serde(rename = "burn")]
    Burned {
        from: Addr,
        amount: Uint128,
        remaining_allowance: Uint128,
    },
    #[serde(rename = "force_transfer")]
    ForceTransferred {
        from: Addr,
        to: Addr,
        amount: Uint128,
    },
    #[serde(rename = "blacklist")]
    BlacklistUpdated {
        address: Addr,
        status: bool,
    },
    #[serde(rename = "freeze")]
    FreezeUpdated {
        status: bool,
    },
}

impl EventKind {
    pub fn action(&self) -> &'static str {
        match self {
            EventKind::Instantiated { .. } => "instantiate",
            EventKind::ContractOwnerChanged { .. } => "change_contract_owner",
            EventKind::TokenFactoryAdminChanged { .. } => "change_token_factory_admin",
            EventKind::DenomMetadataSet { .. } => "set_denom_metadata",
            EventKind::MinterSet { .. } => "set_minter",
            EventKind::BurnerSet { .. } => "set_burner",
            EventKind::BlacklisterSet { .. } => "set_blacklister",
            EventKind::FreezerSet { .. } => "set_freezer",
            EventKind::Minted { .. } => "mint",
            EventKind::Burned { .. } => "burn",
            EventKind::ForceTransferred { .. } => "force_transfer",
            EventKind::BlacklistUpdated { .. } => "blacklist",
            EventKind::FreezeUpdated { .. } => "freeze",
        }
    }
}
