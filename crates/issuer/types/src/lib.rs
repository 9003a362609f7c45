//! Issuer Types - shared vocabulary of the managed-token issuer.
//!
//! The command/query/sudo message surface, query responses and the events
//! emitted by committed commands. Principals, coins and amounts are the host
//! ledger's own [`Addr`], [`Coin`] and [`Uint128`].
#![deny(unsafe_code)]

pub mod event;
pub mod msg;

pub use cosmwasm_std::{Addr, Coin, Uint128};
pub use event::{EventKind, IssuerEvent};
pub use msg::{
    AllowanceInfo, AllowanceResponse, AllowancesResponse, BlacklisteesResponse,
    BlacklisterAllowancesResponse, DenomMetadata, DenomResponse, DenomUnit, ExecuteMsg,
    FreezerAllowancesResponse, InstantiateMsg, IsFrozenResponse, OwnerResponse, QueryMsg,
    StatusInfo, StatusResponse, SudoMsg, TokenFactoryAdminResponse,
};
