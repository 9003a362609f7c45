//! Issuer Contract - delegated administration of one managed token.
//!
//! The contract holds the token-factory admin capability for a single denom
//! and hands out narrower powers to other principals:
//!
//! - **Minters / burners** hold a quota that each mint or burn consumes.
//! - **Blacklisters** may add or remove principals from the blacklist.
//! - **Freezers** may halt every transfer of the denom.
//!
//! The owner grants and revokes all of these and is implicitly a blacklister
//! and a freezer, but must grant itself a quota like anyone else before it can
//! mint or burn. Only the owner may force a transfer between two accounts, and
//! a forced transfer still answers to the freeze and the blacklist.
//!
//! ## Entry points
//!
//! Each is a stateless function over explicitly passed host handles:
//!
//! 1. [`instantiate`] - record owner, denom and contract version
//! 2. [`execute()`] - run one command (see [`execute`](mod@execute))
//! 3. [`sudo`] - the host's before-send callback, backed by [`gate`]
//! 4. [`query`] / [`query_with`] - read-only projections (see [`queries`])
//!
//! A command either commits all of its writes or none of them. The host
//! ledger call for mint, burn, forced transfer, admin change and metadata
//! happens after every check has passed and before the writes are committed.

#![deny(unsafe_code)]

pub mod config;
pub mod contract;
pub mod error;
pub mod execute;
pub mod gate;
pub mod host;
pub mod mocks;
pub mod queries;
pub mod response;

pub use config::{Pagination, CONTRACT_NAME, CONTRACT_VERSION};
pub use contract::{execute, get_contract_version, instantiate, query, query_with, sudo};
pub use error::{ContractError, HostError};
pub use gate::{
    before_send, check_transfer, GateDenial, LegVerdict, Transfer, TransferLeg, TransferVerdict,
};
pub use host::{normalize_address, validate_address, TokenFactory};
pub use mocks::{BatchMode, MockChain, MockTokenFactory, SendReport};
pub use response::Response;
