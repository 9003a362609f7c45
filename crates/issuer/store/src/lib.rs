//! Issuer Store - durable keyed state of the managed-token issuer.
//!
//! The host ledger hands each invocation an ordered key-value
//! [`Storage`](cosmwasm_std::Storage). Typed items and principal-keyed maps
//! over it are declared in [`state`]; [`WriteBatch`] collects a command's
//! writes so they reach contract storage together or not at all.

#![deny(unsafe_code)]

pub mod staging;
pub mod state;

pub use staging::WriteBatch;
