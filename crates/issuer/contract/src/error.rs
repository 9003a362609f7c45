use cosmwasm_std::{OverflowError, OverflowOperation, StdError, Uint128};
use issuer_policy::DenyReason;
use thiserror::Error;

/// Errors returned by commands, the transfer gate and queries.
///
/// A command that fails with any of these commits nothing.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("insufficient {action} allowance: required {required}, available {available}")]
    InsufficientAllowance {
        action: String,
        required: Uint128,
        available: Uint128,
    },

    #[error("the contract is frozen for denom \"{denom}\"")]
    Frozen { denom: String },

    #[error("the address '{address}' is blacklisted")]
    Blacklisted { address: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    #[error("arithmetic underflow")]
    ArithmeticUnderflow,

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

impl ContractError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ContractError::InvalidArgument(reason.into())
    }
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        match err.operation {
            OverflowOperation::Sub => ContractError::ArithmeticUnderflow,
            _ => ContractError::ArithmeticOverflow,
        }
    }
}

impl From<DenyReason> for ContractError {
    fn from(reason: DenyReason) -> Self {
        match reason {
            DenyReason::Unauthorized => ContractError::Unauthorized,
            DenyReason::InsufficientAllowance {
                quota,
                required,
                available,
            } => ContractError::InsufficientAllowance {
                action: quota.to_string(),
                required,
                available,
            },
        }
    }
}

/// Failures reported by the host ledger's token factory or bank.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("token factory rejected {operation}: {reason}")]
    TokenFactory { operation: String, reason: String },
}

impl HostError {
    pub fn token_factory(operation: &str, reason: impl Into<String>) -> Self {
        HostError::TokenFactory {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }
}
