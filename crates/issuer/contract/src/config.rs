use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Contract identity recorded at instantiation.
pub const CONTRACT_NAME: &str = "crates.io:issuer-contract";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Page sizes for listing queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Page size when the caller gives no limit (default: 10)
    pub default_limit: u32,
    /// Upper bound on any requested limit (default: 30)
    pub max_limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 30,
        }
    }
}

impl Pagination {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.default_limit == 0 {
            return Err(ContractError::invalid("default page limit must be positive"));
        }
        if self.default_limit > self.max_limit {
            return Err(ContractError::invalid(format!(
                "default page limit {} exceeds maximum {}",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }

    /// Resolve a caller-supplied limit to a page size.
    ///
    /// Absent means the default; anything above the maximum is clamped. Zero
    /// is rejected since it could never make progress.
    pub fn page_size(&self, limit: Option<u32>) -> Result<usize, ContractError> {
        match limit {
            Some(0) => Err(ContractError::invalid("limit must be positive")),
            Some(limit) => Ok(limit.min(self.max_limit) as usize),
            None => Ok(self.default_limit as usize),
        }
    }
}
