//! Transfer gate.
//!
//! A read-only predicate the host ledger invokes before it moves the managed
//! asset. It consults only the frozen flag and the blacklist; quotas and roles
//! play no part. It never writes to storage and answers in a bounded number of
//! reads: one for the denom, one for the frozen flag and at most two blacklist
//! lookups per leg.
//!
//! The gate renders one verdict per leg. Whether a denied managed leg aborts
//! the rest of a batched transfer is the host's decision.

use cosmwasm_std::{Addr, Coin, Deps, StdResult, Storage};
use issuer_store::state;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ContractError;

/// One movement of one coin from one sender to one recipient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferLeg {
    pub from: Addr,
    pub to: Addr,
    pub coin: Coin,
}

/// A batched transfer as submitted to the host ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub legs: Vec<TransferLeg>,
}

impl Transfer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leg(mut self, from: Addr, to: Addr, coin: Coin) -> Self {
        self.legs.push(TransferLeg { from, to, coin });
        self
    }

    /// One sender paying several recipients, possibly in several denoms.
    pub fn multi_send(from: &Addr, outputs: impl IntoIterator<Item = (Addr, Coin)>) -> Self {
        Self {
            legs: outputs
                .into_iter()
                .map(|(to, coin)| TransferLeg {
                    from: from.clone(),
                    to,
                    coin,
                })
                .collect(),
        }
    }
}

/// Why the gate refused a managed leg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDenial {
    Frozen { denom: String },
    Blacklisted { address: Addr },
}

impl From<GateDenial> for ContractError {
    fn from(denial: GateDenial) -> Self {
        match denial {
            GateDenial::Frozen { denom } => ContractError::Frozen { denom },
            GateDenial::Blacklisted { address } => ContractError::Blacklisted {
                address: address.into_string(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegVerdict {
    /// The leg moves some other denom; the gate has no say.
    Unmanaged,
    Allowed,
    Denied(GateDenial),
}

impl LegVerdict {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, LegVerdict::Denied(_))
    }
}

/// Verdicts for every leg of a transfer, in leg order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferVerdict {
    pub legs: Vec<LegVerdict>,
}

impl TransferVerdict {
    pub fn is_allowed(&self) -> bool {
        self.legs.iter().all(LegVerdict::is_allowed)
    }

    pub fn first_denial(&self) -> Option<&GateDenial> {
        self.legs.iter().find_map(|verdict| match verdict {
            LegVerdict::Denied(denial) => Some(denial),
            _ => None,
        })
    }

    /// Indices of the legs the gate refused.
    pub fn denied_legs(&self) -> impl Iterator<Item = usize> + '_ {
        self.legs
            .iter()
            .enumerate()
            .filter(|(_, verdict)| !verdict.is_allowed())
            .map(|(idx, _)| idx)
    }
}

/// Snapshot of the state the gate consults, read once per check.
struct GateState {
    denom: String,
    frozen: bool,
}

impl GateState {
    fn load(store: &dyn Storage) -> StdResult<Self> {
        Ok(Self {
            denom: state::denom(store)?,
            frozen: state::is_frozen(store)?,
        })
    }

    fn evaluate(
        &self,
        store: &dyn Storage,
        from: &Addr,
        to: &Addr,
        coin: &Coin,
    ) -> StdResult<LegVerdict> {
        if coin.denom != self.denom {
            return Ok(LegVerdict::Unmanaged);
        }
        if self.frozen {
            return Ok(LegVerdict::Denied(GateDenial::Frozen {
                denom: self.denom.clone(),
            }));
        }
        for party in [from, to] {
            if state::is_blacklisted(store, party)? {
                return Ok(LegVerdict::Denied(GateDenial::Blacklisted {
                    address: party.clone(),
                }));
            }
        }
        Ok(LegVerdict::Allowed)
    }
}

/// Check a single leg. This is the form the host invokes per leg.
pub fn before_send(deps: Deps, from: &Addr, to: &Addr, coin: &Coin) -> Result<(), ContractError> {
    let gate = GateState::load(deps.storage)?;
    let verdict = gate.evaluate(deps.storage, from, to, coin)?;

    debug!(
        from = %from,
        to = %to,
        coin = %coin,
        allowed = verdict.is_allowed(),
        "Transfer gate evaluated"
    );

    match verdict {
        LegVerdict::Denied(denial) => {
            warn!(from = %from, to = %to, denial = ?denial, "Transfer blocked");
            Err(denial.into())
        }
        LegVerdict::Unmanaged | LegVerdict::Allowed => Ok(()),
    }
}

/// Check every leg of a batched transfer.
pub fn check_transfer(deps: Deps, transfer: &Transfer) -> Result<TransferVerdict, ContractError> {
    let gate = GateState::load(deps.storage)?;
    let legs = transfer
        .legs
        .iter()
        .map(|leg| gate.evaluate(deps.storage, &leg.from, &leg.to, &leg.coin))
        .collect::<StdResult<Vec<_>>>()?;
    let verdict = TransferVerdict { legs };

    debug!(
        legs = transfer.legs.len(),
        allowed = verdict.is_allowed(),
        "Batched transfer evaluated"
    );
    if let Some(denial) = verdict.first_denial() {
        warn!(denial = ?denial, "Batched transfer has blocked legs");
    }

    Ok(verdict)
}
