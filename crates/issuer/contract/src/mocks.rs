//! In-memory host for tests.
//!
//! [`MockChain`] owns the host's mock dependencies and a [`MockTokenFactory`]
//! bank, and routes every send through the transfer gate the way a host ledger
//! with a before-send listener does.

use std::collections::BTreeMap;

use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{from_json, Addr, Coin, Env, Order, OwnedDeps, Record, Storage, Uint128};
use issuer_types::{DenomMetadata, ExecuteMsg, InstantiateMsg, QueryMsg, SudoMsg};
use serde::de::DeserializeOwned;

use crate::config::Pagination;
use crate::contract;
use crate::error::{ContractError, HostError};
use crate::gate::{self, GateDenial, LegVerdict, Transfer};
use crate::host::TokenFactory;
use crate::response::Response;

const MAX_SUBDENOM_LEN: usize = 44;
const MAX_CREATOR_LEN: usize = 75;
const MAX_DENOM_LEN: usize = 128;

/// Bank balances plus a token factory that enforces per-denom admins.
#[derive(Clone, Debug, Default)]
pub struct MockTokenFactory {
    admins: BTreeMap<String, Addr>,
    balances: BTreeMap<(Addr, String), Uint128>,
    supply: BTreeMap<String, Uint128>,
    metadata: BTreeMap<String, DenomMetadata>,
    failure: Option<String>,
}

impl MockTokenFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a denom created out of band.
    pub fn register_denom(&mut self, denom: impl Into<String>, admin: Addr) {
        self.admins.insert(denom.into(), admin);
    }

    /// Make the next token factory call fail with `reason`.
    pub fn fail_next(&mut self, reason: impl Into<String>) {
        self.failure = Some(reason.into());
    }

    pub fn admin_of(&self, denom: &str) -> Option<&Addr> {
        self.admins.get(denom)
    }

    pub fn metadata_of(&self, denom: &str) -> Option<&DenomMetadata> {
        self.metadata.get(denom)
    }

    pub fn balance(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.balances
            .get(&(addr.clone(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    pub fn supply(&self, denom: &str) -> Uint128 {
        self.supply.get(denom).copied().unwrap_or_default()
    }

    /// Credit funds outside the token factory, e.g. a native denom.
    pub fn fund(&mut self, addr: &Addr, coin: &Coin) -> Result<(), HostError> {
        let supply = self
            .supply(&coin.denom)
            .checked_add(coin.amount)
            .map_err(|e| HostError::token_factory("fund", e.to_string()))?;
        self.credit(addr, coin, "fund")?;
        self.supply.insert(coin.denom.clone(), supply);
        Ok(())
    }

    /// Move funds between accounts without consulting any gate.
    pub fn transfer(&mut self, from: &Addr, to: &Addr, coin: &Coin) -> Result<(), HostError> {
        self.debit(from, coin, "send")?;
        self.credit(to, coin, "send")
    }

    fn credit(&mut self, addr: &Addr, coin: &Coin, operation: &str) -> Result<(), HostError> {
        let balance = self
            .balances
            .entry((addr.clone(), coin.denom.clone()))
            .or_default();
        *balance = balance
            .checked_add(coin.amount)
            .map_err(|e| HostError::token_factory(operation, e.to_string()))?;
        Ok(())
    }

    fn debit(&mut self, addr: &Addr, coin: &Coin, operation: &str) -> Result<(), HostError> {
        let current = self.balance(addr, &coin.denom);
        let left = current.checked_sub(coin.amount).map_err(|_| {
            HostError::token_factory(
                operation,
                format!("insufficient funds: {addr} holds {current}{}", coin.denom),
            )
        })?;
        self.balances
            .insert((addr.clone(), coin.denom.clone()), left);
        Ok(())
    }

    fn check(&mut self, operation: &str, sender: &Addr, denom: &str) -> Result<(), HostError> {
        if let Some(reason) = self.failure.take() {
            return Err(HostError::token_factory(operation, reason));
        }
        match self.admins.get(denom) {
            Some(admin) if admin == sender => Ok(()),
            Some(_) => Err(HostError::token_factory(operation, "sender is not the denom admin")),
            None => Err(HostError::token_factory(
                operation,
                format!("denom {denom} does not exist"),
            )),
        }
    }
}

impl TokenFactory for MockTokenFactory {
    fn create_denom(&mut self, sender: &Addr, subdenom: &str) -> Result<String, HostError> {
        if let Some(reason) = self.failure.take() {
            return Err(HostError::token_factory("create_denom", reason));
        }
        let denom = format!("factory/{sender}/{subdenom}");
        if sender.as_str().contains('/')
            || sender.as_str().len() > MAX_CREATOR_LEN
            || subdenom.len() > MAX_SUBDENOM_LEN
            || denom.len() > MAX_DENOM_LEN
        {
            return Err(HostError::token_factory(
                "create_denom",
                format!("invalid denom {denom}"),
            ));
        }
        if self.admins.contains_key(&denom) {
            return Err(HostError::token_factory(
                "create_denom",
                format!("denom {denom} already exists"),
            ));
        }
        self.admins.insert(denom.clone(), sender.clone());
        Ok(denom)
    }

    fn mint(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        to: &Addr,
    ) -> Result<(), HostError> {
        self.check("mint", sender, denom)?;
        let supply = self
            .supply(denom)
            .checked_add(amount)
            .map_err(|e| HostError::token_factory("mint", e.to_string()))?;
        self.credit(to, &Coin::new(amount.u128(), denom), "mint")?;
        self.supply.insert(denom.to_string(), supply);
        Ok(())
    }

    fn burn(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        from: &Addr,
    ) -> Result<(), HostError> {
        self.check("burn", sender, denom)?;
        let supply = self
            .supply(denom)
            .checked_sub(amount)
            .map_err(|e| HostError::token_factory("burn", e.to_string()))?;
        self.debit(from, &Coin::new(amount.u128(), denom), "burn")?;
        self.supply.insert(denom.to_string(), supply);
        Ok(())
    }

    fn force_transfer(
        &mut self,
        sender: &Addr,
        denom: &str,
        amount: Uint128,
        from: &Addr,
        to: &Addr,
    ) -> Result<(), HostError> {
        self.check("force_transfer", sender, denom)?;
        let coin = Coin::new(amount.u128(), denom);
        self.debit(from, &coin, "force_transfer")?;
        self.credit(to, &coin, "force_transfer")
    }

    fn change_admin(
        &mut self,
        sender: &Addr,
        denom: &str,
        new_admin: &Addr,
    ) -> Result<(), HostError> {
        self.check("change_admin", sender, denom)?;
        self.admins.insert(denom.to_string(), new_admin.clone());
        Ok(())
    }

    fn set_denom_metadata(
        &mut self,
        sender: &Addr,
        metadata: &DenomMetadata,
    ) -> Result<(), HostError> {
        self.check("set_denom_metadata", sender, &metadata.base)?;
        self.metadata.insert(metadata.base.clone(), metadata.clone());
        Ok(())
    }
}

/// How the host treats a batched transfer with a blocked leg.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// Deliver the legs the gate allowed and drop the rest.
    #[default]
    PerLeg,
    /// Abort the whole transfer on any blocked leg.
    Atomic,
}

/// Which legs of a send were delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendReport {
    pub delivered: Vec<usize>,
    pub blocked: Vec<(usize, GateDenial)>,
}

/// A single issuer instance on an in-memory host ledger.
pub struct MockChain {
    pub deps: OwnedDeps<MockStorage, MockApi, MockQuerier>,
    pub bank: MockTokenFactory,
    pub env: Env,
    pub batch_mode: BatchMode,
    pub pagination: Pagination,
}

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            deps: mock_dependencies(),
            bank: MockTokenFactory::new(),
            env: mock_env(),
            batch_mode: BatchMode::default(),
            pagination: Pagination::default(),
        }
    }

    pub fn with_batch_mode(mut self, mode: BatchMode) -> Self {
        self.batch_mode = mode;
        self
    }

    pub fn contract_addr(&self) -> &Addr {
        &self.env.contract.address
    }

    /// Advance one block of five seconds.
    pub fn next_block(&mut self) {
        self.env.block.height += 1;
        self.env.block.time = self.env.block.time.plus_seconds(5);
    }

    pub fn instantiate(
        &mut self,
        sender: &str,
        msg: InstantiateMsg,
    ) -> Result<Response, ContractError> {
        contract::instantiate(
            self.deps.as_mut(),
            &self.env,
            &mock_info(sender, &[]),
            msg,
            &mut self.bank,
        )
    }

    pub fn execute(&mut self, sender: &str, msg: ExecuteMsg) -> Result<Response, ContractError> {
        self.next_block();
        contract::execute(
            self.deps.as_mut(),
            &self.env,
            &mock_info(sender, &[]),
            msg,
            &mut self.bank,
        )
    }

    pub fn sudo(&self, msg: SudoMsg) -> Result<Response, ContractError> {
        contract::sudo(self.deps.as_ref(), &self.env, msg)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: QueryMsg) -> Result<T, ContractError> {
        let bin = contract::query_with(self.deps.as_ref(), &self.env, msg, &self.pagination)?;
        Ok(from_json(bin)?)
    }

    /// Submit a batched transfer. Every leg passes the transfer gate first;
    /// blocked legs are handled according to [`BatchMode`]. Balance changes
    /// apply only if every delivered leg is funded.
    pub fn send(&mut self, transfer: &Transfer) -> Result<SendReport, ContractError> {
        let verdict = gate::check_transfer(self.deps.as_ref(), transfer)?;

        let mut bank = self.bank.clone();
        let mut report = SendReport::default();
        for (idx, (leg, leg_verdict)) in transfer.legs.iter().zip(&verdict.legs).enumerate() {
            match leg_verdict {
                LegVerdict::Denied(denial) => match self.batch_mode {
                    BatchMode::Atomic => return Err(denial.clone().into()),
                    BatchMode::PerLeg => report.blocked.push((idx, denial.clone())),
                },
                LegVerdict::Allowed | LegVerdict::Unmanaged => {
                    bank.transfer(&leg.from, &leg.to, &leg.coin)?;
                    report.delivered.push(idx);
                }
            }
        }

        self.bank = bank;
        Ok(report)
    }

    pub fn balance(&self, addr: &str, denom: &str) -> Uint128 {
        self.bank.balance(&Addr::unchecked(addr), denom)
    }

    /// Every raw entry of contract storage, in key order.
    pub fn storage_snapshot(&self) -> Vec<Record> {
        self.deps
            .storage
            .range(None, None, Order::Ascending)
            .collect()
    }
}
