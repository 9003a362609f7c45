use chrono::{DateTime, Utc};
use cosmwasm_std::{Env, MessageInfo};
use issuer_types::{EventKind, IssuerEvent};
use serde::{Deserialize, Serialize};

/// Outcome of a committed command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub events: Vec<IssuerEvent>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(mut self, event: IssuerEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Record `kind` as performed by the caller at the current block.
    pub fn record(env: &Env, info: &MessageInfo, kind: EventKind) -> Self {
        Self::new().add_event(IssuerEvent {
            actor: info.sender.clone(),
            height: env.block.height,
            at: block_time(env),
            kind,
        })
    }

    pub fn event(&self, action: &str) -> Option<&IssuerEvent> {
        self.events.iter().find(|e| e.kind.action() == action)
    }
}

/// Block time as a UTC timestamp.
pub fn block_time(env: &Env) -> DateTime<Utc> {
    let time = env.block.time;
    DateTime::from_timestamp(time.seconds() as i64, time.subsec_nanos() as u32)
        .unwrap_or_default()
}
