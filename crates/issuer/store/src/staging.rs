use std::collections::BTreeMap;
use std::ops::Bound;

use cosmwasm_std::{Order, Record, Storage};
use tracing::debug;

/// Writes collected before any of them touch contract storage.
///
/// A `WriteBatch` is itself a [`Storage`], so typed items and maps save into
/// it unchanged. Reads see only what was staged; handlers read the live store
/// and stage into the batch. Committing cannot fail.
#[derive(Debug, Default)]
pub struct WriteBatch {
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Apply every staged write and removal. Returns the number applied.
    pub fn commit(self, store: &mut dyn Storage) -> usize {
        let count = self.writes.len();
        for (key, value) in self.writes {
            match value {
                Some(value) => store.set(&key, &value),
                None => store.remove(&key),
            }
        }
        debug!(writes = count, "Committed staged writes");
        count
    }
}

impl Storage for WriteBatch {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.writes.get(key).cloned().flatten()
    }

    fn range<'a>(
        &'a self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        let lower = start.map_or(Bound::Unbounded, |s| Bound::Included(s.to_vec()));
        let upper = end.map_or(Bound::Unbounded, |e| Bound::Excluded(e.to_vec()));
        if let (Bound::Included(s), Bound::Excluded(e)) = (&lower, &upper) {
            if s >= e {
                return Box::new(std::iter::empty());
            }
        }

        let staged = self
            .writes
            .range((lower, upper))
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.clone(), v.clone())));
        match order {
            Order::Ascending => Box::new(staged),
            Order::Descending => Box::new(staged.rev()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }
}
