//! Recent favorite activity, shown on the profile view.
//!
//! The log is built from real [`FavoritesEvent`]s, newest first, and capped
//! at a fixed length. It persists under [`ACTIVITY_KEY`] with the same rules
//! as the favorite set: missing or malformed data loads as an empty log.

use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::favorites::{FavoriteChange, FavoritesEvent};
use crate::storage::KeyValueStore;

/// Storage key holding the serialized activity log.
pub const ACTIVITY_KEY: &str = "activity";

pub const DEFAULT_ACTIVITY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Not persisted; a loaded log always gets the default cap.
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
    entries: VecDeque<FavoritesEvent>,
}

fn default_capacity() -> usize {
    DEFAULT_ACTIVITY_CAPACITY
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }
}

impl ActivityLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Load the persisted log, falling back to an empty one.
    pub fn load<S: KeyValueStore>(storage: &S) -> Self {
        match storage.get(ACTIVITY_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<Self>(&payload) {
                Ok(mut log) => {
                    log.entries.truncate(log.capacity);
                    log
                }
                Err(e) => {
                    log::warn!("Ignoring malformed activity payload: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read activity log: {}", e);
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, storage: &mut S) -> Result<(), StorageError> {
        let payload = serde_json::to_string(self)?;
        storage.set(ACTIVITY_KEY, &payload)
    }

    /// Record one event. Persistence failures are not activity and are skipped.
    pub fn record(&mut self, event: FavoritesEvent) {
        if matches!(event.change, FavoriteChange::PersistFailed { .. }) {
            return;
        }
        self.entries.push_front(event);
        self.entries.truncate(self.capacity);
    }

    /// Record every event waiting on `rx` without blocking. Returns how many
    /// events were taken off the channel.
    pub fn drain(&mut self, rx: &Receiver<FavoritesEvent>) -> usize {
        let mut taken = 0;
        while let Ok(event) = rx.try_recv() {
            self.record(event);
            taken += 1;
        }
        taken
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &FavoritesEvent> {
        self.entries.iter().take(n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/activity_tests.rs"]
mod tests;
