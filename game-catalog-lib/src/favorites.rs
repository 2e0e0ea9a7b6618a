//! The favorites store: the one owner of the user's favorite set.
//!
//! Every view consults the same [`FavoritesStore`], which is created once and
//! passed around by reference. Consumers that need to react to changes call
//! [`FavoritesStore::subscribe`] and receive a [`FavoritesEvent`] for each
//! applied change.
//!
//! Persistence writes the whole set as one JSON array under
//! [`FAVORITES_KEY`]. A failed write never rolls back the in-memory change;
//! it is logged, kept in [`FavoritesStore::last_persist_error`], and sent to
//! subscribers.

use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use game_catalog_core::{FavoriteSet, GameId};

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized favorite set.
pub const FAVORITES_KEY: &str = "favorites";

/// What changed in the favorite set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FavoriteChange {
    Added { id: GameId },
    Removed { id: GameId },
    Cleared { count: usize },
    /// The change before this one could not be written to durable storage.
    PersistFailed { message: String },
}

/// A timestamped change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesEvent {
    pub at: DateTime<Utc>,
    pub change: FavoriteChange,
}

impl FavoritesEvent {
    fn now(change: FavoriteChange) -> Self {
        Self {
            at: Utc::now(),
            change,
        }
    }
}

pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    ids: FavoriteSet,
    subscribers: Vec<Sender<FavoritesEvent>>,
    last_error: Option<StorageError>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the favorite set from `storage`.
    ///
    /// A missing payload gives an empty set. So does a read failure or a
    /// payload that is not a JSON array of ids; those are logged and the
    /// stored value is left untouched until the next write replaces it.
    pub fn open(storage: S) -> Self {
        let ids = match storage.get(FAVORITES_KEY) {
            Ok(Some(payload)) => match serde_json::from_str::<FavoriteSet>(&payload) {
                Ok(ids) => ids,
                Err(e) => {
                    log::warn!("Ignoring malformed favorites payload: {}", e);
                    FavoriteSet::new()
                }
            },
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                log::warn!("Failed to read favorites, starting empty: {}", e);
                FavoriteSet::new()
            }
        };
        log::debug!("Loaded {} favorites", ids.len());

        Self {
            storage,
            ids,
            subscribers: Vec::new(),
            last_error: None,
        }
    }

    pub fn is_favorite(&self, id: GameId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id`. Returns `false` (and writes nothing) if it was already present.
    pub fn add(&mut self, id: GameId) -> bool {
        if !self.ids.insert(id) {
            return false;
        }
        self.commit(FavoriteChange::Added { id });
        true
    }

    /// Remove `id`. Returns `false` (and writes nothing) if it was absent.
    pub fn remove(&mut self, id: GameId) -> bool {
        if !self.ids.remove(&id) {
            return false;
        }
        self.commit(FavoriteChange::Removed { id });
        true
    }

    /// Flip membership of `id` and return the new state.
    ///
    /// Exactly one of add or remove runs, so exactly one write happens.
    pub fn toggle(&mut self, id: GameId) -> bool {
        if self.is_favorite(id) {
            self.remove(id);
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Remove every id with a single write. Returns `false` if already empty.
    pub fn clear_all(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        let count = self.ids.len();
        self.ids.clear();
        self.commit(FavoriteChange::Cleared { count });
        true
    }

    /// An owned snapshot of the favorite set.
    pub fn list(&self) -> FavoriteSet {
        self.ids.clone()
    }

    /// Borrow the current favorite set without copying.
    pub fn snapshot(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The most recent persistence failure, cleared by the next successful write.
    pub fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_error.as_ref()
    }

    /// Receive an event for every change applied from now on.
    pub fn subscribe(&mut self) -> Receiver<FavoritesEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Give back the storage, e.g. to reopen the store from it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn commit(&mut self, change: FavoriteChange) {
        let persisted = self.persist();
        self.notify(FavoritesEvent::now(change));
        match persisted {
            Ok(()) => self.last_error = None,
            Err(e) => {
                log::warn!("Failed to save favorites: {}", e);
                let message = e.to_string();
                self.last_error = Some(e);
                self.notify(FavoritesEvent::now(FavoriteChange::PersistFailed { message }));
            }
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.ids)?;
        self.storage.set(FAVORITES_KEY, &payload)
    }

    fn notify(&mut self, event: FavoritesEvent) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
#[path = "tests/favorites_tests.rs"]
mod tests;
