//! Favorites persistence and view composition for the game catalog.
//!
//! Owns the state the query engine in `game-catalog-core` deliberately lacks:
//! the durable favorite set, the activity log built from its changes, and
//! shared settings. The view composers join the two.

pub mod activity;
pub mod error;
pub mod favorites;
pub mod settings;
pub mod storage;
pub mod views;

pub use activity::{ACTIVITY_KEY, ActivityLog};
pub use error::StorageError;
pub use favorites::{FAVORITES_KEY, FavoriteChange, FavoritesEvent, FavoritesStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use views::{
    CategoriesView, FavoritesView, HomeView, ProfileView, categories_view, favorites_view,
    home_view, profile_view,
};

// Re-export the catalog types frontends need most.
pub use game_catalog_core::{Catalog, FavoriteSet, Game, GameId, SortKey};
