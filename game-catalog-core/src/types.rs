//! Data model types for the game catalog.
//!
//! These types represent the read-only dataset handed to the query engine:
//! games, categories, and the identifiers the favorites store keeps.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category id that means "no filter". Always present, always first.
pub const ALL_CATEGORY_ID: &str = "all";

// ── Game ────────────────────────────────────────────────────────────────────

/// Stable identifier of a game within one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u32);

impl From<u32> for GameId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of favorited game ids. Order is not significant; the `BTreeSet`
/// keeps serialized payloads deterministic.
pub type FavoriteSet = BTreeSet<GameId>;

/// A single catalog entry. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub developer: String,
    pub release_date: NaiveDate,
    /// Price in dollars. Zero means free to play.
    #[serde(default)]
    pub price: f64,
    /// Average user rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Game {
    /// Whether this game belongs to the category with the given id.
    ///
    /// The comparison is case-insensitive: category id `"strategy"` matches a
    /// game whose category is `"Strategy"`. The `all` sentinel matches everything.
    pub fn in_category(&self, category_id: &str) -> bool {
        category_id == ALL_CATEGORY_ID || same_category(&self.category, category_id)
    }
}

/// Category names and ids compare by their Unicode lowercase form everywhere:
/// filtering, counting, breakdowns and sorting.
pub fn same_category(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

// ── Category ────────────────────────────────────────────────────────────────

/// A browsable category, loaded alongside the games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    /// The sentinel "All Games" category.
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORY_ID.to_string(),
            name: "All Games".to_string(),
            icon: "🎮".to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

// ── Catalog ─────────────────────────────────────────────────────────────────

/// Errors raised while assembling a [`Catalog`] from provider data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate game id: {0}")]
    DuplicateId(GameId),

    #[error("Game {id} has rating {rating} outside 0.0..=5.0")]
    InvalidRating { id: GameId, rating: f64 },

    #[error("Game {id} has negative price {price}")]
    InvalidPrice { id: GameId, price: f64 },
}

/// The immutable dataset: every game plus the category list.
///
/// Construction validates the dataset invariants; afterwards the catalog is
/// only ever handed out by shared reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<Game>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, checking id uniqueness and value ranges.
    ///
    /// The `all` category is inserted at the front when missing and moved to
    /// the front when present elsewhere.
    pub fn new(games: Vec<Game>, mut categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            if !seen.insert(game.id) {
                return Err(CatalogError::DuplicateId(game.id));
            }
            if !(0.0..=5.0).contains(&game.rating) {
                return Err(CatalogError::InvalidRating {
                    id: game.id,
                    rating: game.rating,
                });
            }
            if game.price.is_nan() || game.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: game.id,
                    price: game.price,
                });
            }
        }

        match categories.iter().position(Category::is_all) {
            Some(0) => {}
            Some(pos) => {
                let all = categories.remove(pos);
                categories.insert(0, all);
            }
            None => categories.insert(0, Category::all()),
        }

        Ok(Self { games, categories })
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// Categories, with the `all` sentinel first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
