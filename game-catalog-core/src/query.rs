//! The catalog query engine.
//!
//! Every function here is a pure derivation over borrowed games: nothing is
//! cached, nothing is mutated, and calling twice with the same inputs yields
//! the same sequence in the same order. Callers re-run the pipeline whenever
//! the dataset, favorite snapshot, or query changes.

use std::cmp::Ordering;

use crate::types::{ALL_CATEGORY_ID, Catalog, Category, FavoriteSet, Game};

// ── Sort keys ───────────────────────────────────────────────────────────────

/// Ordering applied as the last stage of the pipeline. All sorts are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Title, case-insensitive, ascending.
    Name,
    /// Rating, highest first.
    Rating,
    /// Review count, highest first.
    Reviews,
    /// Release date, most recent first.
    Newest,
    /// Category name, case-insensitive, ascending.
    Category,
    /// Keep the incoming order.
    #[default]
    Unsorted,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Newest => "newest",
            Self::Category => "category",
            Self::Unsorted => "none",
        }
    }

    /// Parse a sort key; anything unrecognized becomes [`SortKey::Unsorted`].
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "name" | "title" => Self::Name,
            "rating" => Self::Rating,
            "reviews" => Self::Reviews,
            "newest" | "date" => Self::Newest,
            "category" => Self::Category,
            "" | "none" => Self::Unsorted,
            other => {
                log::debug!("Unknown sort key '{}', leaving results unsorted", other);
                Self::Unsorted
            }
        }
    }
}

// ── Search fields ───────────────────────────────────────────────────────────

/// Which game fields a search term is matched against.
///
/// Views search different fields, so every search call names its field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchFields {
    pub title: bool,
    pub description: bool,
    /// Tags and features.
    pub tags: bool,
    pub category: bool,
    pub developer: bool,
}

impl SearchFields {
    /// Title, description, tags and features.
    pub const CATEGORIES_VIEW: Self = Self {
        title: true,
        description: true,
        tags: true,
        category: false,
        developer: false,
    };

    /// Title, description and category.
    pub const FAVORITES_VIEW: Self = Self {
        title: true,
        description: true,
        tags: false,
        category: true,
        developer: false,
    };

    pub const ALL: Self = Self {
        title: true,
        description: true,
        tags: true,
        category: true,
        developer: true,
    };

    /// `needle` must already be lowercased.
    fn matches(&self, game: &Game, needle: &str) -> bool {
        (self.title && contains_lower(&game.title, needle))
            || (self.description && contains_lower(&game.description, needle))
            || (self.tags
                && game
                    .tags
                    .iter()
                    .chain(&game.features)
                    .any(|t| contains_lower(t, needle)))
            || (self.category && contains_lower(&game.category, needle))
            || (self.developer && contains_lower(&game.developer, needle))
    }
}

fn contains_lower(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ── QuerySpec ───────────────────────────────────────────────────────────────

/// One derived view: category filter, search term, sort key, and the fields
/// the search term applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub category_id: String,
    pub search_term: String,
    pub sort_key: SortKey,
    pub fields: SearchFields,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            category_id: ALL_CATEGORY_ID.to_string(),
            search_term: String::new(),
            sort_key: SortKey::Unsorted,
            fields: SearchFields::CATEGORIES_VIEW,
        }
    }
}

impl QuerySpec {
    pub fn new(fields: SearchFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

// ── Pipeline stages ─────────────────────────────────────────────────────────

/// Stage 1: keep games in the given category. `all` keeps everything; an
/// unknown category id yields an empty result.
pub fn filter_by_category<'a, I>(games: I, category_id: &str) -> Vec<&'a Game>
where
    I: IntoIterator<Item = &'a Game>,
{
    games
        .into_iter()
        .filter(|g| g.in_category(category_id))
        .collect()
}

/// Stage 2: keep games where `term` occurs (case-insensitively) in any of the
/// selected fields. Only an empty term passes everything through; whitespace is
/// part of the substring like any other character.
pub fn search<'a, I>(games: I, term: &str, fields: SearchFields) -> Vec<&'a Game>
where
    I: IntoIterator<Item = &'a Game>,
{
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return games.into_iter().collect();
    }
    games
        .into_iter()
        .filter(|g| fields.matches(g, &needle))
        .collect()
}

/// Stage 3: stable sort in place. Equal keys keep their incoming relative order.
pub fn sort_games(games: &mut [&Game], key: SortKey) {
    match key {
        SortKey::Name => games.sort_by(|a, b| cmp_ignore_case(&a.title, &b.title)),
        SortKey::Rating => games.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Reviews => games.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        SortKey::Newest => games.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        SortKey::Category => games.sort_by(|a, b| cmp_ignore_case(&a.category, &b.category)),
        SortKey::Unsorted => {}
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Run the full pipeline: category filter, then search, then sort.
pub fn run_query<'a, I>(games: I, query: &QuerySpec) -> Vec<&'a Game>
where
    I: IntoIterator<Item = &'a Game>,
{
    let by_category = filter_by_category(games, &query.category_id);
    let mut results = search(by_category, &query.search_term, query.fields);
    sort_games(&mut results, query.sort_key);
    results
}

// ── Derived collections ─────────────────────────────────────────────────────

/// Number of games in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount<'a> {
    pub category: &'a Category,
    pub count: usize,
}

/// Count games per category, in category order. `all` counts the whole dataset.
pub fn category_counts(catalog: &Catalog) -> Vec<CategoryCount<'_>> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryCount {
            category,
            count: if category.is_all() {
                catalog.len()
            } else {
                catalog
                    .games()
                    .iter()
                    .filter(|g| g.in_category(&category.id))
                    .count()
            },
        })
        .collect()
}

/// The dataset games whose id is in `favorites`, in dataset order.
///
/// Ids with no matching game (stale favorites) are skipped.
pub fn favorite_subset<'a>(games: &'a [Game], favorites: &FavoriteSet) -> Vec<&'a Game> {
    games.iter().filter(|g| favorites.contains(&g.id)).collect()
}
