//! View composers: one display-ready snapshot per screen.
//!
//! Each function combines query-engine output with a favorite-set snapshot.
//! They are pure over their arguments; callers rebuild a view whenever the
//! catalog, the favorites, or the query changes.

use game_catalog_core::{
    Catalog, CatalogStats, CategoryCount, CategoryShare, FavoriteSet, Game, QuerySpec,
    SearchFields, SortKey, category_breakdown, category_counts, favorite_subset, run_query,
    sort_games,
};

use crate::activity::ActivityLog;
use crate::favorites::FavoritesEvent;

// ── Home ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct HomeView<'a> {
    pub stats: CatalogStats,
    /// Highest rated games.
    pub featured: Vec<&'a Game>,
    /// Most recently released games.
    pub new_releases: Vec<&'a Game>,
    pub categories: Vec<CategoryCount<'a>>,
    /// Favorites that still exist in the catalog.
    pub favorite_count: usize,
}

pub fn home_view<'a>(
    catalog: &'a Catalog,
    favorites: &FavoriteSet,
    featured_count: usize,
) -> HomeView<'a> {
    HomeView {
        stats: CatalogStats::from_games(catalog.games()),
        featured: top_by(catalog.games(), SortKey::Rating, featured_count),
        new_releases: top_by(catalog.games(), SortKey::Newest, featured_count),
        categories: category_counts(catalog),
        favorite_count: favorite_subset(catalog.games(), favorites).len(),
    }
}

fn top_by(games: &[Game], key: SortKey, n: usize) -> Vec<&Game> {
    let mut sorted: Vec<&Game> = games.iter().collect();
    sort_games(&mut sorted, key);
    sorted.truncate(n);
    sorted
}

// ── Categories ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CategoriesView<'a> {
    pub categories: Vec<CategoryCount<'a>>,
    pub games: Vec<&'a Game>,
    pub stats: CatalogStats,
}

/// Browse the catalog by category. Searches title, description, tags and features.
pub fn categories_view<'a>(
    catalog: &'a Catalog,
    category_id: &str,
    search_term: &str,
    sort_key: SortKey,
) -> CategoriesView<'a> {
    let query = QuerySpec::new(SearchFields::CATEGORIES_VIEW)
        .with_category(category_id)
        .with_search(search_term)
        .with_sort(sort_key);
    let games = run_query(catalog.games(), &query);
    CategoriesView {
        categories: category_counts(catalog),
        stats: CatalogStats::from_games(games.iter().copied()),
        games,
    }
}

// ── Favorites ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FavoritesView<'a> {
    /// Favorites after search and sort.
    pub games: Vec<&'a Game>,
    /// Stats over every favorite, ignoring the search term.
    pub stats: CatalogStats,
    pub breakdown: Vec<CategoryShare>,
}

/// The user's favorites. Searches title, description and category.
///
/// Favorite ids missing from the catalog are dropped here; the favorite set
/// itself is left alone.
pub fn favorites_view<'a>(
    catalog: &'a Catalog,
    favorites: &FavoriteSet,
    search_term: &str,
    sort_key: SortKey,
) -> FavoritesView<'a> {
    let subset = favorite_subset(catalog.games(), favorites);
    let query = QuerySpec::new(SearchFields::FAVORITES_VIEW)
        .with_search(search_term)
        .with_sort(sort_key);
    FavoritesView {
        games: run_query(subset.iter().copied(), &query),
        stats: CatalogStats::from_games(subset.iter().copied()),
        breakdown: category_breakdown(subset.iter().copied()),
    }
}

// ── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ProfileView<'a> {
    pub favorite_count: usize,
    pub favorite_stats: CatalogStats,
    pub breakdown: Vec<CategoryShare>,
    /// Category holding the most favorites, if any.
    pub top_category: Option<String>,
    /// Newest first.
    pub recent_activity: Vec<&'a FavoritesEvent>,
}

pub fn profile_view<'a>(
    catalog: &Catalog,
    favorites: &FavoriteSet,
    activity: &'a ActivityLog,
    activity_limit: usize,
) -> ProfileView<'a> {
    let subset = favorite_subset(catalog.games(), favorites);
    let breakdown = category_breakdown(subset.iter().copied());
    ProfileView {
        favorite_count: subset.len(),
        favorite_stats: CatalogStats::from_games(subset.iter().copied()),
        top_category: breakdown.first().map(|s| s.category.clone()),
        breakdown,
        recent_activity: activity.recent(activity_limit).collect(),
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
