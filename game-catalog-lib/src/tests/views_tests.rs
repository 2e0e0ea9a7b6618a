use super::*;
use crate::favorites::{FavoriteChange, FavoritesStore};
use crate::storage::MemoryStore;
use chrono::NaiveDate;
use game_catalog_core::{Category, GameId};

fn game(id: u32, title: &str, category: &str, rating: f64, year: i32) -> Game {
    Game {
        id: GameId(id),
        title: title.to_string(),
        description: format!("{} for everyone", title),
        category: category.to_string(),
        developer: "Indie".to_string(),
        release_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        price: 0.0,
        rating,
        reviews: id * 10,
        tags: vec!["retro".to_string()],
        features: vec![],
    }
}

fn setup_catalog() -> Catalog {
    Catalog::new(
        vec![
            game(1, "Chess", "Strategy", 4.5, 2018),
            game(2, "Snake", "Arcade", 4.0, 2021),
            game(3, "Tetris", "Puzzle", 4.8, 2019),
            game(4, "Go", "Strategy", 4.1, 2022),
        ],
        vec![
            Category {
                id: "strategy".to_string(),
                name: "Strategy".to_string(),
                icon: String::new(),
            },
            Category {
                id: "arcade".to_string(),
                name: "Arcade".to_string(),
                icon: String::new(),
            },
            Category {
                id: "puzzle".to_string(),
                name: "Puzzle".to_string(),
                icon: String::new(),
            },
        ],
    )
    .unwrap()
}

fn ids(games: &[&Game]) -> Vec<u32> {
    games.iter().map(|g| g.id.0).collect()
}

fn favorites(list: &[u32]) -> FavoriteSet {
    list.iter().map(|&n| GameId(n)).collect()
}

#[test]
fn test_home_view() {
    let catalog = setup_catalog();
    let view = home_view(&catalog, &favorites(&[2, 77]), 2);
    assert_eq!(view.stats.total_games, 4);
    assert_eq!(ids(&view.featured), vec![3, 1]);
    assert_eq!(ids(&view.new_releases), vec![4, 2]);
    assert_eq!(view.categories[0].count, 4);
    assert_eq!(view.favorite_count, 1);
}

#[test]
fn test_categories_view_filters_and_sorts() {
    let catalog = setup_catalog();
    let view = categories_view(&catalog, "strategy", "", SortKey::Name);
    assert_eq!(ids(&view.games), vec![1, 4]);
    assert_eq!(view.stats.total_games, 2);
    assert_eq!(view.stats.average_rating, 4.3);
    assert_eq!(view.categories.len(), 4);

    // Tags are searched in this view
    let view = categories_view(&catalog, "all", "retro", SortKey::Rating);
    assert_eq!(ids(&view.games), vec![3, 1, 4, 2]);

    // Category names are not
    let view = categories_view(&catalog, "all", "arcade", SortKey::Name);
    assert!(view.games.is_empty());
}

#[test]
fn test_favorites_view_drops_stale_ids() {
    let catalog = setup_catalog();
    let view = favorites_view(&catalog, &favorites(&[1, 2, 99]), "", SortKey::Name);
    assert_eq!(ids(&view.games), vec![1, 2]);
    assert_eq!(view.stats.total_games, 2);
    assert_eq!(view.breakdown.len(), 2);
    assert_eq!(view.breakdown[0].percentage, 50.0);
}

#[test]
fn test_favorites_view_searches_category() {
    let catalog = setup_catalog();
    let favs = favorites(&[1, 2, 4]);

    let view = favorites_view(&catalog, &favs, "strat", SortKey::Rating);
    assert_eq!(ids(&view.games), vec![1, 4]);
    // Stats and breakdown cover every favorite, not just the search hits
    assert_eq!(view.stats.total_games, 3);

    // Tags are not searched in this view
    let view = favorites_view(&catalog, &favs, "retro", SortKey::Name);
    assert!(view.games.is_empty());
}

#[test]
fn test_favorites_view_empty() {
    let catalog = setup_catalog();
    let view = favorites_view(&catalog, &FavoriteSet::new(), "", SortKey::Name);
    assert!(view.games.is_empty());
    assert!(view.breakdown.is_empty());
    assert_eq!(view.stats.average_rating, 0.0);
}

#[test]
fn test_views_follow_store_changes() {
    let catalog = setup_catalog();
    let mut store = FavoritesStore::open(MemoryStore::new());

    store.toggle(GameId(3));
    let view = favorites_view(&catalog, store.snapshot(), "", SortKey::Name);
    assert_eq!(ids(&view.games), vec![3]);

    store.toggle(GameId(3));
    let view = favorites_view(&catalog, store.snapshot(), "", SortKey::Name);
    assert!(view.games.is_empty());
}

#[test]
fn test_profile_view() {
    let catalog = setup_catalog();
    let mut store = FavoritesStore::open(MemoryStore::new());
    let rx = store.subscribe();
    store.add(GameId(1));
    store.add(GameId(4));
    store.add(GameId(2));

    let mut activity = ActivityLog::default();
    activity.drain(&rx);

    let view = profile_view(&catalog, store.snapshot(), &activity, 2);
    assert_eq!(view.favorite_count, 3);
    assert_eq!(view.top_category.as_deref(), Some("Strategy"));
    assert_eq!(view.breakdown[0].count, 2);
    assert_eq!(view.breakdown[0].percentage, 66.7);
    assert_eq!(view.recent_activity.len(), 2);
    assert_eq!(
        view.recent_activity[0].change,
        FavoriteChange::Added { id: GameId(2) }
    );
}

#[test]
fn test_profile_view_without_favorites() {
    let catalog = setup_catalog();
    let activity = ActivityLog::default();
    let view = profile_view(&catalog, &FavoriteSet::new(), &activity, 5);
    assert_eq!(view.favorite_count, 0);
    assert!(view.top_category.is_none());
    assert!(view.breakdown.is_empty());
    assert!(view.recent_activity.is_empty());
}
