pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod favorites;
pub(crate) mod home;
pub(crate) mod profile;

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_core::{format_price, format_rating, format_review_count, star_rating};
use game_catalog_lib::settings::AppSettings;
use game_catalog_lib::{
    ActivityLog, Catalog, FavoritesEvent, FavoritesStore, FileStore, Game, SortKey,
};

use crate::CliError;

/// Everything a command needs: settings, the loaded catalog, and the
/// favorites store with its activity log.
pub(crate) struct Session {
    pub settings: AppSettings,
    pub catalog: Catalog,
    pub favorites: FavoritesStore<FileStore>,
    pub activity: ActivityLog,
    activity_rx: Receiver<FavoritesEvent>,
    storage: FileStore,
}

impl Session {
    /// Resolve paths (CLI flag, then settings), load the dataset, and open
    /// the favorites store.
    pub(crate) fn open(
        settings: AppSettings,
        catalog_override: Option<PathBuf>,
        data_dir_override: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let dataset_path = catalog_override
            .or_else(|| settings.catalog.dataset_path.clone())
            .ok_or_else(|| {
                CliError::config(
                    "No dataset configured. Pass --catalog or set catalog.dataset_path in settings.toml",
                )
            })?;
        let catalog = game_catalog_core::load_catalog(&dataset_path)
            .map_err(|e| CliError::catalog(e.to_string()))?;

        let data_dir = data_dir_override.unwrap_or_else(|| settings.data_dir());
        log::debug!("Using data directory {}", data_dir.display());
        let storage = FileStore::new(data_dir);

        let mut favorites = FavoritesStore::open(storage.clone());
        let activity_rx = favorites.subscribe();
        let activity = ActivityLog::load(&storage);

        Ok(Self {
            settings,
            catalog,
            favorites,
            activity,
            activity_rx,
            storage,
        })
    }

    /// Sort key from a flag, falling back to the configured default.
    pub(crate) fn sort_key(&self, flag: Option<&str>) -> SortKey {
        match flag {
            Some(s) => SortKey::from_str_loose(s),
            None => self.settings.display.sort_key(),
        }
    }

    /// Record pending favorite changes and persist the activity log.
    pub(crate) fn close(mut self) {
        if self.activity.drain(&self.activity_rx) == 0 {
            return;
        }
        if let Err(e) = self.activity.save(&mut self.storage) {
            log::warn!("Failed to save activity log: {}", e);
        }
    }
}

/// Print one game as a single line: favorite marker, id, title, category,
/// stars, reviews and price.
pub(crate) fn print_game_row(game: &Game, is_favorite: bool) {
    let marker = if is_favorite { "♥" } else { " " };
    let stars = star_rating(game.rating).to_string();
    log::info!(
        "  {} {:>4}  {}  [{}]  {} {}  ({} reviews)  {}",
        marker.if_supports_color(Stdout, |t| t.red()),
        game.id.0,
        game.title.if_supports_color(Stdout, |t| t.bold()),
        game.category.if_supports_color(Stdout, |t| t.cyan()),
        stars.if_supports_color(Stdout, |t| t.yellow()),
        format_rating(game.rating),
        format_review_count(u64::from(game.reviews)),
        format_price(game.price),
    );
}

pub(crate) fn print_games(session: &Session, games: &[&Game]) {
    if games.is_empty() {
        log::info!("  (no games)");
        return;
    }
    for game in games {
        print_game_row(game, session.favorites.is_favorite(game.id));
    }
}
