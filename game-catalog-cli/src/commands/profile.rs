use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_core::{format_rating, format_review_count};
use game_catalog_lib::{FavoriteChange, FavoritesEvent, profile_view};

use crate::CliError;

use super::Session;

pub(crate) fn run_profile(session: &Session) -> Result<(), CliError> {
    let view = profile_view(
        &session.catalog,
        session.favorites.snapshot(),
        &session.activity,
        session.settings.display.recent_activity,
    );

    log::info!("{}", "Profile".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Favorites:        {:>8}", view.favorite_count);
    log::info!(
        "  Average rating:   {:>8}",
        format_rating(view.favorite_stats.average_rating)
    );
    log::info!(
        "  Total reviews:    {:>8}",
        format_review_count(view.favorite_stats.total_reviews)
    );
    log::info!(
        "  Top category:     {:>8}",
        view.top_category.as_deref().unwrap_or("-")
    );
    crate::log_blank();

    if !view.breakdown.is_empty() {
        log::info!("{}", "By category".if_supports_color(Stdout, |t| t.bold()));
        for share in &view.breakdown {
            log::info!(
                "  {:<20} {:>4}  {:>5.1}%",
                share.category,
                share.count,
                share.percentage
            );
        }
        crate::log_blank();
    }

    log::info!("{}", "Recent activity".if_supports_color(Stdout, |t| t.bold()));
    if view.recent_activity.is_empty() {
        log::info!("  (none yet)");
    }
    for event in &view.recent_activity {
        log::info!("  {}  {}", event.at.format("%Y-%m-%d %H:%M"), describe(session, event));
    }

    Ok(())
}

fn describe(session: &Session, event: &FavoritesEvent) -> String {
    let title = |id| {
        session
            .catalog
            .get(id)
            .map(|g| g.title.clone())
            .unwrap_or_else(|| format!("#{}", id))
    };
    match &event.change {
        FavoriteChange::Added { id } => format!("Added {} to favorites", title(*id)),
        FavoriteChange::Removed { id } => format!("Removed {} from favorites", title(*id)),
        FavoriteChange::Cleared { count } => format!("Cleared {} favorites", count),
        FavoriteChange::PersistFailed { message } => format!("Save failed: {}", message),
    }
}
