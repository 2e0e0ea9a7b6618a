use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_core::{format_rating, format_review_count};
use game_catalog_lib::home_view;

use crate::CliError;

use super::{Session, print_games};

pub(crate) fn run_home(session: &Session) -> Result<(), CliError> {
    let view = home_view(
        &session.catalog,
        session.favorites.snapshot(),
        session.settings.display.featured_count,
    );

    log::info!(
        "{}",
        "Game Catalog".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Games:          {:>8}", view.stats.total_games);
    log::info!(
        "  Reviews:        {:>8}",
        format_review_count(view.stats.total_reviews)
    );
    log::info!(
        "  Average rating: {:>8}",
        format_rating(view.stats.average_rating)
    );
    log::info!("  Categories:     {:>8}", view.stats.category_count);
    log::info!("  Favorites:      {:>8}", view.favorite_count);
    crate::log_blank();

    log::info!("{}", "Featured".if_supports_color(Stdout, |t| t.bold()));
    print_games(session, &view.featured);
    crate::log_blank();

    log::info!("{}", "New Releases".if_supports_color(Stdout, |t| t.bold()));
    print_games(session, &view.new_releases);

    Ok(())
}
