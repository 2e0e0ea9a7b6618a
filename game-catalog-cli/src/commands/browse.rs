use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_core::{category_counts, same_category};
use game_catalog_lib::categories_view;

use crate::CliError;
use crate::cli_types::QueryArgs;

use super::{Session, print_games};

pub(crate) fn run_list(
    session: &Session,
    category: &str,
    query: &QueryArgs,
) -> Result<(), CliError> {
    let sort_key = session.sort_key(query.sort.as_deref());
    let view = categories_view(&session.catalog, category, &query.search, sort_key);

    let name = view
        .categories
        .iter()
        .find(|c| same_category(&c.category.id, category))
        .map(|c| c.category.name.as_str())
        .unwrap_or(category);
    log::info!(
        "{} ({} games, sorted by {})",
        name.if_supports_color(Stdout, |t| t.bold()),
        view.games.len(),
        sort_key.as_str(),
    );
    if !query.search.is_empty() {
        log::info!("  Search: \"{}\"", query.search);
    }
    crate::log_blank();
    print_games(session, &view.games);

    Ok(())
}

pub(crate) fn run_categories(session: &Session) -> Result<(), CliError> {
    log::info!("{}", "Categories".if_supports_color(Stdout, |t| t.bold()));
    for entry in category_counts(&session.catalog) {
        log::info!(
            "  {} {:<20} {:>4}  ({})",
            entry.category.icon,
            entry.category.name,
            entry.count,
            entry
                .category
                .id
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
