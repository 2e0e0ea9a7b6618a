use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_catalog_lib::{GameId, favorites_view};

use crate::CliError;
use crate::cli_types::QueryArgs;

use super::{Session, print_games};

pub(crate) fn run_favorites_list(session: &Session, query: &QueryArgs) -> Result<(), CliError> {
    let sort_key = session.sort_key(query.sort.as_deref());
    let view = favorites_view(
        &session.catalog,
        session.favorites.snapshot(),
        &query.search,
        sort_key,
    );

    log::info!(
        "{} ({} of {} shown)",
        "Favorites".if_supports_color(Stdout, |t| t.bold()),
        view.games.len(),
        view.stats.total_games,
    );
    let stale = session.favorites.len() - view.stats.total_games;
    if stale > 0 {
        log::debug!("{} favorite ids are no longer in the catalog", stale);
    }
    crate::log_blank();
    print_games(session, &view.games);

    if !view.breakdown.is_empty() {
        crate::log_blank();
        let shares: Vec<String> = view
            .breakdown
            .iter()
            .map(|s| format!("{} {:.1}%", s.category, s.percentage))
            .collect();
        log::info!("  {}", shares.join(", "));
    }
    Ok(())
}

/// Every id is checked against the catalog before any favorite changes.
pub(crate) fn run_favorites_add(session: &mut Session, ids: &[u32]) -> Result<(), CliError> {
    let ids = ids
        .iter()
        .map(|&raw| known_id(session, raw))
        .collect::<Result<Vec<_>, _>>()?;
    for id in ids {
        if session.favorites.add(id) {
            log::info!("Added {}", title(session, id));
        } else {
            log::info!("{} is already a favorite", title(session, id));
        }
    }
    report_persist_error(session);
    Ok(())
}

/// Removal does not check the catalog so stale ids can still be cleaned up.
pub(crate) fn run_favorites_remove(session: &mut Session, ids: &[u32]) -> Result<(), CliError> {
    for &raw in ids {
        let id = GameId(raw);
        if session.favorites.remove(id) {
            log::info!("Removed {}", title(session, id));
        } else {
            log::info!("{} was not a favorite", title(session, id));
        }
    }
    report_persist_error(session);
    Ok(())
}

pub(crate) fn run_favorites_toggle(session: &mut Session, raw: u32) -> Result<(), CliError> {
    let id = known_id(session, raw)?;
    if session.favorites.toggle(id) {
        log::info!("Added {}", title(session, id));
    } else {
        log::info!("Removed {}", title(session, id));
    }
    report_persist_error(session);
    Ok(())
}

pub(crate) fn run_favorites_clear(session: &mut Session) -> Result<(), CliError> {
    let count = session.favorites.len();
    if session.favorites.clear_all() {
        log::info!("Cleared {} favorites", count);
    } else {
        log::info!("No favorites to clear");
    }
    report_persist_error(session);
    Ok(())
}

fn known_id(session: &Session, raw: u32) -> Result<GameId, CliError> {
    let id = GameId(raw);
    if session.catalog.contains(id) {
        Ok(id)
    } else {
        Err(CliError::unknown_game(raw.to_string()))
    }
}

fn title(session: &Session, id: GameId) -> String {
    session
        .catalog
        .get(id)
        .map(|g| g.title.clone())
        .unwrap_or_else(|| format!("#{}", id))
}

fn report_persist_error(session: &Session) {
    if let Some(e) = session.favorites.last_persist_error() {
        let msg = format!("Favorites changed for this run only: {}", e);
        log::warn!("{}", msg.if_supports_color(Stdout, |t| t.yellow()));
    }
}
