//! game-catalog CLI
//!
//! Command-line frontend for browsing a game catalog and managing favorites.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, FavoritesAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = game_catalog_lib::settings::load_settings();

    // Config commands work without a dataset
    if let Commands::Config { action } = &cli.command {
        match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetCatalog { path } => {
                commands::config::run_config_set_catalog(settings, path)?
            }
        }
        return Ok(());
    }

    let session = commands::Session::open(settings, cli.catalog, cli.data_dir)?;
    run_session(session, cli.command)
}

/// Run one dataset command. The session is closed even when the command
/// fails, so favorite changes made before the error still reach the
/// activity log.
fn run_session(mut session: commands::Session, command: Commands) -> Result<(), CliError> {
    let result = match command {
        Commands::Home => commands::home::run_home(&session),
        Commands::List { category, query } => {
            commands::browse::run_list(&session, &category, &query)
        }
        Commands::Categories => commands::browse::run_categories(&session),
        Commands::Favorites { action } => match action {
            FavoritesAction::List { query } => {
                commands::favorites::run_favorites_list(&session, &query)
            }
            FavoritesAction::Add { ids } => {
                commands::favorites::run_favorites_add(&mut session, &ids)
            }
            FavoritesAction::Remove { ids } => {
                commands::favorites::run_favorites_remove(&mut session, &ids)
            }
            FavoritesAction::Toggle { id } => {
                commands::favorites::run_favorites_toggle(&mut session, id)
            }
            FavoritesAction::Clear => commands::favorites::run_favorites_clear(&mut session),
        },
        Commands::Profile => commands::profile::run_profile(&session),
        Commands::Config { .. } => Ok(()),
    };

    session.close();
    result
}

/// Route log output to the terminal.
///
/// Normal output goes through `log::info!` and prints bare messages; verbose
/// mode adds timestamps and levels.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
