//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-catalog")]
#[command(about = "Browse a game catalog and manage favorites", long_about = None)]
pub(crate) struct Cli {
    /// YAML dataset to load (overrides settings)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding favorites and activity (overrides settings)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search and sort arguments shared by listing commands.
#[derive(Args, Clone)]
pub(crate) struct QueryArgs {
    /// Case-insensitive search term
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort key: name, rating, reviews, newest, category (default from settings)
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Overview: stats, featured games, new releases
    Home,

    /// Browse games by category
    List {
        /// Category id (e.g., strategy, arcade) or "all"
        #[arg(short = 'C', long = "category", default_value = "all")]
        category: String,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List categories with game counts
    Categories,

    /// Show or change favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Favorite statistics and recent activity
    Profile,

    /// Show settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum FavoritesAction {
    /// List favorite games
    List {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Mark games as favorites
    Add {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Unmark favorite games
    Remove {
        #[arg(required = true)]
        ids: Vec<u32>,
    },

    /// Flip a game's favorite state
    Toggle { id: u32 },

    /// Remove every favorite
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the default dataset path
    SetCatalog { path: PathBuf },
}
