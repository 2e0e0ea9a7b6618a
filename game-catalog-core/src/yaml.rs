//! YAML loading for the game dataset.
//!
//! A dataset file holds both lists:
//! ```text
//! categories:
//!   - { id: all, name: All Games, icon: "🎮" }
//!   - { id: strategy, name: Strategy, icon: "♟" }
//! games:
//!   - id: 1
//!     title: Chess
//!     category: Strategy
//!     release_date: 2019-03-01
//!     ...
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Catalog, CatalogError, Category, Game};

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid dataset in {path}: {source}")]
    Invalid {
        path: String,
        source: CatalogError,
    },
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    games: Vec<Game>,
}

/// Parse a dataset from a YAML string. `origin` is only used in error messages.
pub fn parse_catalog(contents: &str, origin: &str) -> Result<Catalog, YamlError> {
    let file: DatasetFile = serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    })?;
    let catalog = Catalog::new(file.games, file.categories).map_err(|e| YamlError::Invalid {
        path: origin.to_string(),
        source: e,
    })?;
    log::debug!(
        "Loaded {} games in {} categories from {}",
        catalog.len(),
        catalog.categories().len(),
        origin
    );
    Ok(catalog)
}

/// Load a dataset file from disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&contents, &path.display().to_string())
}
