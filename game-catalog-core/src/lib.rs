//! Game catalog data model, dataset loading, and the catalog query engine.
//!
//! This crate holds no persisted state. Everything in [`query`] and [`stats`]
//! is a pure function of the borrowed dataset, so consumers simply call again
//! whenever their inputs change.

pub mod format;
pub mod query;
pub mod stats;
pub mod types;
pub mod yaml;

pub use format::{StarRating, format_price, format_rating, format_review_count, star_rating};
pub use query::{
    CategoryCount, QuerySpec, SearchFields, SortKey, category_counts, favorite_subset,
    filter_by_category, run_query, search, sort_games,
};
pub use stats::{CatalogStats, CategoryShare, category_breakdown, round1};
pub use types::*;
pub use yaml::{YamlError, load_catalog, parse_catalog};
