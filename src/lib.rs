pub mod ai;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tracing;

pub use catalog::{Catalog, Product};
pub use error::{CatalogError, Result};
pub use search::{FilterCriteria, MatchReason, ScoredResult, SearchEngine};
