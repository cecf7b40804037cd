//! Catalog search: filtering, relevance scoring, ranking, and autocomplete.
//!
//! The pipeline is: validated filters narrow the candidate set, the scorer
//! produces a weighted score plus match reasons per candidate, and the engine
//! sorts, truncates, and reports timing.

// Module declarations
pub(crate) mod engine;
pub(crate) mod filter;
pub(crate) mod query;
pub(crate) mod scoring;
pub(crate) mod suggest;

// Public re-exports (used via lib.rs)
pub use engine::{ScoredResult, SearchEngine};
pub use filter::FilterCriteria;
pub use query::{clean_query, extract_pressure, extract_size};
pub use scoring::MatchReason;
