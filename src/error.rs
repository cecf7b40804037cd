//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for fitting-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when catalog access fails.
///
/// Scoring, filtering, and ranking never produce errors of their own; they
/// degrade to empty sets instead. Only operations that depend on a specific
/// product or on the catalog file can fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// No product with the requested identifier exists in the catalog.
    #[error("product '{product_id}' not found")]
    ProductNotFound { product_id: String },
    /// Catalog data file not found at the expected path.
    #[error("catalog file not found at {}", path.display())]
    FileNotFound { path: PathBuf },
    /// Failed to parse the catalog data file.
    #[error("failed to parse catalog: {error}")]
    ParseError { error: String },
}
