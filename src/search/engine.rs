//! Query orchestration: filter, score, rank, truncate, and time.

use crate::catalog::{Catalog, Product};
use crate::error::{CatalogError, Result};
use crate::search::filter::FilterCriteria;
use crate::search::scoring::{MatchReason, score_product};
use crate::search::suggest;
use std::sync::Arc;
use std::time::Instant;

/// A product matched by a query, with its score and the reasons it matched.
///
/// Transient, produced per query; never persisted.
#[derive(Debug, Clone)]
pub struct ScoredResult {
    pub product: Arc<Product>,
    pub score: f64,
    pub reasons: Vec<MatchReason>,
}

impl ScoredResult {
    /// Joined display string for the UI layer.
    ///
    /// "no match" is defensive only: zero-score products are excluded before
    /// a `ScoredResult` is ever built for them.
    pub fn match_reason(&self) -> String {
        if self.reasons.is_empty() {
            return "no match".to_string();
        }
        self.reasons
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Search engine over a read-only catalog.
///
/// Holds a shared reference to the catalog; scoring is stateless per product,
/// so an engine can serve concurrent queries without locking.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank catalog products against a query.
    ///
    /// The query is trimmed and lowercased here; callers reject queries that
    /// are empty after normalization. Candidates failing every scoring
    /// condition are excluded. Returns at most `limit` results ordered by
    /// score descending, plus the elapsed scoring+sort time in whole
    /// milliseconds.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
        filters: &FilterCriteria,
    ) -> (Vec<ScoredResult>, u64) {
        let query = query.trim().to_lowercase();

        let candidates = if filters.is_empty() {
            self.catalog.get_all().to_vec()
        } else {
            filters.apply(self.catalog.get_all())
        };

        let start = Instant::now();

        let mut results: Vec<ScoredResult> = candidates
            .into_iter()
            .filter_map(|product| {
                let (score, reasons) = score_product(&query, &product);
                (score > 0.0).then(|| ScoredResult {
                    product,
                    score,
                    reasons,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep first-seen catalog order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(
            "Query '{}' matched {} products in {}ms",
            query,
            results.len(),
            elapsed_ms
        );

        (results, elapsed_ms)
    }

    /// Find products similar to a reference product.
    ///
    /// Builds a query from the reference's code, joint type, and body design,
    /// then drops the reference itself from the ranking. A lookup miss is a
    /// [`CatalogError::ProductNotFound`], not a panic or an empty result.
    pub fn similar(&self, product_id: &str, limit: usize) -> Result<Vec<ScoredResult>> {
        let reference =
            self.catalog
                .get_by_id(product_id)
                .ok_or_else(|| CatalogError::ProductNotFound {
                    product_id: product_id.to_string(),
                })?;

        let query = format!(
            "{} {} {}",
            reference.product_code, reference.joint_type, reference.body_design
        );

        // limit + 1 leaves room for the reference product itself.
        let (results, _) = self.search(&query, limit + 1, &FilterCriteria::default());
        let mut similar: Vec<ScoredResult> = results
            .into_iter()
            .filter(|r| r.product.id != product_id)
            .collect();
        similar.truncate(limit);
        Ok(similar)
    }

    /// Autocomplete completions for a partial query. See [`suggest`].
    pub fn suggest(&self, partial_query: &str, limit: usize) -> Vec<String> {
        suggest::suggestions(&self.catalog, partial_query, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testutil::sample_product;
    use assert2::{check, let_assert};

    fn engine() -> SearchEngine {
        let mut elbow = sample_product("push-on-elbow");
        elbow.product_code = "PO200".to_string();
        elbow.title = "8 Inch Push-On Elbow".to_string();
        elbow.joint_type = "Push-On".to_string();
        elbow.metadata.keywords = vec!["push-on elbow".to_string()];
        elbow.metadata.search_text = "push-on elbow for water distribution".to_string();

        let catalog = Catalog::from_products(vec![sample_product("mj-600"), elbow]);
        SearchEngine::new(Arc::new(catalog))
    }

    #[test]
    fn search_ranks_title_matches_first() {
        let engine = engine();
        let (results, _) = engine.search("mechanical joint", 10, &FilterCriteria::default());

        check!(!results.is_empty());
        check!(results[0].product.id == "mj-600");
        check!(results[0].match_reason().contains("title match"));
    }

    #[test]
    fn search_normalizes_the_query() {
        let engine = engine();
        let (results, _) = engine.search("  MECHANICAL Joint  ", 10, &FilterCriteria::default());
        check!(results[0].product.id == "mj-600");
    }

    #[test]
    fn limit_is_respected() {
        let engine = engine();
        // "water" appears in both products' search_text
        let (results, _) = engine.search("water", 1, &FilterCriteria::default());
        check!(results.len() == 1);
    }

    #[test]
    fn zero_score_products_are_excluded() {
        let engine = engine();
        let (results, _) = engine.search("zirconium", 10, &FilterCriteria::default());
        check!(results.is_empty());
    }

    #[test]
    fn similar_excludes_the_reference_product() {
        let engine = engine();
        let similar = engine.similar("mj-600", 5).unwrap();
        check!(similar.iter().all(|r| r.product.id != "mj-600"));
    }

    #[test]
    fn similar_propagates_missing_product() {
        let engine = engine();
        let result = engine.similar("ghost", 5);
        let_assert!(Err(err) = result);
        let_assert!(
            Some(CatalogError::ProductNotFound { product_id }) =
                err.downcast_ref::<CatalogError>()
        );
        check!(product_id == "ghost");
    }
}
