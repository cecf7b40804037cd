//! Prefix autocomplete over catalog fields.
//!
//! No scoring here: a suggestion is any keyword, product code, or joint type
//! whose lowercased form starts with the lowercased partial query. The union
//! is deduplicated, sorted, and truncated; stored casing is preserved.

use crate::catalog::Catalog;
use std::collections::BTreeSet;

/// Collect autocomplete completions for a partial query.
///
/// Callers enforce a minimum partial length (2 characters); this function
/// simply matches whatever it is given.
pub(crate) fn suggestions(catalog: &Catalog, partial_query: &str, limit: usize) -> Vec<String> {
    let partial = partial_query.trim().to_lowercase();
    let mut matches = BTreeSet::new();

    for product in catalog.get_all() {
        for keyword in &product.metadata.keywords {
            if keyword.to_lowercase().starts_with(&partial) {
                matches.insert(keyword.clone());
            }
        }

        if product.product_code.to_lowercase().starts_with(&partial) {
            matches.insert(product.product_code.clone());
        }

        if product.joint_type.to_lowercase().starts_with(&partial) {
            matches.insert(product.joint_type.clone());
        }
    }

    // BTreeSet iteration is already sorted.
    matches.into_iter().take(limit).collect()
}
