//! Structured filter validation and evaluation.
//!
//! Validation is deliberately permissive: unrecognized keys and malformed
//! numeric values are dropped without error, so a typo'd filter has no effect
//! rather than failing the whole query. Evaluation is a logical AND across
//! every present key.

use crate::catalog::Product;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// A validated set of filter criteria.
///
/// Built via [`FilterCriteria::validate`]; fields are `None` when the raw
/// input lacked the key or carried an unusable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the joint type.
    pub joint_type: Option<String>,
    /// Substring of the product code, stored uppercased.
    pub product_code: Option<String>,
    /// Case-insensitive substring of the body design.
    pub body_design: Option<String>,
    /// Keep products with at least one rating at or above this psi.
    pub min_pressure: Option<i64>,
    /// Keep products with at least one rating at or below this psi.
    pub max_pressure: Option<i64>,
    /// Literal substring of the size-range field.
    pub size: Option<String>,
}

impl FilterCriteria {
    /// Validate a raw filter mapping, keeping only recognized, well-typed entries.
    pub fn validate(raw: &HashMap<String, Value>) -> Self {
        let mut criteria = Self::default();

        for (key, value) in raw {
            match key.as_str() {
                "joint_type" => criteria.joint_type = trimmed_string(value),
                "product_code" => {
                    criteria.product_code = trimmed_string(value).map(|s| s.to_uppercase());
                }
                "body_design" => criteria.body_design = trimmed_string(value),
                "min_pressure" => criteria.min_pressure = integer(value),
                "max_pressure" => criteria.max_pressure = integer(value),
                "size" => criteria.size = trimmed_string(value),
                other => {
                    tracing::debug!("Dropping unrecognized filter key '{}'", other);
                }
            }
        }

        criteria
    }

    /// True when no filter key is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a single product satisfies every present predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(joint_type) = &self.joint_type
            && !product
                .joint_type
                .to_lowercase()
                .contains(&joint_type.to_lowercase())
        {
            return false;
        }

        if let Some(product_code) = &self.product_code
            && !product.product_code.to_uppercase().contains(product_code)
        {
            return false;
        }

        if let Some(body_design) = &self.body_design
            && !product
                .body_design
                .to_lowercase()
                .contains(&body_design.to_lowercase())
        {
            return false;
        }

        let ratings = &product.specifications.pressure_ratings;

        // Any-rating semantics: one satisfying band is enough, even for
        // multi-size products. Pinned by tests so a change is visible.
        if let Some(min) = self.min_pressure
            && !ratings.iter().any(|r| i64::from(r.psi) >= min)
        {
            return false;
        }

        if let Some(max) = self.max_pressure
            && !ratings.iter().any(|r| i64::from(r.psi) <= max)
        {
            return false;
        }

        if let Some(size) = &self.size
            && !product.specifications.size_range.contains(size.as_str())
        {
            return false;
        }

        true
    }

    /// Keep the subset of candidates satisfying all present predicates,
    /// preserving input order. An empty result is not an error.
    pub fn apply(&self, candidates: &[Arc<Product>]) -> Vec<Arc<Product>> {
        candidates
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

fn trimmed_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Accept JSON integers and numeric strings; anything else is dropped.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn recognized_keys_are_kept() {
        let criteria = FilterCriteria::validate(&raw(&[
            ("joint_type", json!("Mechanical")),
            ("product_code", json!("mj6")),
            ("min_pressure", json!(250)),
            ("size", json!("6")),
        ]));

        check!(criteria.joint_type.as_deref() == Some("Mechanical"));
        // Product codes compare uppercased
        check!(criteria.product_code.as_deref() == Some("MJ6"));
        check!(criteria.min_pressure == Some(250));
        check!(criteria.size.as_deref() == Some("6"));
        check!(!criteria.is_empty());
    }

    #[rstest]
    #[case(json!("350"), Some(350))]
    #[case(json!(" 350 "), Some(350))]
    #[case(json!(350), Some(350))]
    #[case(json!("high"), None)]
    #[case(json!(3.5), None)]
    #[case(json!(null), None)]
    #[case(json!([350]), None)]
    fn numeric_values_parse_or_drop(#[case] value: Value, #[case] expected: Option<i64>) {
        let criteria = FilterCriteria::validate(&raw(&[("min_pressure", value)]));
        check!(criteria.min_pressure == expected);
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        let criteria = FilterCriteria::validate(&raw(&[
            ("color", json!("red")),
            ("joint_typ", json!("Mechanical")),
        ]));
        check!(criteria.is_empty());
    }

    #[test]
    fn non_string_values_for_string_keys_are_dropped() {
        let criteria = FilterCriteria::validate(&raw(&[("joint_type", json!(42))]));
        check!(criteria.joint_type.is_none());
        check!(criteria.is_empty());
    }
}
