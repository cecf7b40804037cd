//! Relevance scoring for a single (query, product) pair.
//!
//! The score is a sum of independent contributions: weighted field substring
//! matches, a fuzzy-similarity term against the title, and domain bonuses for
//! size, pressure, material, and application vocabulary. Conditions are not
//! mutually exclusive; one query can trigger several at once.

use crate::catalog::Product;
use crate::search::query::size_digits;
use rapidfuzz::distance::indel;
use std::fmt;

/// Fuzzy title similarity must clear this before it contributes.
const FUZZY_THRESHOLD: f64 = 0.6;
/// Multiplier applied to the fuzzy similarity ratio.
const FUZZY_WEIGHT: f64 = 30.0;

const PRESSURE_TERMS: [&str; 4] = ["pressure", "psi", "high pressure", "low pressure"];
const MATERIAL_TERMS: [&str; 3] = ["ductile iron", "iron", "metal"];
const APPLICATION_TERMS: [&str; 4] = ["water", "sewer", "pipe", "fitting"];

/// Which scoring condition contributed to a result.
///
/// A closed set so callers can branch on categories; the display label is
/// only joined into a string at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    Title,
    ProductCode,
    JointType,
    BodyDesign,
    Keyword,
    Description,
    Standard,
    Fuzzy,
    Size,
    Pressure,
    Material,
    Application,
    /// Ranked by the AI delegation layer rather than the scorer.
    AiEnhanced,
}

impl MatchReason {
    /// Human-readable label shown in the UI layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "title match",
            Self::ProductCode => "product code match",
            Self::JointType => "joint type match",
            Self::BodyDesign => "body design match",
            Self::Keyword => "keyword match",
            Self::Description => "description match",
            Self::Standard => "standard match",
            Self::Fuzzy => "fuzzy match",
            Self::Size => "size match",
            Self::Pressure => "pressure match",
            Self::Material => "material match",
            Self::Application => "application match",
            Self::AiEnhanced => "AI-enhanced match",
        }
    }
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a product against a normalized (trimmed, lowercased) query.
///
/// Returns the total score and the reasons that fired, in table order, each
/// at most once. A score of 0.0 means nothing matched; the engine excludes
/// such products entirely.
pub(crate) fn score_product(query: &str, product: &Product) -> (f64, Vec<MatchReason>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let title = product.title.to_lowercase();

    if title.contains(query) {
        score += 100.0;
        reasons.push(MatchReason::Title);
    }

    if product.product_code.to_lowercase().contains(query) {
        score += 90.0;
        reasons.push(MatchReason::ProductCode);
    }

    if product.joint_type.to_lowercase().contains(query) {
        score += 80.0;
        reasons.push(MatchReason::JointType);
    }

    if product.body_design.to_lowercase().contains(query) {
        score += 70.0;
        reasons.push(MatchReason::BodyDesign);
    }

    // First keyword hit is enough; further hits would only duplicate the label.
    if product
        .metadata
        .keywords
        .iter()
        .any(|k| k.to_lowercase().contains(query))
    {
        score += 60.0;
        reasons.push(MatchReason::Keyword);
    }

    let search_text = product.metadata.search_text.to_lowercase();

    if search_text.contains(query) {
        score += 50.0;
        reasons.push(MatchReason::Description);
    }

    if product.primary_standard.to_lowercase().contains(query) {
        score += 40.0;
        reasons.push(MatchReason::Standard);
    }

    let similarity = indel::normalized_similarity(query.chars(), title.chars());
    if similarity > FUZZY_THRESHOLD {
        score += similarity * FUZZY_WEIGHT;
        reasons.push(MatchReason::Fuzzy);
    }

    score += special_term_bonus(query, product, &search_text, &mut reasons);

    (score, reasons)
}

/// Domain-vocabulary bonuses, additive on top of the base table.
fn special_term_bonus(
    query: &str,
    product: &Product,
    search_text: &str,
    reasons: &mut Vec<MatchReason>,
) -> f64 {
    let mut bonus = 0.0;

    // A size token like 6" whose digits appear in the product's size range.
    if let Some(digits) = size_digits(query)
        && product.specifications.size_range.contains(digits)
    {
        bonus += 25.0;
        reasons.push(MatchReason::Size);
    }

    // Pressure vocabulary is rewarded unconditionally; every product in this
    // catalog is pressure-rated.
    if PRESSURE_TERMS.iter().any(|term| query.contains(term)) {
        bonus += 15.0;
        reasons.push(MatchReason::Pressure);
    }

    let material = product.specifications.material.kind.to_lowercase();
    if MATERIAL_TERMS.iter().any(|term| query.contains(term))
        && MATERIAL_TERMS.iter().any(|term| material.contains(term))
    {
        bonus += 20.0;
        reasons.push(MatchReason::Material);
    }

    if APPLICATION_TERMS.iter().any(|term| query.contains(term))
        && APPLICATION_TERMS.iter().any(|term| search_text.contains(term))
    {
        bonus += 15.0;
        reasons.push(MatchReason::Application);
    }

    bonus
}
