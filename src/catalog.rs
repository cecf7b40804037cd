//! Product data model and the read-only catalog store.
//!
//! The catalog is loaded once from a JSON file at process start and never
//! mutated afterwards. Products are held behind `Arc` so search results can
//! share them without cloning full records.

use crate::error::{CatalogError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Material specification for a fitting body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Material class, e.g. "Ductile Iron".
    #[serde(rename = "type")]
    pub kind: String,
    /// Governing material standard, e.g. "ASTM A536".
    pub standard: String,
    #[serde(default)]
    pub grades: Vec<String>,
}

/// Working pressure rating for a band of sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PressureRating {
    /// Size band this rating covers, e.g. "4-12".
    pub sizes: String,
    pub psi: u32,
}

/// Maximum joint deflection for a band of sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionLimit {
    pub sizes: String,
    pub max_degrees: u32,
    #[serde(default)]
    pub note: Option<String>,
}

/// Dimensional and material specifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specifications {
    /// Human-readable size range, e.g. `3"-48"`.
    pub size_range: String,
    pub material: Material,
    #[serde(default)]
    pub pressure_ratings: Vec<PressureRating>,
    #[serde(default)]
    pub deflection_limits: Vec<DeflectionLimit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coating {
    pub interior: String,
    pub exterior: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gaskets {
    pub standard: String,
    #[serde(default)]
    pub optional: Vec<String>,
    pub standard_ref: String,
}

/// Construction details: linings, coatings, gaskets, fasteners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Construction {
    pub lining: String,
    pub coating: Coating,
    pub gaskets: Gaskets,
    #[serde(default)]
    pub fasteners: Option<String>,
    #[serde(default)]
    pub joint_details: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testing {
    pub hydrostatic_testing: bool,
    pub heat_coded_traceability: bool,
    #[serde(default)]
    pub standards: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certifications {
    pub nsf61: bool,
    pub nsf61_annex_g: bool,
    pub nsf372: bool,
    pub ul_listed: String,
    pub fm_approved: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installation {
    #[serde(default)]
    pub standards: Vec<String>,
    #[serde(default)]
    pub compatible_pipes: Vec<String>,
    #[serde(default)]
    pub special_notes: Option<String>,
}

/// Free-text and taxonomy metadata attached to a product for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub source_document: String,
    pub revision_date: String,
    pub category: String,
    pub subcategory: String,
    /// Ordered keyword list; order matters for suggestion provenance.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-form descriptive text scanned by the scorer.
    #[serde(default)]
    pub search_text: String,
}

/// A single pipe-fitting product record.
///
/// Immutable for the process lifetime; the catalog owns every instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub product_code: String,
    pub title: String,
    pub joint_type: String,
    pub body_design: String,
    pub primary_standard: String,
    pub specifications: Specifications,
    pub construction: Construction,
    pub testing: Testing,
    pub certifications: Certifications,
    pub installation: Installation,
    pub metadata: ProductMetadata,
}

impl Product {
    /// One-line display summary: title, size range, pressure ratings, joint type.
    pub fn summary(&self) -> String {
        let pressures = self
            .specifications
            .pressure_ratings
            .iter()
            .map(|r| format!("{}: {} PSI", r.sizes, r.psi))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{} | {} | {} | {}",
            self.title, self.specifications.size_range, pressures, self.joint_type
        )
    }
}

/// On-disk catalog file wrapper: `{"product_catalog": {"metadata": ..., "products": [...]}}`.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    product_catalog: CatalogDocument,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    #[allow(dead_code)]
    metadata: serde_json::Value,
    products: Vec<Product>,
}

/// The fixed, in-memory set of products for the process lifetime.
///
/// Constructed once and passed to [`crate::SearchEngine`] at construction
/// time; there is no reload path short of building a new `Catalog`.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    by_id: HashMap<String, Arc<Product>>,
}

impl Catalog {
    /// Build a catalog from an already-deserialized product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        let products: Vec<Arc<Product>> = products.into_iter().map(Arc::new).collect();
        let by_id = products
            .iter()
            .map(|p| (p.id.clone(), Arc::clone(p)))
            .collect();
        Self { products, by_id }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
            error: e.to_string(),
        })?;
        Ok(Self::from_products(file.product_catalog.products))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn get_all(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a single product by identifier.
    pub fn get_by_id(&self, product_id: &str) -> Option<Arc<Product>> {
        self.by_id.get(product_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct product codes, sorted for stable display.
    pub fn product_codes(&self) -> Vec<String> {
        Self::distinct(self.products.iter().map(|p| p.product_code.as_str()))
    }

    /// Distinct joint types, sorted.
    pub fn joint_types(&self) -> Vec<String> {
        Self::distinct(self.products.iter().map(|p| p.joint_type.as_str()))
    }

    /// Distinct body designs, sorted.
    pub fn body_designs(&self) -> Vec<String> {
        Self::distinct(self.products.iter().map(|p| p.body_design.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(str::to_string).collect();
        out.sort();
        out.dedup();
        out
    }
}
