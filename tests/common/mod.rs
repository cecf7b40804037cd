//! Shared fixture catalog for integration tests.

use fitting_search::{Catalog, SearchEngine};
use rstest::fixture;
use std::sync::Arc;

/// Four products covering the interesting scoring and filtering cases:
/// a mechanical-joint fitting, two full-body products with disjoint pressure
/// profiles, and a gland with no keyword overlap against common queries.
pub const FIXTURE_JSON: &str = r#"{
  "product_catalog": {
    "metadata": {"version": "test"},
    "products": [
      {
        "id": "mj-fitting-600",
        "product_code": "MJ600",
        "title": "6 Inch Mechanical Joint Fitting",
        "joint_type": "Mechanical Joint",
        "body_design": "Compact",
        "primary_standard": "AWWA C153",
        "specifications": {
          "size_range": "3\"-48\"",
          "material": {"type": "Ductile Iron", "standard": "ASTM A536", "grades": ["70-50-05"]},
          "pressure_ratings": [
            {"sizes": "4-12", "psi": 350},
            {"sizes": "14-24", "psi": 250}
          ],
          "deflection_limits": [{"sizes": "4-12", "max_degrees": 5}]
        },
        "construction": {
          "lining": "Cement mortar",
          "coating": {"interior": "Asphaltic", "exterior": "Asphaltic"},
          "gaskets": {"standard": "SBR", "optional": ["EPDM"], "standard_ref": "AWWA C111"}
        },
        "testing": {"hydrostatic_testing": true, "heat_coded_traceability": true, "standards": ["AWWA C153"]},
        "certifications": {"nsf61": true, "nsf61_annex_g": true, "nsf372": true, "ul_listed": "No", "fm_approved": "No"},
        "installation": {"standards": ["AWWA C600"], "compatible_pipes": ["Ductile Iron"]},
        "metadata": {
          "source_document": "catalog.pdf",
          "revision_date": "2024-01-01",
          "category": "Fittings",
          "subcategory": "Mechanical Joint",
          "keywords": ["MJ fitting", "water fitting"],
          "search_text": "mechanical joint fitting for water and sewer pipe applications"
        }
      },
      {
        "id": "po-elbow-200",
        "product_code": "PO200",
        "title": "8 Inch Push-On Elbow",
        "joint_type": "Push-On",
        "body_design": "Full Body",
        "primary_standard": "AWWA C110",
        "specifications": {
          "size_range": "3\"-24\"",
          "material": {"type": "Ductile Iron", "standard": "ASTM A536", "grades": []},
          "pressure_ratings": [
            {"sizes": "3-12", "psi": 150},
            {"sizes": "14-24", "psi": 350}
          ],
          "deflection_limits": []
        },
        "construction": {
          "lining": "Cement mortar",
          "coating": {"interior": "Asphaltic", "exterior": "Asphaltic"},
          "gaskets": {"standard": "SBR", "optional": [], "standard_ref": "AWWA C111"}
        },
        "testing": {"hydrostatic_testing": true, "heat_coded_traceability": true, "standards": ["AWWA C110"]},
        "certifications": {"nsf61": true, "nsf61_annex_g": false, "nsf372": true, "ul_listed": "No", "fm_approved": "No"},
        "installation": {"standards": ["AWWA C600"], "compatible_pipes": ["Ductile Iron", "PVC"]},
        "metadata": {
          "source_document": "catalog.pdf",
          "revision_date": "2024-01-01",
          "category": "Fittings",
          "subcategory": "Push-On",
          "keywords": ["push-on elbow"],
          "search_text": "push-on elbow for water distribution systems"
        }
      },
      {
        "id": "fl-tee-300",
        "product_code": "FL300",
        "title": "12 Inch Flanged Tee",
        "joint_type": "Flanged",
        "body_design": "Full Body",
        "primary_standard": "AWWA C110",
        "specifications": {
          "size_range": "3\"-64\"",
          "material": {"type": "Ductile Iron", "standard": "ASTM A536", "grades": []},
          "pressure_ratings": [{"sizes": "3-24", "psi": 500}],
          "deflection_limits": []
        },
        "construction": {
          "lining": "Cement mortar",
          "coating": {"interior": "Epoxy", "exterior": "Asphaltic"},
          "gaskets": {"standard": "SBR", "optional": [], "standard_ref": "AWWA C111"}
        },
        "testing": {"hydrostatic_testing": true, "heat_coded_traceability": false, "standards": ["AWWA C110"]},
        "certifications": {"nsf61": true, "nsf61_annex_g": false, "nsf372": true, "ul_listed": "Yes", "fm_approved": "Yes"},
        "installation": {"standards": ["AWWA C600"], "compatible_pipes": ["Ductile Iron"]},
        "metadata": {
          "source_document": "catalog.pdf",
          "revision_date": "2024-01-01",
          "category": "Fittings",
          "subcategory": "Flanged",
          "keywords": ["flanged tee"],
          "search_text": "flanged tee for plant piping"
        }
      },
      {
        "id": "tg-gland-050",
        "product_code": "TG050",
        "title": "Transition Gland",
        "joint_type": "Restrained",
        "body_design": "Gland",
        "primary_standard": "AWWA C111",
        "specifications": {
          "size_range": "4-12",
          "material": {"type": "Ductile Iron", "standard": "ASTM A536", "grades": []},
          "pressure_ratings": [{"sizes": "4-12", "psi": 350}],
          "deflection_limits": []
        },
        "construction": {
          "lining": "None",
          "coating": {"interior": "Asphaltic", "exterior": "Asphaltic"},
          "gaskets": {"standard": "SBR", "optional": [], "standard_ref": "AWWA C111"}
        },
        "testing": {"hydrostatic_testing": false, "heat_coded_traceability": false, "standards": []},
        "certifications": {"nsf61": false, "nsf61_annex_g": false, "nsf372": false, "ul_listed": "No", "fm_approved": "No"},
        "installation": {},
        "metadata": {
          "source_document": "catalog.pdf",
          "revision_date": "2024-01-01",
          "category": "Accessories",
          "subcategory": "Glands",
          "keywords": ["mechanical coupling"],
          "search_text": "transition gland seal assembly"
        }
      }
    ]
  }
}"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::from_json_str(FIXTURE_JSON).expect("fixture catalog must parse")
}

#[fixture]
pub fn engine() -> SearchEngine {
    SearchEngine::new(Arc::new(fixture_catalog()))
}
