pub mod builtin;
pub mod schema;

use crate::error::NspireError;
use schema::CatalogDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a deficiency catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CatalogDef, NspireError> {
    let content = std::fs::read_to_string(path).map_err(|e| NspireError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let catalog: CatalogDef =
        serde_json::from_str(&content).map_err(|e| NspireError::CatalogLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<CatalogDef, NspireError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(NspireError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), NspireError> {
    if catalog.categories.is_empty() {
        return Err(NspireError::CatalogInvalid(
            "categories must not be empty".into(),
        ));
    }

    if catalog.deficiencies.is_empty() {
        return Err(NspireError::CatalogInvalid(
            "deficiencies must not be empty".into(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for def in &catalog.deficiencies {
        if def.id.is_empty() {
            return Err(NspireError::CatalogInvalid(
                "deficiency id must not be empty".into(),
            ));
        }

        if !seen_ids.insert(def.id.as_str()) {
            return Err(NspireError::CatalogInvalid(format!(
                "duplicate deficiency id '{}'",
                def.id
            )));
        }

        if !catalog.categories.contains(&def.category) {
            return Err(NspireError::CatalogInvalid(format!(
                "deficiency '{}' references unknown category '{}'",
                def.id, def.category
            )));
        }

        if def.repair_due_hours <= 0 {
            return Err(NspireError::CatalogInvalid(format!(
                "deficiency '{}' has non-positive repair_due_hours",
                def.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "categories": ["electrical"],
            "deficiencies": [
                {
                    "id": "elec-001",
                    "category": "electrical",
                    "description": "Exposed conductors",
                    "severity": "lifeThreatening",
                    "repair_due_hours": 24,
                    "voucher_rating": "fail"
                }
            ]
        }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.name, "Test");
        assert_eq!(catalog.deficiencies.len(), 1);
        assert!(catalog.find("elec-001").is_some());
        assert!(catalog.find("elec-999").is_none());
    }

    #[test]
    fn test_empty_categories_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": [],
            "deficiencies": [
                {
                    "id": "x",
                    "category": "electrical",
                    "description": "d",
                    "severity": "low",
                    "repair_due_hours": 1440,
                    "voucher_rating": "pass"
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": ["electrical"],
            "deficiencies": [
                {
                    "id": "dup",
                    "category": "electrical",
                    "description": "a",
                    "severity": "low",
                    "repair_due_hours": 1440,
                    "voucher_rating": "pass"
                },
                {
                    "id": "dup",
                    "category": "electrical",
                    "description": "b",
                    "severity": "low",
                    "repair_due_hours": 1440,
                    "voucher_rating": "pass"
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": ["electrical"],
            "deficiencies": [
                {
                    "id": "x",
                    "category": "plumbing",
                    "description": "d",
                    "severity": "low",
                    "repair_due_hours": 1440,
                    "voucher_rating": "pass"
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_invalid_severity_is_parse_error() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "categories": ["electrical"],
            "deficiencies": [
                {
                    "id": "x",
                    "category": "electrical",
                    "description": "d",
                    "severity": "catastrophic",
                    "repair_due_hours": 24,
                    "voucher_rating": "fail"
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }
}
