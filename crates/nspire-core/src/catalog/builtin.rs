use crate::catalog::schema::CatalogDef;
use crate::error::NspireError;

const NSPIRE_DEFICIENCIES_JSON: &str =
    include_str!("../../../../catalog/nspire-deficiencies.json");

/// Load the built-in NSPIRE deficiency catalog.
pub fn load_builtin() -> Result<CatalogDef, NspireError> {
    let catalog: CatalogDef = serde_json::from_str(NSPIRE_DEFICIENCIES_JSON)?;
    crate::catalog::validate_catalog(&catalog)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    #[test]
    fn test_builtin_catalog_loads_and_validates() {
        let catalog = load_builtin().unwrap();
        assert!(!catalog.deficiencies.is_empty());
        assert!(!catalog.categories.is_empty());
    }

    #[test]
    fn test_builtin_has_fire_life_safety_entries() {
        let catalog = load_builtin().unwrap();
        let fls: Vec<_> = catalog.in_category("fire_life_safety").collect();
        assert!(!fls.is_empty());
        assert!(fls
            .iter()
            .any(|d| d.severity == Severity::LifeThreatening));
    }

    #[test]
    fn test_builtin_life_threatening_entries_are_24h() {
        let catalog = load_builtin().unwrap();
        for def in &catalog.deficiencies {
            if def.severity == Severity::LifeThreatening {
                assert_eq!(def.repair_due_hours, 24, "{}", def.id);
            }
        }
    }
}
