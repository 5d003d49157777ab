use crate::model::{Severity, VoucherRating};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A versioned deficiency reference catalog. Loaded once, never mutated
/// at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Declared category keys; every deficiency must use one of these.
    pub categories: Vec<String>,
    #[serde(default)]
    pub category_descriptions: BTreeMap<String, String>,
    pub deficiencies: Vec<DeficiencyDef>,
}

impl CatalogDef {
    pub fn find(&self, id: &str) -> Option<&DeficiencyDef> {
        self.deficiencies.iter().find(|d| d.id == id)
    }

    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a DeficiencyDef> {
        self.deficiencies.iter().filter(move |d| d.category == category)
    }
}

/// One immutable deficiency reference record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeficiencyDef {
    pub id: String,
    pub category: String,
    pub description: String,
    /// Severity is strict here: the catalog is authoritative reference
    /// data and a bad value is a load error, not a default.
    pub severity: Severity,
    /// Hours allowed for repair under the standard program.
    pub repair_due_hours: i64,
    pub voucher_rating: VoucherRating,
    #[serde(default)]
    pub note: Option<String>,
}
