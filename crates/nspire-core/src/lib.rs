pub mod catalog;
pub mod error;
pub mod model;
pub mod policy;
pub mod sampling;
pub mod scoring;

use error::NspireError;
use scoring::outcome::ScoreResult;
use std::path::Path;

pub use model::{Area, AreaType, Finding, Inspection, Program, ScoringArea, Severity, VoucherRating};
pub use sampling::sample_size;
pub use scoring::{calculate_nspire_score, inspection_cycle};

/// Load an inspection record from a JSON file.
///
/// Findings with unrecognized severities or area buckets load with those
/// fields unset; scoring applies the documented defaults rather than
/// rejecting the record.
pub fn load_inspection(path: &Path) -> Result<Inspection, NspireError> {
    let content = std::fs::read_to_string(path).map_err(|e| NspireError::InspectionLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let inspection: Inspection =
        serde_json::from_str(&content).map_err(|e| NspireError::InspectionLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Ok(inspection)
}

/// Main API entry point: score an inspection using its own sample size
/// and area-normalized findings.
pub fn score_inspection(inspection: &Inspection) -> ScoreResult {
    inspection.calculate_score()
}
