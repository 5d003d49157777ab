use nspire_core::error::NspireError;
use nspire_core::model::Inspection;
use nspire_core::scoring::outcome::ScoreResult;
use serde_json::json;

pub fn print(inspection: &Inspection, result: &ScoreResult) -> Result<(), NspireError> {
    let report = json!({
        "inspection_id": inspection.id,
        "property_id": inspection.property_id,
        "unit_sample": inspection.unit_sample,
        "result": result,
        "voucher_result": inspection.voucher_result(),
        "requires_full_survey": result.score < 60,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
