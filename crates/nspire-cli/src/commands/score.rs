use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), nspire_core::error::NspireError> {
    let inspection = nspire_core::load_inspection(&input_file)?;
    let result = nspire_core::score_inspection(&inspection);

    // Findings that deserialized without a usable severity or scoring
    // bucket still score under the documented defaults; surface them so
    // the data can be fixed upstream.
    let mut warnings = Vec::new();
    for area in &inspection.areas {
        for finding in &area.findings {
            if finding.severity.is_none() {
                warnings.push(format!(
                    "finding '{}' has no recognized severity; scored as moderate",
                    finding.id
                ));
            }
        }
    }

    match output_format {
        "json" => output::json::print(&inspection, &result)?,
        _ => output::table::print(&inspection, &result, show_all, verbose),
    }

    for w in &warnings {
        eprintln!("warning: {w}");
    }

    Ok(())
}
