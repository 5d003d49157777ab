use nspire_core::model::Inspection;
use nspire_core::scoring::outcome::ScoreResult;

pub fn print(inspection: &Inspection, result: &ScoreResult, show_all: bool, verbose: bool) {
    println!("=== Inspection {} ===\n", inspection.id);
    println!(
        "  Property: {}   Date: {}   Units: {} (sample {})",
        inspection.property_id,
        inspection.date.format("%Y-%m-%d"),
        inspection.total_units,
        inspection.unit_sample
    );

    let cycle = match result.inspection_cycle {
        0 => "failing, no extension".to_string(),
        1 => "1 year".to_string(),
        n => format!("{n} years"),
    };
    println!("\n  Score: {} (inspection cycle: {})", result.score, cycle);

    println!(
        "  Deductions: outside {}, inside {}, units {}, total {}",
        result.points_deducted.outside,
        result.points_deducted.inside,
        result.points_deducted.units,
        result.points_deducted.total
    );

    if result.failing_unit_adjustment {
        println!("  Failing-unit adjustment: units deduction exceeds 30 points");
    }

    let voucher = inspection.voucher_result();
    println!("  Voucher result: {}", voucher);
    if result.score < 60 {
        println!("  Score below 60: full survey required");
    }
    println!();

    if !(verbose || show_all) {
        return;
    }

    let program = inspection.program();
    for area in &inspection.areas {
        let findings: Vec<_> = if show_all {
            area.findings.iter().collect()
        } else {
            area.findings
                .iter()
                .filter(|f| f.is_fail_for_voucher())
                .collect()
        };

        if findings.is_empty() {
            continue;
        }

        println!("  --- {} ({}) ---", area.name, area.area_type.scoring_area());
        for f in findings {
            let fail_marker = if f.is_fail_for_voucher() { " [fail]" } else { "" };
            println!(
                "    {}  {}{}  {}",
                f.id,
                f.effective_severity(),
                fail_marker,
                f.description
            );
            if verbose {
                let due = f.calculate_repair_due_date(program, inspection.date);
                println!("      repair due: {}", due.format("%Y-%m-%d %H:%M UTC"));
                if let Some(ref location) = f.location {
                    println!("      location: {location}");
                }
            }
        }
        println!();
    }
}
