use crate::model::{Finding, ScoringArea, Severity};
use crate::policy;
use crate::scoring::outcome::{PointsDeducted, ScoreResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

const PERFECT_SCORE: Decimal = Decimal::ONE_HUNDRED;

/// Units-area deduction beyond this forces the failing band.
const FAILING_UNIT_THRESHOLD: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Cap applied when the failing-unit rule triggers; also the top of the
/// band that the 59/60 rounding exception collapses into.
const FAILING_BAND_CEILING: Decimal = Decimal::from_parts(59, 0, 0, false, 0);

const PASSING_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Compute the NSPIRE score for a set of findings normalized over the
/// sampled unit count.
///
/// Pure and total: findings without a recognized scoring area are
/// skipped, missing severities count as moderate, and a zero
/// `unit_sample` is floored to 1. Never fails.
pub fn calculate_nspire_score(findings: &[Finding], unit_sample: u32) -> ScoreResult {
    let sample = Decimal::from(unit_sample.max(1));

    // Bucket findings into the 3x4 (area, severity) grid.
    let mut counts: BTreeMap<(ScoringArea, Severity), u32> = BTreeMap::new();
    for finding in findings {
        let Some(area) = finding.area else {
            // Must be normalized upstream; unrecognized buckets are a
            // data-quality problem for the caller, not the engine.
            continue;
        };
        *counts.entry((area, finding.effective_severity())).or_insert(0) += 1;
    }

    let mut deducted = PointsDeducted::default();
    for ((area, severity), count) in &counts {
        let points = policy::point_weight(*area, *severity) * Decimal::from(*count) / sample;
        match area {
            ScoringArea::Outside => deducted.outside += points,
            ScoringArea::Inside => deducted.inside += points,
            ScoringArea::Units => deducted.units += points,
        }
        deducted.total += points;
    }

    let mut raw = PERFECT_SCORE - deducted.total;

    // Failing-unit override: a unit-area deduction above 30 points forces
    // the failing band regardless of the arithmetic total.
    let failing_unit_adjustment = deducted.units > FAILING_UNIT_THRESHOLD;
    if failing_unit_adjustment {
        raw = raw.min(FAILING_BAND_CEILING);
    }

    // Scores strictly between 59 and 60 round down into the failing band
    // (60 is the minimum passing threshold); everything else rounds to
    // the nearest integer.
    let score = if raw > FAILING_BAND_CEILING && raw < PASSING_THRESHOLD {
        59
    } else {
        raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    };

    ScoreResult {
        score,
        points_deducted: deducted,
        failing_unit_adjustment,
        inspection_cycle: inspection_cycle(score),
    }
}

/// Years until the next inspection for a given score (0 = failing, no
/// extension).
pub fn inspection_cycle(score: i64) -> u8 {
    if score >= 90 {
        3
    } else if score >= 80 {
        2
    } else if score >= 60 {
        1
    } else {
        0
    }
}
