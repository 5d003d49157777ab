use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point deductions accumulated per scoring area, in exact decimals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsDeducted {
    pub outside: Decimal,
    pub inside: Decimal,
    pub units: Decimal,
    pub total: Decimal,
}

/// Result of one scoring run over an inspection's findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final integer score, 100 minus deductions after the failing-unit
    /// cap and the 59/60 rounding exception.
    pub score: i64,
    pub points_deducted: PointsDeducted,
    /// True when the units-area deduction exceeded 30 points, whether or
    /// not the cap actually lowered the score.
    pub failing_unit_adjustment: bool,
    /// Recommended years until the next inspection (0 = failing).
    pub inspection_cycle: u8,
}
