//! Authoritative severity metadata: repair windows, voucher ratings and
//! score weights all live here so no consumer carries its own copy of
//! the severity tables.

use crate::model::{Program, ScoringArea, Severity, VoucherRating};
use chrono::Duration;
use rust_decimal::Decimal;

/// Points deducted per occurrence per sampled unit, by scoring area.
///
/// | severity        | outside | inside | units |
/// |-----------------|---------|--------|-------|
/// | lifeThreatening | 49.60   | 54.50  | 60.00 |
/// | severe          | 12.20   | 13.40  | 14.80 |
/// | moderate        | 4.50    | 5.00   | 5.50  |
/// | low             | 2.00    | 2.20   | 2.40  |
pub fn point_weight(area: ScoringArea, severity: Severity) -> Decimal {
    match (area, severity) {
        (ScoringArea::Outside, Severity::LifeThreatening) => Decimal::new(4960, 2),
        (ScoringArea::Outside, Severity::Severe) => Decimal::new(1220, 2),
        (ScoringArea::Outside, Severity::Moderate) => Decimal::new(450, 2),
        (ScoringArea::Outside, Severity::Low) => Decimal::new(200, 2),
        (ScoringArea::Inside, Severity::LifeThreatening) => Decimal::new(5450, 2),
        (ScoringArea::Inside, Severity::Severe) => Decimal::new(1340, 2),
        (ScoringArea::Inside, Severity::Moderate) => Decimal::new(500, 2),
        (ScoringArea::Inside, Severity::Low) => Decimal::new(220, 2),
        (ScoringArea::Units, Severity::LifeThreatening) => Decimal::new(6000, 2),
        (ScoringArea::Units, Severity::Severe) => Decimal::new(1480, 2),
        (ScoringArea::Units, Severity::Moderate) => Decimal::new(550, 2),
        (ScoringArea::Units, Severity::Low) => Decimal::new(240, 2),
    }
}

/// Time allowed to repair a deficiency of the given severity under the
/// given program, counted from the inspection date.
///
/// Life-threatening deficiencies get 24 hours regardless of program.
/// Severe deficiencies get 30 days under HCV/PBV but 24 hours otherwise.
pub fn repair_window(severity: Severity, program: Program) -> Duration {
    match severity {
        Severity::LifeThreatening => Duration::hours(24),
        Severity::Severe => {
            if program.is_voucher() {
                Duration::days(30)
            } else {
                Duration::hours(24)
            }
        }
        Severity::Moderate => Duration::days(30),
        Severity::Low => Duration::days(60),
    }
}

/// Voucher-program determination per severity.
///
/// Moderate maps to fail as a conservative default; the full NSPIRE rule
/// decides this per deficiency, which this table does not encode.
pub fn voucher_rating(severity: Severity) -> VoucherRating {
    match severity {
        Severity::LifeThreatening | Severity::Severe | Severity::Moderate => VoucherRating::Fail,
        Severity::Low => VoucherRating::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_point_weight_table() {
        assert_eq!(
            point_weight(ScoringArea::Outside, Severity::LifeThreatening),
            dec!(49.60)
        );
        assert_eq!(
            point_weight(ScoringArea::Inside, Severity::LifeThreatening),
            dec!(54.50)
        );
        assert_eq!(
            point_weight(ScoringArea::Units, Severity::LifeThreatening),
            dec!(60.00)
        );
        assert_eq!(point_weight(ScoringArea::Units, Severity::Severe), dec!(14.80));
        assert_eq!(point_weight(ScoringArea::Inside, Severity::Moderate), dec!(5.00));
        assert_eq!(point_weight(ScoringArea::Outside, Severity::Low), dec!(2.00));
    }

    #[test]
    fn test_weights_increase_toward_units() {
        for severity in Severity::ALL {
            let outside = point_weight(ScoringArea::Outside, severity);
            let inside = point_weight(ScoringArea::Inside, severity);
            let units = point_weight(ScoringArea::Units, severity);
            assert!(outside < inside && inside < units, "{severity}");
        }
    }

    #[test]
    fn test_repair_window_severe_voucher_vs_standard() {
        assert_eq!(
            repair_window(Severity::Severe, Program::Hcv),
            Duration::days(30)
        );
        assert_eq!(
            repair_window(Severity::Severe, Program::Pbv),
            Duration::days(30)
        );
        assert_eq!(
            repair_window(Severity::Severe, Program::Standard),
            Duration::hours(24)
        );
    }

    #[test]
    fn test_voucher_rating_defaults() {
        assert_eq!(voucher_rating(Severity::LifeThreatening), VoucherRating::Fail);
        assert_eq!(voucher_rating(Severity::Severe), VoucherRating::Fail);
        assert_eq!(voucher_rating(Severity::Moderate), VoucherRating::Fail);
        assert_eq!(voucher_rating(Severity::Low), VoucherRating::Pass);
    }
}
