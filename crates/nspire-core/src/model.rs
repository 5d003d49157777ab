use crate::policy;
use crate::sampling;
use crate::scoring::{self, outcome::ScoreResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deficiency urgency level. Drives repair deadlines, voucher rating and
/// score weight via the [`policy`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    LifeThreatening,
    Severe,
    Moderate,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::LifeThreatening => write!(f, "life-threatening"),
            Severity::Severe => write!(f, "severe"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Low => write!(f, "low"),
        }
    }
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::LifeThreatening,
        Severity::Severe,
        Severity::Moderate,
        Severity::Low,
    ];

    pub fn from_str_loose(s: &str) -> Option<Severity> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "lifethreatening" | "life-threatening" | "life_threatening" | "lt" => {
                Some(Severity::LifeThreatening)
            }
            "severe" => Some(Severity::Severe),
            "moderate" => Some(Severity::Moderate),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Scoring bucket used by the point-deduction weights.
///
/// Distinct from [`AreaType`], which is the navigation taxonomy used by
/// the surrounding application. The two schemes are translated exactly
/// once, at the scoring boundary in [`Inspection::calculate_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringArea {
    Outside,
    Inside,
    Units,
}

impl fmt::Display for ScoringArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringArea::Outside => write!(f, "outside"),
            ScoringArea::Inside => write!(f, "inside"),
            ScoringArea::Units => write!(f, "units"),
        }
    }
}

impl ScoringArea {
    pub const ALL: [ScoringArea; 3] =
        [ScoringArea::Outside, ScoringArea::Inside, ScoringArea::Units];

    pub fn from_str_loose(s: &str) -> Option<ScoringArea> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "outside" => Some(ScoringArea::Outside),
            "inside" => Some(ScoringArea::Inside),
            "units" => Some(ScoringArea::Units),
            _ => None,
        }
    }
}

/// UI-facing area taxonomy (`unit`/`inside`/`outside`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    Unit,
    Inside,
    Outside,
}

impl AreaType {
    /// The one sanctioned translation into the scoring bucket scheme.
    pub fn scoring_area(self) -> ScoringArea {
        match self {
            AreaType::Unit => ScoringArea::Units,
            AreaType::Inside => ScoringArea::Inside,
            AreaType::Outside => ScoringArea::Outside,
        }
    }
}

/// Federal program the inspection is conducted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    Standard,
    Hcv,
    Pbv,
}

impl Program {
    /// HCV and PBV carry their own repair-timeframe rules for severe
    /// deficiencies.
    pub fn is_voucher(self) -> bool {
        matches!(self, Program::Hcv | Program::Pbv)
    }
}

/// Voucher-program pass/fail determination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherRating {
    Pass,
    Fail,
}

impl fmt::Display for VoucherRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoucherRating::Pass => write!(f, "pass"),
            VoucherRating::Fail => write!(f, "fail"),
        }
    }
}

/// Remediation lifecycle of a finding, independent of scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    #[default]
    Open,
    Scheduled,
    Repaired,
    Verified,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionType {
    Reac,
    Hcv,
    #[serde(rename = "self")]
    SelfInspection,
    Pbv,
    Standard,
}

impl InspectionType {
    /// Which program's repair-timeframe rules apply.
    pub fn program(self) -> Program {
        match self {
            InspectionType::Hcv => Program::Hcv,
            InspectionType::Pbv => Program::Pbv,
            InspectionType::Reac | InspectionType::SelfInspection | InspectionType::Standard => {
                Program::Standard
            }
        }
    }
}

fn severity_loose<'de, D>(de: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.as_deref().and_then(Severity::from_str_loose))
}

fn scoring_area_loose<'de, D>(de: D) -> Result<Option<ScoringArea>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.as_deref().and_then(ScoringArea::from_str_loose))
}

/// One recorded deficiency within an inspection area.
///
/// Unrecognized `severity` or `area` values deserialize to `None` rather
/// than failing; downstream consumers apply the documented defaults
/// (moderate severity, exclusion from scoring).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    /// Scoring bucket, if already normalized upstream. When absent, the
    /// containing [`Area`]'s `area_type` supplies it at scoring time.
    #[serde(default, deserialize_with = "scoring_area_loose")]
    pub area: Option<ScoringArea>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default, deserialize_with = "severity_loose")]
    pub severity: Option<Severity>,
    /// Optional link into the deficiency catalog.
    #[serde(default)]
    pub deficiency_id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub status: FindingStatus,
    /// Cached derived fields, refreshed by [`Finding::refresh_derived`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hcv_rating: Option<VoucherRating>,
}

impl Finding {
    pub fn new(id: impl Into<String>, severity: Severity) -> Finding {
        Finding {
            id: id.into(),
            area: None,
            category: None,
            subcategory: None,
            severity: Some(severity),
            deficiency_id: None,
            description: String::new(),
            location: None,
            notes: None,
            photos: Vec::new(),
            status: FindingStatus::Open,
            repair_due_date: None,
            hcv_rating: None,
        }
    }

    /// Missing or unrecognized severity is treated as moderate.
    pub fn effective_severity(&self) -> Severity {
        self.severity.unwrap_or(Severity::Moderate)
    }

    /// Repair deadline for this finding under the given program.
    pub fn calculate_repair_due_date(
        &self,
        program: Program,
        inspection_date: DateTime<Utc>,
    ) -> DateTime<Utc> {
        inspection_date + policy::repair_window(self.effective_severity(), program)
    }

    /// Voucher-program determination.
    ///
    /// Moderate findings currently fail. The full NSPIRE rule conditions
    /// this on the specific deficiency; that mapping is not encoded here,
    /// so the conservative per-severity default applies.
    pub fn is_fail_for_voucher(&self) -> bool {
        policy::voucher_rating(self.effective_severity()) == VoucherRating::Fail
    }

    /// Recompute the cached `repair_due_date` and `hcv_rating`.
    pub fn refresh_derived(&mut self, program: Program, inspection_date: DateTime<Utc>) {
        self.repair_due_date = Some(self.calculate_repair_due_date(program, inspection_date));
        self.hcv_rating = Some(if self.is_fail_for_voucher() {
            VoucherRating::Fail
        } else {
            VoucherRating::Pass
        });
    }
}

/// A named grouping of findings within an inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub area_type: AreaType,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// Aggregate root: one inspection of one property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    pub id: String,
    pub property_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub inspector: Option<String>,
    #[serde(default)]
    pub status: InspectionStatus,
    #[serde(rename = "type")]
    pub inspection_type: InspectionType,
    pub total_units: u32,
    /// Derived from `total_units` at construction time. Not recomputed
    /// automatically if `total_units` changes later.
    pub unit_sample: u32,
    #[serde(default)]
    pub areas: Vec<Area>,
    /// Cache of the last scoring run. Stale after any finding mutation
    /// until [`Inspection::recalculate_score`] is called.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_details: Option<ScoreResult>,
}

impl Inspection {
    pub fn new(
        id: impl Into<String>,
        property_id: impl Into<String>,
        date: DateTime<Utc>,
        inspection_type: InspectionType,
        total_units: u32,
    ) -> Inspection {
        Inspection {
            id: id.into(),
            property_id: property_id.into(),
            date,
            inspector: None,
            status: InspectionStatus::Scheduled,
            inspection_type,
            total_units,
            unit_sample: sampling::sample_size(i64::from(total_units)),
            areas: Vec::new(),
            score: None,
            score_details: None,
        }
    }

    pub fn program(&self) -> Program {
        self.inspection_type.program()
    }

    /// Flatten findings across all areas, normalizing each finding's
    /// scoring bucket from its containing area where not already set.
    /// This is the single translation point between the UI area taxonomy
    /// and the scoring buckets.
    pub fn scoring_findings(&self) -> Vec<Finding> {
        self.areas
            .iter()
            .flat_map(|area| {
                area.findings.iter().map(move |f| {
                    let mut f = f.clone();
                    if f.area.is_none() {
                        f.area = Some(area.area_type.scoring_area());
                    }
                    f
                })
            })
            .collect()
    }

    /// Sole sanctioned scoring entry point: always uses this inspection's
    /// own `unit_sample` and normalized findings.
    pub fn calculate_score(&self) -> ScoreResult {
        scoring::calculate_nspire_score(&self.scoring_findings(), self.unit_sample)
    }

    /// Recompute and cache `score`/`score_details`. Callers invoke this
    /// after every finding create, edit or delete.
    pub fn recalculate_score(&mut self) -> ScoreResult {
        let result = self.calculate_score();
        self.score = Some(result.score);
        self.score_details = Some(result.clone());
        result
    }

    /// Fail if any contained finding fails its voucher determination.
    pub fn voucher_result(&self) -> VoucherRating {
        let any_fail = self
            .areas
            .iter()
            .flat_map(|a| a.findings.iter())
            .any(Finding::is_fail_for_voucher);
        if any_fail {
            VoucherRating::Fail
        } else {
            VoucherRating::Pass
        }
    }

    /// A score below 60 triggers a full survey.
    pub fn requires_full_survey(&self) -> bool {
        let score = self.score.unwrap_or_else(|| self.calculate_score().score);
        score < 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_severity_loose_parsing() {
        assert_eq!(
            Severity::from_str_loose("lifeThreatening"),
            Some(Severity::LifeThreatening)
        );
        assert_eq!(
            Severity::from_str_loose("Life-Threatening"),
            Some(Severity::LifeThreatening)
        );
        assert_eq!(Severity::from_str_loose(" severe "), Some(Severity::Severe));
        assert_eq!(Severity::from_str_loose("critical"), None);
    }

    #[test]
    fn test_area_type_translates_to_scoring_bucket() {
        assert_eq!(AreaType::Unit.scoring_area(), ScoringArea::Units);
        assert_eq!(AreaType::Inside.scoring_area(), ScoringArea::Inside);
        assert_eq!(AreaType::Outside.scoring_area(), ScoringArea::Outside);
    }

    #[test]
    fn test_repair_due_date_life_threatening_always_24h() {
        let f = Finding::new("f1", Severity::LifeThreatening);
        let d = date("2025-01-01T00:00:00Z");
        for program in [Program::Standard, Program::Hcv, Program::Pbv] {
            assert_eq!(
                f.calculate_repair_due_date(program, d),
                date("2025-01-02T00:00:00Z")
            );
        }
    }

    #[test]
    fn test_repair_due_date_severe_depends_on_program() {
        let f = Finding::new("f1", Severity::Severe);
        let d = date("2025-01-01T00:00:00Z");
        assert_eq!(
            f.calculate_repair_due_date(Program::Hcv, d),
            date("2025-01-31T00:00:00Z")
        );
        assert_eq!(
            f.calculate_repair_due_date(Program::Pbv, d),
            date("2025-01-31T00:00:00Z")
        );
        assert_eq!(
            f.calculate_repair_due_date(Program::Standard, d),
            date("2025-01-02T00:00:00Z")
        );
    }

    #[test]
    fn test_repair_due_date_moderate_and_low() {
        let d = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let moderate = Finding::new("f1", Severity::Moderate);
        let low = Finding::new("f2", Severity::Low);
        assert_eq!(
            moderate.calculate_repair_due_date(Program::Standard, d),
            Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap()
        );
        assert_eq!(
            low.calculate_repair_due_date(Program::Standard, d),
            Utc.with_ymd_and_hms(2025, 4, 30, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_severity_uses_moderate_rule() {
        let mut f = Finding::new("f1", Severity::Moderate);
        f.severity = None;
        let d = date("2025-01-01T00:00:00Z");
        assert_eq!(
            f.calculate_repair_due_date(Program::Standard, d),
            date("2025-01-31T00:00:00Z")
        );
        assert_eq!(f.effective_severity(), Severity::Moderate);
    }

    #[test]
    fn test_voucher_rating_per_severity() {
        assert!(Finding::new("f", Severity::LifeThreatening).is_fail_for_voucher());
        assert!(Finding::new("f", Severity::Severe).is_fail_for_voucher());
        // Current default policy: moderate fails.
        assert!(Finding::new("f", Severity::Moderate).is_fail_for_voucher());
        assert!(!Finding::new("f", Severity::Low).is_fail_for_voucher());
    }

    #[test]
    fn test_refresh_derived_sets_caches() {
        let mut f = Finding::new("f1", Severity::Low);
        f.refresh_derived(Program::Standard, date("2025-01-01T00:00:00Z"));
        assert_eq!(f.repair_due_date, Some(date("2025-03-02T00:00:00Z")));
        assert_eq!(f.hcv_rating, Some(VoucherRating::Pass));
    }

    #[test]
    fn test_inspection_new_derives_unit_sample() {
        let insp = Inspection::new(
            "i1",
            "p1",
            date("2025-01-01T00:00:00Z"),
            InspectionType::Reac,
            10,
        );
        assert_eq!(insp.unit_sample, 8);
    }

    #[test]
    fn test_unit_sample_not_recomputed_on_total_units_change() {
        let mut insp = Inspection::new(
            "i1",
            "p1",
            date("2025-01-01T00:00:00Z"),
            InspectionType::Reac,
            10,
        );
        insp.total_units = 500;
        assert_eq!(insp.unit_sample, 8);
    }

    #[test]
    fn test_inspection_type_program_mapping() {
        assert_eq!(InspectionType::Hcv.program(), Program::Hcv);
        assert_eq!(InspectionType::Pbv.program(), Program::Pbv);
        assert_eq!(InspectionType::Reac.program(), Program::Standard);
        assert_eq!(InspectionType::SelfInspection.program(), Program::Standard);
        assert_eq!(InspectionType::Standard.program(), Program::Standard);
    }

    #[test]
    fn test_finding_unknown_severity_deserializes_to_none() {
        let json = r#"{ "id": "f1", "severity": "catastrophic" }"#;
        let f: Finding = serde_json::from_str(json).unwrap();
        assert_eq!(f.severity, None);
        assert_eq!(f.effective_severity(), Severity::Moderate);
    }

    #[test]
    fn test_finding_ui_area_value_deserializes_to_none() {
        // "unit" is the UI taxonomy; the scoring bucket is "units". The
        // containing area supplies the bucket at scoring time.
        let json = r#"{ "id": "f1", "area": "unit", "severity": "low" }"#;
        let f: Finding = serde_json::from_str(json).unwrap();
        assert_eq!(f.area, None);
    }

    #[test]
    fn test_voucher_result_over_areas() {
        let d = date("2025-01-01T00:00:00Z");
        let mut insp = Inspection::new("i1", "p1", d, InspectionType::Hcv, 4);
        insp.areas.push(Area {
            id: "a1".into(),
            name: "Unit 101".into(),
            area_type: AreaType::Unit,
            findings: vec![Finding::new("f1", Severity::Low)],
        });
        assert_eq!(insp.voucher_result(), VoucherRating::Pass);

        insp.areas[0]
            .findings
            .push(Finding::new("f2", Severity::Severe));
        assert_eq!(insp.voucher_result(), VoucherRating::Fail);
    }
}
