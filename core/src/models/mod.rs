//! Domain models for MediPredict.
//!
//! All records are read-only mock values; nothing here is persisted.
//!
//! - [`Stage`] - One named step of the simulated analysis
//! - [`RiskLevel`] - Low / Medium / High classification
//! - [`PredictionResult`] - The headline result of an analysis
//! - [`HistoryEntry`] - A past analysis in the history list
//! - [`KeyIndicator`], [`ExtractedParameter`] - Lab values on the report views
//! - [`Recommendation`] - Grouped advice on the detailed report

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Processing Stage
// =============================================================================

/// A single step of the simulated analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Stable identifier (1-based in the default schedule).
    pub id: u32,
    /// Display title.
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Nominal duration.
    #[serde(with = "duration_ms")]
    pub duration: Duration,
}

impl Stage {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            duration: Duration::from_millis(duration_ms),
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

// =============================================================================
// Risk Level
// =============================================================================

/// Mock classification attached to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }

    /// High risk gets a warning icon, everything else a check mark.
    pub fn is_alarming(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Indicator Status
// =============================================================================

/// Status of a single lab value against its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Normal,
    Medium,
    High,
}

impl IndicatorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IndicatorStatus::Normal => "normal",
            IndicatorStatus::Medium => "medium",
            IndicatorStatus::High => "high",
        }
    }

    /// Statuses reuse the risk palette.
    pub fn css_class(&self) -> &'static str {
        match self {
            IndicatorStatus::Normal => "risk-low",
            IndicatorStatus::Medium => "risk-medium",
            IndicatorStatus::High => "risk-high",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, IndicatorStatus::Normal)
    }
}

// =============================================================================
// Results
// =============================================================================

/// Headline prediction shown on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Predicted condition.
    pub disease: String,
    pub risk_level: RiskLevel,
    /// Prediction accuracy in percent.
    pub accuracy: f64,
    /// Model confidence in percent.
    pub confidence: f64,
    pub analyzed_at: NaiveDateTime,
    pub report_type: String,
}

impl PredictionResult {
    /// "January 18, 2026 at 10:32 AM"
    pub fn analyzed_at_display(&self) -> String {
        self.analyzed_at.format("%B %-d, %Y at %-I:%M %p").to_string()
    }
}

/// Lab value highlighted on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyIndicator {
    pub label: String,
    pub value: String,
    pub status: IndicatorStatus,
    pub normal_range: String,
}

/// Row of the extracted parameters table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedParameter {
    pub name: String,
    pub value: String,
    pub reference: String,
    pub status: IndicatorStatus,
}

/// A group of health recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub items: Vec<String>,
}

// =============================================================================
// History
// =============================================================================

/// A past analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub report_type: String,
    /// Predicted condition.
    pub disease: String,
    pub risk_level: RiskLevel,
    pub accuracy: f64,
}

impl HistoryEntry {
    /// "January 18, 2026"
    pub fn date_display(&self) -> String {
        format_long_date(self.date)
    }
}

/// "January 18, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jan 15, 2026"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

// =============================================================================
// Dashboard / Landing
// =============================================================================

/// Small headline figure ("12 Reports Analyzed").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    /// Secondary line under the value, empty when unused.
    pub trend: String,
}

/// Dashboard shortcut to another view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub path: String,
}

/// A condition the models claim to cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedDisease {
    pub name: String,
    pub accuracy: String,
}

/// Row of the dashboard "Recent Activity" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub date: NaiveDate,
    pub report_type: String,
    pub status: String,
    pub risk_level: RiskLevel,
}

/// Title + description card used by landing features and steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub title: String,
    pub description: String,
}

/// Accepted upload format, shown below the drop zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFormat {
    pub format: String,
    pub description: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_styles() {
        assert_eq!(RiskLevel::Low.css_class(), "risk-low");
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert!(RiskLevel::High.is_alarming());
        assert!(!RiskLevel::Medium.is_alarming());
    }

    #[test]
    fn test_indicator_status_serialization() {
        let json = serde_json::to_string(&IndicatorStatus::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        assert_eq!(IndicatorStatus::Normal.css_class(), "risk-low");
    }

    #[test]
    fn test_stage_duration_as_millis() {
        let stage = Stage::new(1, "Extracting Data", "OCR", 2000);
        let json = serde_json::to_value(&stage).unwrap();
        assert_eq!(json["duration"], 2000);
        let back: Stage = serde_json::from_value(json).unwrap();
        assert_eq!(back.duration, Duration::from_millis(2000));
    }

    #[test]
    fn test_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_long_date(date), "January 5, 2026");
        assert_eq!(format_short_date(date), "Jan 5, 2026");
    }

    #[test]
    fn test_analyzed_at_display() {
        let result = PredictionResult {
            disease: "Type 2 Diabetes".into(),
            risk_level: RiskLevel::Medium,
            accuracy: 94.7,
            confidence: 89.0,
            analyzed_at: NaiveDate::from_ymd_opt(2026, 1, 18)
                .unwrap()
                .and_hms_opt(10, 32, 0)
                .unwrap(),
            report_type: "Blood Test Report".into(),
        };
        assert_eq!(result.analyzed_at_display(), "January 18, 2026 at 10:32 AM");
    }
}
