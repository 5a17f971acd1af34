//! Mock data.
//!
//! Hard-coded values standing in for what a real ingestion / inference
//! backend would return. Tables are built once on first access.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::models::{
    ExtractedParameter, HistoryEntry, IndicatorStatus, InfoCard, KeyIndicator, PredictionResult,
    QuickAction, RecentActivity, Recommendation, RiskLevel, Stage, StatCard, SupportedDisease,
    SupportedFormat,
};
use crate::routes::Route;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Processing
// =============================================================================

static PROCESSING_STAGES: Lazy<Vec<Stage>> = Lazy::new(|| {
    vec![
        Stage::new(
            1,
            "Extracting Data",
            "Using OCR to extract text from your medical report",
            2000,
        ),
        Stage::new(
            2,
            "Identifying Report Type",
            "Analyzing document structure and report category",
            1500,
        ),
        Stage::new(
            3,
            "Preprocessing Data",
            "Cleaning and normalizing medical parameters",
            2000,
        ),
        Stage::new(4, "ML Prediction", "Running disease prediction models", 2500),
    ]
});

/// The four stages of the simulated analysis.
pub fn processing_stages() -> &'static [Stage] {
    &PROCESSING_STAGES
}

// =============================================================================
// Results
// =============================================================================

static PREDICTION: Lazy<PredictionResult> = Lazy::new(|| PredictionResult {
    disease: "Type 2 Diabetes".into(),
    risk_level: RiskLevel::Medium,
    accuracy: 94.7,
    confidence: 89.0,
    analyzed_at: datetime(2026, 1, 18, 10, 32),
    report_type: "Blood Test Report".into(),
});

pub fn prediction_result() -> &'static PredictionResult {
    &PREDICTION
}

static KEY_INDICATORS: Lazy<Vec<KeyIndicator>> = Lazy::new(|| {
    let row = |label: &str, value: &str, status, normal: &str| KeyIndicator {
        label: label.into(),
        value: value.into(),
        status,
        normal_range: normal.into(),
    };
    vec![
        row("Blood Glucose", "142 mg/dL", IndicatorStatus::High, "70-100 mg/dL"),
        row("HbA1c", "6.8%", IndicatorStatus::High, "< 5.7%"),
        row("Cholesterol", "210 mg/dL", IndicatorStatus::Medium, "< 200 mg/dL"),
        row("Blood Pressure", "128/82", IndicatorStatus::Normal, "< 120/80"),
    ]
});

pub fn key_indicators() -> &'static [KeyIndicator] {
    &KEY_INDICATORS
}

// =============================================================================
// Detailed Report
// =============================================================================

static EXTRACTED_PARAMETERS: Lazy<Vec<ExtractedParameter>> = Lazy::new(|| {
    let row = |name: &str, value: &str, reference: &str, status| ExtractedParameter {
        name: name.into(),
        value: value.into(),
        reference: reference.into(),
        status,
    };
    use IndicatorStatus::{High, Medium, Normal};
    vec![
        row("Fasting Blood Glucose", "142 mg/dL", "70-100 mg/dL", High),
        row("HbA1c (Glycated Hemoglobin)", "6.8%", "< 5.7%", High),
        row("Total Cholesterol", "210 mg/dL", "< 200 mg/dL", Medium),
        row("LDL Cholesterol", "135 mg/dL", "< 100 mg/dL", High),
        row("HDL Cholesterol", "45 mg/dL", "> 40 mg/dL", Normal),
        row("Triglycerides", "165 mg/dL", "< 150 mg/dL", Medium),
        row("Creatinine", "0.9 mg/dL", "0.7-1.3 mg/dL", Normal),
        row("Blood Urea Nitrogen", "15 mg/dL", "7-20 mg/dL", Normal),
    ]
});

pub fn extracted_parameters() -> &'static [ExtractedParameter] {
    &EXTRACTED_PARAMETERS
}

static RECOMMENDATIONS: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation {
            title: "Dietary Changes".into(),
            items: strings(&[
                "Reduce sugar and refined carbohydrate intake",
                "Increase fiber-rich foods (vegetables, whole grains)",
                "Choose lean proteins and healthy fats",
                "Limit processed foods and sugary drinks",
            ]),
        },
        Recommendation {
            title: "Lifestyle Modifications".into(),
            items: strings(&[
                "Aim for 150 minutes of moderate exercise per week",
                "Maintain a healthy body weight (BMI < 25)",
                "Get 7-8 hours of quality sleep",
                "Manage stress through relaxation techniques",
            ]),
        },
        Recommendation {
            title: "Medical Follow-up".into(),
            items: strings(&[
                "Schedule appointment with endocrinologist",
                "Regular blood glucose monitoring",
                "Annual eye and kidney function tests",
                "Blood pressure checks every 3 months",
            ]),
        },
    ]
});

pub fn recommendations() -> &'static [Recommendation] {
    &RECOMMENDATIONS
}

/// Free-text summary paragraph of the detailed report.
pub const ANALYSIS_SUMMARY: &str = "Based on the analysis of your blood test report dated \
January 18, 2026, our AI model has detected elevated blood glucose levels and HbA1c values \
that indicate a Medium Risk for Type 2 Diabetes. The cholesterol profile also shows slight \
elevation that warrants attention. Early intervention through lifestyle modifications can \
significantly improve these markers.";

// =============================================================================
// History
// =============================================================================

static HISTORY: Lazy<Vec<HistoryEntry>> = Lazy::new(|| {
    let row = |id: &str, date: NaiveDate, report: &str, disease: &str, risk, accuracy| {
        HistoryEntry {
            id: id.into(),
            date,
            report_type: report.into(),
            disease: disease.into(),
            risk_level: risk,
            accuracy,
        }
    };
    use RiskLevel::{High, Low, Medium};
    vec![
        row("1", date(2026, 1, 18), "Blood Test Report", "Type 2 Diabetes", Medium, 94.7),
        row("2", date(2026, 1, 10), "ECG Report", "Arrhythmia", Low, 91.2),
        row("3", date(2026, 1, 5), "Liver Function Test", "Fatty Liver", Low, 88.5),
        row("4", date(2025, 12, 28), "Kidney Function Test", "Normal", Low, 96.1),
        row("5", date(2025, 12, 15), "Blood Test Report", "Anemia", Medium, 89.8),
        row("6", date(2025, 12, 1), "Thyroid Panel", "Hypothyroidism", High, 92.3),
    ]
});

/// Past analyses, most recent first.
pub fn history() -> &'static [HistoryEntry] {
    &HISTORY
}

// =============================================================================
// Dashboard
// =============================================================================

/// Name of the signed-in mock patient.
pub const PATIENT_NAME: &str = "Sarah Johnson";

static DASHBOARD_STATS: Lazy<Vec<StatCard>> = Lazy::new(|| {
    let card = |label: &str, value: &str, trend: &str| StatCard {
        label: label.into(),
        value: value.into(),
        trend: trend.into(),
    };
    vec![
        card("Reports Analyzed", "12", "+2 this month"),
        card("Predictions Made", "15", "98% accuracy"),
        card("Low Risk Results", "10", "83% of total"),
        card("Days Active", "45", "Keep it up!"),
    ]
});

pub fn dashboard_stats() -> &'static [StatCard] {
    &DASHBOARD_STATS
}

static QUICK_ACTIONS: Lazy<Vec<QuickAction>> = Lazy::new(|| {
    let action = |title: &str, description: &str, route: Route| QuickAction {
        title: title.into(),
        description: description.into(),
        path: route.path().into(),
    };
    vec![
        action(
            "Upload Report",
            "Upload a new medical report for analysis",
            Route::Upload,
        ),
        action(
            "View Results",
            "Check your latest prediction results",
            Route::Results,
        ),
        action("History", "View all your past predictions", Route::History),
    ]
});

pub fn quick_actions() -> &'static [QuickAction] {
    &QUICK_ACTIONS
}

static SUPPORTED_DISEASES: Lazy<Vec<SupportedDisease>> = Lazy::new(|| {
    [
        ("Diabetes", "97%"),
        ("Heart Disease", "95%"),
        ("Liver Disease", "94%"),
        ("Kidney Disease", "96%"),
    ]
    .into_iter()
    .map(|(name, accuracy)| SupportedDisease {
        name: name.into(),
        accuracy: accuracy.into(),
    })
    .collect()
});

pub fn supported_diseases() -> &'static [SupportedDisease] {
    &SUPPORTED_DISEASES
}

static RECENT_ACTIVITY: Lazy<Vec<RecentActivity>> = Lazy::new(|| {
    let row = |date: NaiveDate, report: &str, risk| RecentActivity {
        date,
        report_type: report.into(),
        status: "Completed".into(),
        risk_level: risk,
    };
    vec![
        row(date(2026, 1, 15), "Blood Test", RiskLevel::Low),
        row(date(2026, 1, 10), "ECG Report", RiskLevel::Medium),
        row(date(2026, 1, 5), "Liver Panel", RiskLevel::Low),
    ]
});

pub fn recent_activity() -> &'static [RecentActivity] {
    &RECENT_ACTIVITY
}

// =============================================================================
// Landing
// =============================================================================

fn cards(items: &[(&str, &str)]) -> Vec<InfoCard> {
    items
        .iter()
        .map(|(title, description)| InfoCard {
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

static FEATURES: Lazy<Vec<InfoCard>> = Lazy::new(|| {
    cards(&[
        ("AI-Powered Analysis", "Advanced machine learning models trained on millions of medical records for accurate predictions."),
        ("Secure & Private", "HIPAA-compliant platform with end-to-end encryption to protect your sensitive health data."),
        ("Instant Results", "Get disease predictions within seconds after uploading your medical reports."),
        ("Multi-Disease Detection", "Screen for diabetes, heart disease, liver conditions, kidney disorders, and more."),
    ])
});

pub fn landing_features() -> &'static [InfoCard] {
    &FEATURES
}

static STEPS: Lazy<Vec<InfoCard>> = Lazy::new(|| {
    cards(&[
        ("Upload Report", "Simply upload your medical report in PDF, JPG, or PNG format."),
        ("AI Analysis", "Our ML models extract and analyze your medical parameters."),
        ("Get Results", "Receive detailed predictions with risk levels and recommendations."),
    ])
});

/// The three "How It Works" steps, in order.
pub fn landing_steps() -> &'static [InfoCard] {
    &STEPS
}

static LANDING_STATS: Lazy<Vec<StatCard>> = Lazy::new(|| {
    [
        ("Accuracy Rate", "98%"),
        ("Reports Analyzed", "50K+"),
        ("Diseases Detected", "10+"),
        ("Availability", "24/7"),
    ]
    .into_iter()
    .map(|(label, value)| StatCard {
        label: label.into(),
        value: value.into(),
        trend: String::new(),
    })
    .collect()
});

pub fn landing_stats() -> &'static [StatCard] {
    &LANDING_STATS
}

static AUTH_HIGHLIGHTS: Lazy<Vec<InfoCard>> = Lazy::new(|| {
    cards(&[
        ("Secure & Private", "HIPAA compliant"),
        ("Multi-Disease", "10+ conditions"),
        ("AI Powered", "99% accuracy"),
        ("Real-time", "Instant results"),
    ])
});

/// Branding tiles next to the login/signup forms.
pub fn auth_highlights() -> &'static [InfoCard] {
    &AUTH_HIGHLIGHTS
}

// =============================================================================
// Upload
// =============================================================================

static SUPPORTED_FORMATS: Lazy<Vec<SupportedFormat>> = Lazy::new(|| {
    [
        ("PDF", "Medical reports, lab results"),
        ("JPG/PNG", "Scanned documents, X-rays"),
        ("DICOM", "Medical imaging files"),
    ]
    .into_iter()
    .map(|(format, description)| SupportedFormat {
        format: format.into(),
        description: description.into(),
    })
    .collect()
});

pub fn supported_formats() -> &'static [SupportedFormat] {
    &SUPPORTED_FORMATS
}

pub const UPLOAD_GUIDELINES: &[&str] = &[
    "Ensure the document is clear and readable",
    "All pages should be properly scanned",
    "Patient information should be visible",
    "Upload recent reports for accurate predictions",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_processing_stages() {
        let stages = processing_stages();
        let ids: Vec<u32> = stages.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let total: Duration = stages.iter().map(|s| s.duration).sum();
        assert_eq!(total, Duration::from_millis(8000));
    }

    #[test]
    fn test_history_is_newest_first() {
        let dates: Vec<NaiveDate> = history().iter().map(|h| h.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(history()[0].date_display(), "January 18, 2026");
    }

    #[test]
    fn test_quick_actions_point_at_routes() {
        for action in quick_actions() {
            assert_ne!(Route::from_path(&action.path), Route::NotFound);
        }
    }

    #[test]
    fn test_prediction_matches_latest_history_entry() {
        let latest = &history()[0];
        let result = prediction_result();
        assert_eq!(result.disease, latest.disease);
        assert_eq!(result.risk_level, latest.risk_level);
        assert_eq!(result.analyzed_at.date(), latest.date);
    }
}
