//! History search and summary.
//!
//! The search box matches case-insensitively against the report type and
//! the predicted condition. An empty query keeps every entry.

use serde::Serialize;

use crate::models::{HistoryEntry, RiskLevel};

/// Returns `true` if `entry` matches `query`.
pub fn matches(entry: &HistoryEntry, query: &str) -> bool {
    let needle = query.to_lowercase();
    entry.report_type.to_lowercase().contains(&needle)
        || entry.disease.to_lowercase().contains(&needle)
}

/// Entries matching `query`, in their original order.
pub fn filter_history<'a>(entries: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    entries.iter().filter(|entry| matches(entry, query)).collect()
}

/// Figures shown above the history table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total: usize,
    pub low_risk: usize,
    /// Mean accuracy, `None` for an empty list.
    pub average_accuracy: Option<f64>,
}

impl HistoryStats {
    pub fn compute(entries: &[HistoryEntry]) -> Self {
        let total = entries.len();
        let low_risk = entries
            .iter()
            .filter(|e| e.risk_level == RiskLevel::Low)
            .count();
        let average_accuracy = if total == 0 {
            None
        } else {
            Some(entries.iter().map(|e| e.accuracy).sum::<f64>() / total as f64)
        };
        Self {
            total,
            low_risk,
            average_accuracy,
        }
    }

    /// "92.1%", or "—" when there is nothing to average.
    pub fn average_accuracy_display(&self) -> String {
        match self.average_accuracy {
            Some(avg) => format!("{:.1}%", avg),
            None => "—".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_filter_ecg() {
        let found = filter_history(mock::history(), "ecg");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].report_type, "ECG Report");
        assert_eq!(found[0].disease, "Arrhythmia");
    }

    #[test]
    fn test_filter_matches_condition_too() {
        let found = filter_history(mock::history(), "LIVER");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");

        let found = filter_history(mock::history(), "anemia");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].report_type, "Blood Test Report");
    }

    #[test]
    fn test_filter_keeps_order() {
        let ids: Vec<&str> = filter_history(mock::history(), "blood")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_empty_query_keeps_all() {
        assert_eq!(filter_history(mock::history(), "").len(), 6);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_history(mock::history(), "xray").is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = HistoryStats::compute(mock::history());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.low_risk, 3);
        assert_eq!(stats.average_accuracy_display(), "92.1%");
    }

    #[test]
    fn test_stats_empty() {
        let stats = HistoryStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_accuracy, None);
        assert_eq!(stats.average_accuracy_display(), "—");
    }
}
