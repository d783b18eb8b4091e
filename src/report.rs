// 📋 Tally Report - Serializable summary of one tally run
// What the CLI prints in --json mode; also handy for external callers

use crate::tally::{compute_votes, TallyError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of one tally run in a serialization-friendly shape.
///
/// `result_code` follows the integer-code interface (0 = success,
/// 1 = invalid syntax, 2 = zero votes, 3 = invalid party); `total` is
/// present only on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyReport {
    pub predictions: String,
    pub party: char,
    pub result_code: i32,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
}

impl TallyReport {
    /// Run the tally and capture its outcome as a report
    pub fn build(predictions: &str, party: char) -> Self {
        Self::from_result(predictions, party, compute_votes(predictions, party))
    }

    /// Wrap an already-computed tally result
    pub fn from_result(
        predictions: &str,
        party: char,
        result: Result<u32, TallyError>,
    ) -> Self {
        match result {
            Ok(total) => TallyReport {
                predictions: predictions.to_string(),
                party,
                result_code: 0,
                outcome: "success".to_string(),
                total: Some(total),
            },
            Err(err) => TallyReport {
                predictions: predictions.to_string(),
                party,
                result_code: err.code(),
                outcome: err.label().to_string(),
                total: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.result_code == 0
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize tally report")
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_report() {
        let report = TallyReport::build("R40TXD54CAr6MS", 'R');
        assert!(report.is_success());
        assert_eq!(report.result_code, 0);
        assert_eq!(report.outcome, "success");
        assert_eq!(report.total, Some(46));
    }

    #[test]
    fn test_failure_report_has_no_total() {
        let report = TallyReport::build("D0CA", 'D');
        assert!(!report.is_success());
        assert_eq!(report.result_code, 2);
        assert_eq!(report.outcome, "zero_votes");
        assert_eq!(report.total, None);
    }

    #[test]
    fn test_json_round_trip() {
        let report = TallyReport::build("D5CA", 'd');
        let json = report.to_json().unwrap();

        let back: TallyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result_code, 0);
        assert_eq!(back.party, 'd');
        assert_eq!(back.total, Some(5));
    }

    #[test]
    fn test_failure_json_omits_total() {
        let report = TallyReport::build("D5CA", '@');
        let json = report.to_json().unwrap();
        assert!(!json.contains("total"));
        assert!(json.contains("invalid_party"));
    }
}
