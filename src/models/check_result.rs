//! Check outcome types

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Classification of a domain against the alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "days_remaining", rename_all = "snake_case")]
pub enum ExpiryOutcome {
    /// No certificate could be retrieved
    NoCertificate,
    /// Fewer days remain than the threshold (negative when already expired)
    ExpiringSoon(i64),
    /// At least the threshold number of days remain
    Healthy(i64),
}

impl ExpiryOutcome {
    /// Whether this outcome should produce an alert
    pub fn needs_alert(&self) -> bool {
        !matches!(self, ExpiryOutcome::Healthy(_))
    }

    pub fn days_remaining(&self) -> Option<i64> {
        match self {
            ExpiryOutcome::NoCertificate => None,
            ExpiryOutcome::ExpiringSoon(days) | ExpiryOutcome::Healthy(days) => Some(*days),
        }
    }
}

impl fmt::Display for ExpiryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryOutcome::NoCertificate => write!(f, "No Certificate"),
            ExpiryOutcome::ExpiringSoon(_) => write!(f, "Expiring Soon"),
            ExpiryOutcome::Healthy(_) => write!(f, "Healthy"),
        }
    }
}

/// Per-domain record of a check run
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub domain: String,
    #[serde(flatten)]
    pub outcome: ExpiryOutcome,
    pub expires_at: Option<DateTime<Utc>>,
    pub alert_sent: bool,
}

/// Aggregate of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub threshold_days: i64,
    pub checked_at: Option<DateTime<Utc>>,
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn new(threshold_days: i64, checked_at: DateTime<Utc>) -> Self {
        Self {
            threshold_days,
            checked_at: Some(checked_at),
            results: Vec::new(),
        }
    }

    pub fn healthy(&self) -> usize {
        self.count(|o| matches!(o, ExpiryOutcome::Healthy(_)))
    }

    pub fn expiring(&self) -> usize {
        self.count(|o| matches!(o, ExpiryOutcome::ExpiringSoon(_)))
    }

    pub fn without_certificate(&self) -> usize {
        self.count(|o| matches!(o, ExpiryOutcome::NoCertificate))
    }

    pub fn alerts_sent(&self) -> usize {
        self.results.iter().filter(|r| r.alert_sent).count()
    }

    fn count(&self, predicate: impl Fn(&ExpiryOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| predicate(&r.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_alert() {
        assert!(ExpiryOutcome::NoCertificate.needs_alert());
        assert!(ExpiryOutcome::ExpiringSoon(5).needs_alert());
        assert!(ExpiryOutcome::ExpiringSoon(-3).needs_alert());
        assert!(!ExpiryOutcome::Healthy(100).needs_alert());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new(20, Utc::now());
        for (domain, outcome, sent) in [
            ("a.example", ExpiryOutcome::Healthy(90), false),
            ("b.example", ExpiryOutcome::ExpiringSoon(3), true),
            ("c.example", ExpiryOutcome::NoCertificate, true),
        ] {
            summary.results.push(CheckResult {
                domain: domain.to_string(),
                outcome,
                expires_at: None,
                alert_sent: sent,
            });
        }

        assert_eq!(summary.healthy(), 1);
        assert_eq!(summary.expiring(), 1);
        assert_eq!(summary.without_certificate(), 1);
        assert_eq!(summary.alerts_sent(), 2);
    }

    #[test]
    fn test_result_serializes_flat() {
        let result = CheckResult {
            domain: "soon.example".to_string(),
            outcome: ExpiryOutcome::ExpiringSoon(5),
            expires_at: None,
            alert_sent: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "expiring_soon");
        assert_eq!(json["days_remaining"], 5);
        assert_eq!(json["alert_sent"], true);
    }
}
