//! JSON output formatter

use crate::models::RunSummary;
use serde::Serialize;

/// JSON-serializable run report
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub threshold_days: i64,
    pub checked_at: Option<String>,
    pub healthy: usize,
    pub expiring: usize,
    pub no_certificate: usize,
    pub alerts_sent: usize,
    pub results: &'a [crate::models::CheckResult],
}

pub fn to_json_output(summary: &RunSummary) -> JsonOutput<'_> {
    JsonOutput {
        threshold_days: summary.threshold_days,
        checked_at: summary.checked_at.map(|t| t.to_rfc3339()),
        healthy: summary.healthy(),
        expiring: summary.expiring(),
        no_certificate: summary.without_certificate(),
        alerts_sent: summary.alerts_sent(),
        results: &summary.results,
    }
}

/// Print the run summary as JSON to stdout
pub fn print_json(summary: &RunSummary) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(&to_json_output(summary))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CheckResult, ExpiryOutcome};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_json_output_counts() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        let mut summary = RunSummary::new(20, now);
        summary.results.push(CheckResult {
            domain: "noSSL.example".to_string(),
            outcome: ExpiryOutcome::NoCertificate,
            expires_at: None,
            alert_sent: true,
        });

        let value = serde_json::to_value(to_json_output(&summary)).unwrap();
        assert_eq!(value["no_certificate"], 1);
        assert_eq!(value["alerts_sent"], 1);
        assert_eq!(value["results"][0]["outcome"], "no_certificate");
        assert_eq!(value["checked_at"], "2026-10-19T00:00:00+00:00");
    }
}
