//! Check orchestration
//!
//! Walks the domain list in order, one domain at a time: inspect, evaluate,
//! report, alert. A failed alert delivery stops the run; the remaining
//! domains are not checked.

use crate::alert::AlertDispatcher;
use crate::checks::{evaluate, CertificateSource};
use crate::models::{CertificateStatus, CheckResult, RunSummary};
use crate::output::ConsoleReporter;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::debug;

/// Source of the current time
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// Sequential certificate check over a list of domains
pub struct Runner<'a, S: CertificateSource> {
    source: &'a S,
    dispatcher: &'a AlertDispatcher,
    threshold_days: i64,
    clock: Clock,
}

impl<'a, S: CertificateSource> Runner<'a, S> {
    pub fn new(source: &'a S, dispatcher: &'a AlertDispatcher, threshold_days: i64) -> Self {
        Self {
            source,
            dispatcher,
            threshold_days,
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Check a single domain and send its alert if one is due
    pub fn check_domain<W: Write>(
        &self,
        domain: &str,
        reporter: &mut ConsoleReporter<W>,
    ) -> Result<CheckResult> {
        let status = self.source.inspect(domain);
        let outcome = evaluate(&status, self.threshold_days, (self.clock)());
        match &status {
            CertificateStatus::Valid { expires_at } => {
                debug!("{}: expires {} -> {}", domain, expires_at, outcome)
            }
            CertificateStatus::Absent { reason } => {
                debug!("{}: no certificate ({}) -> {}", domain, reason, outcome)
            }
        }

        reporter.domain_result(domain, &outcome)?;
        let alert_sent = self.dispatcher.dispatch(domain, &outcome)?;

        Ok(CheckResult {
            domain: domain.to_string(),
            outcome,
            expires_at: status.expires_at(),
            alert_sent,
        })
    }

    /// Check every domain in order
    pub fn run<W: Write>(
        &self,
        domains: &[String],
        reporter: &mut ConsoleReporter<W>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::new(self.threshold_days, (self.clock)());

        for domain in domains {
            let result = self.check_domain(domain, reporter)?;
            summary.results.push(result);
        }

        Ok(summary)
    }
}
