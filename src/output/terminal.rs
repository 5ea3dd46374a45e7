//! Terminal output formatting

use crate::config::messages::{ConsoleMessages, Messages};
use crate::models::{ExpiryOutcome, RunSummary};
use console::style;
use std::io::{self, Write};

/// Writes per-domain status lines and the closing summary
pub struct ConsoleReporter<W: Write> {
    out: W,
    messages: ConsoleMessages,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(messages: ConsoleMessages) -> Self {
        Self::new(io::stdout(), messages)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, messages: ConsoleMessages) -> Self {
        Self { out, messages }
    }

    /// Report one domain. Valid certificates always get a status line;
    /// alert-worthy outcomes get an extra `ALERT:` line.
    pub fn domain_result(&mut self, domain: &str, outcome: &ExpiryOutcome) -> io::Result<()> {
        match outcome {
            ExpiryOutcome::NoCertificate => {
                let line = Messages::render(&self.messages.no_certificate_alert, domain, None);
                writeln!(self.out, "{} {}", style("ALERT:").red().bold(), line)
            }
            ExpiryOutcome::Healthy(days) => {
                let line = Messages::render(&self.messages.status, domain, Some(*days));
                writeln!(self.out, "{} {}", style("✓").green().bold(), line)
            }
            ExpiryOutcome::ExpiringSoon(days) => {
                let line = Messages::render(&self.messages.status, domain, Some(*days));
                writeln!(self.out, "{} {}", style("!").yellow().bold(), line)?;
                let alert = Messages::render(&self.messages.expiring_alert, domain, Some(*days));
                writeln!(self.out, "{} {}", style("ALERT:").red().bold(), alert)
            }
        }
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            style(format!(
                "━━━ {} domains checked (threshold {} days) ━━━",
                summary.results.len(),
                summary.threshold_days
            ))
            .cyan()
            .bold()
        )?;
        writeln!(self.out, "  Healthy: {}", style(summary.healthy()).green())?;
        writeln!(self.out, "  Expiring soon: {}", style(summary.expiring()).yellow())?;
        writeln!(
            self.out,
            "  No certificate: {}",
            style(summary.without_certificate()).red()
        )?;
        writeln!(self.out, "  Alerts sent: {}", style(summary.alerts_sent()).bold())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}
