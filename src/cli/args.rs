//! CLI argument definitions using clap

use crate::config::Settings;
use crate::utils::{load_domain_file, merge_domains, ConfigError, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ssl-alert")]
#[command(version)]
#[command(about = "Check TLS certificate expiry and email an alert when one is missing or expiring", long_about = None)]
pub struct Cli {
    /// Domains to check (added to those from --file and the config file)
    #[arg(value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Configuration file (default: ./ssl-alert.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File containing domains (one per line)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Alert when fewer than this many days remain
    #[arg(short, long, value_name = "DAYS", allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Port to connect to
    #[arg(long)]
    pub port: Option<u16>,

    /// Connection and handshake timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Read expiry from untrusted certificates instead of treating them as absent
    #[arg(long)]
    pub no_verify: bool,

    /// Log alerts instead of sending email
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(days) = self.days {
            settings.check.threshold_days = Some(days);
        }
        if let Some(port) = self.port {
            settings.check.port = port;
        }
        if let Some(timeout) = self.timeout {
            settings.check.timeout_secs = timeout;
        }
        if self.no_verify {
            settings.check.verify_certificates = false;
        }
    }

    /// Collect domains from the arguments, the domain file, and the settings
    pub fn collect_domains(&self, settings: &Settings) -> Result<Vec<String>> {
        let from_file = match &self.file {
            Some(path) => load_domain_file(path)?,
            None => Vec::new(),
        };

        let domains = merge_domains(
            self.domains
                .iter()
                .chain(from_file.iter())
                .chain(settings.domains.iter())
                .map(String::as_str),
        );

        if domains.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "domains (arguments, --file, or config)".to_string(),
            }
            .into());
        }

        Ok(domains)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
