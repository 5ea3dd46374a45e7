//! ssl-alert - TLS certificate expiry checker with email alerts
//!
//! Checks each configured domain once, in order, and emails an alert for
//! every domain whose certificate is missing or expires within the
//! threshold.

use clap::Parser;
use ssl_alert::alert::{AlertDispatcher, AlertTransport, DryRunTransport, SmtpAlertTransport};
use ssl_alert::checks::{CertificateInspector, InspectorSettings};
use ssl_alert::config;
use ssl_alert::output::{print_error, print_json, ConsoleReporter};
use ssl_alert::runner::Runner;
use ssl_alert::{Cli, Result};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = config::load_config(cli.config.as_deref())?;
    cli.apply_to(&mut settings);
    settings.check.validate()?;

    let threshold = settings.check.threshold()?;
    let domains = cli.collect_domains(&settings)?;

    let transport: Box<dyn AlertTransport> = if cli.dry_run {
        Box::new(DryRunTransport)
    } else {
        Box::new(SmtpAlertTransport::new(&settings.smtp)?)
    };

    let dispatcher = AlertDispatcher::new(
        settings.smtp.sender.clone().unwrap_or_default(),
        settings.smtp.recipient.clone().unwrap_or_default(),
        settings.messages.alert.clone(),
        transport,
    );

    let inspector = CertificateInspector::new(InspectorSettings::from(&settings.check));
    let runner = Runner::new(&inspector, &dispatcher, threshold);

    info!(
        "Checking {} domains on port {} (threshold {} days)",
        domains.len(),
        settings.check.port,
        threshold
    );

    if cli.json {
        let mut reporter = ConsoleReporter::new(io::sink(), settings.messages.console.clone());
        let summary = runner.run(&domains, &mut reporter)?;
        print_json(&summary)?;
    } else {
        let mut reporter = ConsoleReporter::stdout(settings.messages.console.clone());
        let summary = runner.run(&domains, &mut reporter)?;
        reporter.summary(&summary)?;
    }

    Ok(())
}
