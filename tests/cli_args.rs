use clap::Parser;
use ssl_alert::config::Settings;
use ssl_alert::Cli;
use std::io::Write;

#[test]
fn test_parse_domains_and_threshold() {
    let cli = Cli::try_parse_from(["ssl-alert", "--days", "20", "google.com", "seal.or.id"]).unwrap();
    assert_eq!(cli.days, Some(20));
    assert_eq!(cli.domains, vec!["google.com", "seal.or.id"]);
    assert!(!cli.dry_run);
}

#[test]
fn test_cli_overrides_settings() {
    let cli = Cli::try_parse_from([
        "ssl-alert",
        "-d",
        "30",
        "--port",
        "8443",
        "--timeout",
        "3",
        "--no-verify",
    ])
    .unwrap();

    let mut settings = Settings::from_toml("[check]\nthreshold_days = 20\n").unwrap();
    cli.apply_to(&mut settings);

    assert_eq!(settings.check.threshold().unwrap(), 30);
    assert_eq!(settings.check.port, 8443);
    assert_eq!(settings.check.timeout_secs, 3);
    assert!(!settings.check.verify_certificates);
}

#[test]
fn test_collect_domains_merges_sources() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# staging").unwrap();
    writeln!(file, "expired.badssl.com").unwrap();
    writeln!(file, "google.com").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let cli = Cli::try_parse_from(["ssl-alert", "--file", &path, "https://Google.com/"]).unwrap();
    let settings = Settings::from_toml("domains = [\"seal.or.id\"]\n").unwrap();

    let domains = cli.collect_domains(&settings).unwrap();
    assert_eq!(domains, vec!["google.com", "expired.badssl.com", "seal.or.id"]);
}

#[test]
fn test_collect_domains_requires_one() {
    let cli = Cli::try_parse_from(["ssl-alert"]).unwrap();
    assert!(cli.collect_domains(&Settings::default()).is_err());
}

#[test]
fn test_verbose_log_filter() {
    let cli = Cli::try_parse_from(["ssl-alert", "-v"]).unwrap();
    assert_eq!(cli.log_filter(), "debug");
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(Cli::try_parse_from(["ssl-alert", "--timeout", "0", "google.com"]).is_err());
}
