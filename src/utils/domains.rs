//! Domain list helpers

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reduce user input to a bare lowercase hostname.
///
/// Accepts `https://Example.com/path` as well as `example.com`.
pub fn normalize_domain(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let host = without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .trim_end_matches('.');

    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Read domains from a file, one per line. Blank lines and `#` comments are skipped.
pub fn load_domain_file(path: &Path) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut domains = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        domains.push(trimmed.to_string());
    }

    Ok(domains)
}

/// Normalize every source and drop duplicates, keeping first-seen order.
pub fn merge_domains<'a, I>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged: Vec<String> = Vec::new();
    for domain in sources.into_iter().filter_map(normalize_domain) {
        if !merged.contains(&domain) {
            merged.push(domain);
        }
    }
    merged
}
