//! Utility modules for ssl-alert
//!
//! This module contains error types and domain list helpers.

pub mod domains;
pub mod error;

pub use domains::{load_domain_file, merge_domains, normalize_domain};
pub use error::{ConfigError, InspectError, MailError, Result, ToolkitError};
