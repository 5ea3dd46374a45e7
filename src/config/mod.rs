//! Configuration module for ssl-alert
//!
//! Handles loading settings and message templates from a TOML file and
//! the environment.

pub mod messages;
pub mod settings;

pub use messages::Messages;
pub use settings::{CheckSettings, Settings, SmtpSettings};

use crate::utils::ConfigError;
use std::path::Path;

/// Load settings from `path`, or the default file when none is given, then
/// apply environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };
    settings.apply_env()?;
    Ok(settings)
}
