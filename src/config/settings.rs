//! Application settings configuration
//!
//! Defines the domain list, check parameters, and SMTP delivery settings.
//! Values come from a TOML file and are then overridden from the
//! environment. The SMTP password is only ever read from the environment.

use crate::config::Messages;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Configuration file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ssl-alert.toml";

pub const ENV_SMTP_HOST: &str = "SSL_ALERT_SMTP_HOST";
pub const ENV_SMTP_PORT: &str = "SSL_ALERT_SMTP_PORT";
pub const ENV_SENDER: &str = "SSL_ALERT_SENDER";
pub const ENV_RECIPIENT: &str = "SSL_ALERT_RECIPIENT";
pub const ENV_SMTP_USERNAME: &str = "SSL_ALERT_SMTP_USERNAME";
pub const ENV_SMTP_PASSWORD: &str = "SSL_ALERT_SMTP_PASSWORD";

/// Certificate check settings
#[derive(Debug, Clone, Deserialize)]
pub struct CheckSettings {
    /// Alert when fewer days than this remain. No built-in default.
    #[serde(default)]
    pub threshold_days: Option<i64>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_verify")]
    pub verify_certificates: bool,
}

fn default_port() -> u16 {
    443
}

fn default_timeout() -> u64 {
    10
}

fn default_verify() -> bool {
    true
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            threshold_days: None,
            port: default_port(),
            timeout_secs: default_timeout(),
            verify_certificates: default_verify(),
        }
    }
}

impl CheckSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values that would make every connection fail
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "check.timeout_secs".to_string(),
                message: "timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// The threshold, which must have been supplied by the CLI or the config file
    pub fn threshold(&self) -> Result<i64, ConfigError> {
        self.threshold_days
            .ok_or_else(|| ConfigError::MissingRequired {
                key: "check.threshold_days (or --days)".to_string(),
            })
    }
}

/// SMTP delivery settings
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    /// Login name; the sender address is used when absent
    #[serde(default)]
    pub username: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            sender: None,
            recipient: None,
            username: None,
            password: None,
            timeout_secs: None,
        }
    }
}

impl SmtpSettings {
    pub fn sender(&self) -> Result<&str, ConfigError> {
        required(self.sender.as_deref(), "smtp.sender", ENV_SENDER)
    }

    pub fn recipient(&self) -> Result<&str, ConfigError> {
        required(self.recipient.as_deref(), "smtp.recipient", ENV_RECIPIENT)
    }

    pub fn username(&self) -> Result<&str, ConfigError> {
        match self.username.as_deref() {
            Some(username) if !username.is_empty() => Ok(username),
            _ => self.sender(),
        }
    }

    pub fn password(&self) -> Result<&str, ConfigError> {
        match self.password.as_deref() {
            Some(password) if !password.is_empty() => Ok(password),
            _ => Err(ConfigError::MissingRequired {
                key: ENV_SMTP_PASSWORD.to_string(),
            }),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Fail early when anything needed to send mail is missing
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sender()?;
        self.recipient()?;
        self.username()?;
        self.password()?;
        Ok(())
    }
}

fn required<'a>(value: Option<&'a str>, key: &str, env: &str) -> Result<&'a str, ConfigError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingRequired {
            key: format!("{} (or {})", key, env),
        }),
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub check: CheckSettings,
    #[serde(default)]
    pub smtp: SmtpSettings,
    #[serde(default)]
    pub messages: Messages,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Override SMTP settings from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Override SMTP settings using `lookup` as the environment
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_SMTP_HOST) {
            self.smtp.host = host;
        }
        if let Some(port) = lookup(ENV_SMTP_PORT) {
            self.smtp.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_SMTP_PORT.to_string(),
                message: format!("'{}' is not a port number", port),
            })?;
        }
        if let Some(sender) = lookup(ENV_SENDER) {
            self.smtp.sender = Some(sender);
        }
        if let Some(recipient) = lookup(ENV_RECIPIENT) {
            self.smtp.recipient = Some(recipient);
        }
        if let Some(username) = lookup(ENV_SMTP_USERNAME) {
            self.smtp.username = Some(username);
        }
        if let Some(password) = lookup(ENV_SMTP_PASSWORD) {
            self.smtp.password = Some(password);
        }
        Ok(())
    }
}
