//! ssl-alert library
//!
//! One-shot TLS certificate expiry checks with email alerts:
//! - Certificate retrieval over a blocking TLS connection
//! - Expiry classification against a day threshold
//! - Alert composition and SMTP delivery
//!
//! # Usage
//!
//! ```rust,ignore
//! use ssl_alert::checks::{CertificateInspector, CertificateSource, InspectorSettings};
//!
//! let inspector = CertificateInspector::new(InspectorSettings::default());
//! let status = inspector.inspect("example.com");
//! ```

pub mod alert;
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Messages, Settings};
pub use models::{CertificateStatus, ExpiryOutcome, RunSummary};
pub use utils::{Result, ToolkitError};
