//! Data models for ssl-alert
//!
//! This module contains the data structures passed between the inspector,
//! the evaluator, and the alert dispatcher.

pub mod alert;
pub mod certificate;
pub mod check_result;

pub use alert::AlertMessage;
pub use certificate::{AbsentReason, CertificateStatus};
pub use check_result::{CheckResult, ExpiryOutcome, RunSummary};
