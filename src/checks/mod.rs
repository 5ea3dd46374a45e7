//! Check modules for ssl-alert
//!
//! Certificate retrieval and expiry classification.

pub mod expiry;
pub mod inspector;

pub use expiry::{days_remaining, evaluate};
pub use inspector::{
    expiry_from_der, CertificateInspector, CertificateSource, InspectorSettings,
};
