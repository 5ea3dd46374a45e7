//! Certificate status types

use crate::utils::InspectError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Why no usable certificate was obtained from a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentReason {
    /// The hostname did not resolve
    Resolve,
    /// TCP connection refused or failed
    Connect,
    /// Connection or handshake exceeded the timeout
    Timeout,
    /// TLS negotiation or certificate verification failed
    Handshake,
    /// The server completed the handshake without presenting a certificate
    NoPeerCertificate,
    /// The leaf certificate could not be parsed
    Parse,
}

impl fmt::Display for AbsentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbsentReason::Resolve => write!(f, "DNS resolution failed"),
            AbsentReason::Connect => write!(f, "connection failed"),
            AbsentReason::Timeout => write!(f, "timed out"),
            AbsentReason::Handshake => write!(f, "TLS handshake failed"),
            AbsentReason::NoPeerCertificate => write!(f, "no certificate presented"),
            AbsentReason::Parse => write!(f, "certificate could not be parsed"),
        }
    }
}

impl From<&InspectError> for AbsentReason {
    fn from(err: &InspectError) -> Self {
        match err {
            InspectError::Resolve { .. } | InspectError::InvalidServerName { .. } => {
                AbsentReason::Resolve
            }
            InspectError::Connect { .. } => AbsentReason::Connect,
            InspectError::Timeout { .. } => AbsentReason::Timeout,
            InspectError::Handshake { .. } => AbsentReason::Handshake,
            InspectError::NoPeerCertificate { .. } => AbsentReason::NoPeerCertificate,
            InspectError::Parse { .. } => AbsentReason::Parse,
        }
    }
}

/// Result of probing a domain for its certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CertificateStatus {
    /// A certificate was retrieved; `expires_at` is its not-after instant
    Valid { expires_at: DateTime<Utc> },
    /// No certificate could be obtained
    Absent { reason: AbsentReason },
}

impl CertificateStatus {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CertificateStatus::Valid { expires_at } => Some(*expires_at),
            CertificateStatus::Absent { .. } => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CertificateStatus::Absent { .. })
    }
}
