//! Alert dispatch
//!
//! Turns an expiry outcome into an [`AlertMessage`] and hands it to an
//! [`AlertTransport`]. Healthy outcomes produce nothing.

pub mod email;

pub use email::SmtpAlertTransport;

use crate::config::messages::{AlertMessages, Messages};
use crate::models::{AlertMessage, ExpiryOutcome};
use crate::utils::MailError;
use tracing::{info, warn};

/// Delivery channel for alerts
pub trait AlertTransport {
    /// Deliver one message. Errors are returned to the caller unchanged.
    fn send(&self, alert: &AlertMessage) -> Result<(), MailError>;

    /// Short channel name for logs
    fn name(&self) -> &str;
}

/// Logs alerts instead of delivering them
#[derive(Debug, Default)]
pub struct DryRunTransport;

impl AlertTransport for DryRunTransport {
    fn send(&self, alert: &AlertMessage) -> Result<(), MailError> {
        warn!(
            "[dry-run] would email {} from {}: {} / {}",
            alert.to, alert.from, alert.subject, alert.body
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "dry-run"
    }
}

/// Builds and sends alerts to a single fixed recipient
pub struct AlertDispatcher {
    from: String,
    to: String,
    templates: AlertMessages,
    transport: Box<dyn AlertTransport>,
}

impl AlertDispatcher {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        templates: AlertMessages,
        transport: Box<dyn AlertTransport>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            templates,
            transport,
        }
    }

    /// The message `outcome` calls for, if any
    pub fn compose(&self, domain: &str, outcome: &ExpiryOutcome) -> Option<AlertMessage> {
        if !outcome.needs_alert() {
            return None;
        }

        let days = outcome.days_remaining();
        let (subject, body) = match days {
            Some(_) => (&self.templates.expiring_subject, &self.templates.expiring_body),
            None => (
                &self.templates.no_certificate_subject,
                &self.templates.no_certificate_body,
            ),
        };
        let subject = Messages::render(subject, domain, days);
        let body = Messages::render(body, domain, days);

        Some(AlertMessage {
            subject,
            body,
            from: self.from.clone(),
            to: self.to.clone(),
        })
    }

    /// Send the alert for `outcome`. Returns whether one was sent.
    pub fn dispatch(&self, domain: &str, outcome: &ExpiryOutcome) -> Result<bool, MailError> {
        let Some(alert) = self.compose(domain, outcome) else {
            return Ok(false);
        };

        self.transport.send(&alert)?;
        info!(
            "Alert for {} sent via {} to {}",
            domain,
            self.transport.name(),
            self.to
        );
        Ok(true)
    }
}
