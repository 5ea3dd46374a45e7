//! SMTP alert transport using lettre
//!
//! Mail is submitted with STARTTLS and password authentication to a single
//! relay. The send blocks until the relay answers.

use crate::alert::AlertTransport;
use crate::config::SmtpSettings;
use crate::models::AlertMessage;
use crate::utils::{ConfigError, MailError};
use lettre::message::{header, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

/// Delivers alerts through an SMTP relay
pub struct SmtpAlertTransport {
    transport: SmtpTransport,
    host: String,
}

impl SmtpAlertTransport {
    /// Build the transport from validated settings
    pub fn new(settings: &SmtpSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let creds = Credentials::new(
            settings.username()?.to_string(),
            settings.password()?.to_string(),
        );

        let mut builder = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|e| ConfigError::InvalidValue {
                key: "smtp.host".to_string(),
                message: e.to_string(),
            })?
            .credentials(creds)
            .port(settings.port);

        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(Some(timeout));
        }

        let transport = builder.build();

        Ok(Self {
            transport,
            host: settings.host.clone(),
        })
    }

    /// Convert an alert into a plain-text email
    pub fn build_message(alert: &AlertMessage) -> Result<Message, MailError> {
        Message::builder()
            .from(parse_mailbox(&alert.from)?)
            .to(parse_mailbox(&alert.to)?)
            .subject(alert.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(alert.body.clone())
            .map_err(MailError::from)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| MailError::Address {
        address: address.to_string(),
        message: e.to_string(),
    })
}

impl AlertTransport for SmtpAlertTransport {
    fn send(&self, alert: &AlertMessage) -> Result<(), MailError> {
        let message = Self::build_message(alert)?;
        debug!("Submitting alert '{}' via {}", alert.subject, self.host);
        self.transport.send(&message)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert() -> AlertMessage {
        AlertMessage {
            subject: "Alert Expiration Sertifikat SSL: soon.example".to_string(),
            body: "Sertifikat SSL soon.example akan expire dalam 5 hari.".to_string(),
            from: "alerts@example.com".to_string(),
            to: "ops@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_message() {
        let message = SmtpAlertTransport::build_message(&alert()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: alerts@example.com"));
        assert!(raw.contains("To: ops@example.com"));
        assert!(raw.contains("Subject: Alert Expiration Sertifikat SSL: soon.example"));
        assert!(raw.contains("akan expire dalam 5 hari."));
    }

    #[test]
    fn test_invalid_recipient() {
        let mut alert = alert();
        alert.to = "not an address".to_string();
        let result = SmtpAlertTransport::build_message(&alert);
        assert!(matches!(result, Err(MailError::Address { .. })));
    }

    #[test]
    fn test_new_requires_password() {
        let settings = SmtpSettings {
            sender: Some("alerts@example.com".to_string()),
            recipient: Some("ops@example.com".to_string()),
            ..SmtpSettings::default()
        };
        assert!(matches!(
            SmtpAlertTransport::new(&settings),
            Err(ConfigError::MissingRequired { .. })
        ));
    }

    #[test]
    fn test_new_with_full_settings() {
        let settings = SmtpSettings {
            sender: Some("alerts@example.com".to_string()),
            recipient: Some("ops@example.com".to_string()),
            password: Some("app-password".to_string()),
            ..SmtpSettings::default()
        };
        let transport = SmtpAlertTransport::new(&settings).unwrap();
        assert_eq!(transport.name(), "smtp");
    }

    #[test]
    fn test_send_to_unreachable_relay_fails() {
        // Bind then release a port so nothing is listening on it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let settings = SmtpSettings {
            host: "127.0.0.1".to_string(),
            port,
            sender: Some("alerts@example.com".to_string()),
            recipient: Some("ops@example.com".to_string()),
            password: Some("app-password".to_string()),
            timeout_secs: Some(2),
            ..SmtpSettings::default()
        };
        let transport = SmtpAlertTransport::new(&settings).unwrap();

        let result = transport.send(&alert());
        assert!(matches!(result, Err(MailError::Transport { .. })));
    }
}
