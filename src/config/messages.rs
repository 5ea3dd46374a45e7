//! Message templates for user-facing text
//!
//! Alert subjects, alert bodies, and console lines are defined here so they
//! can be reworded from the configuration file. Templates use `{domain}` and
//! `{days}` placeholders.

use serde::Deserialize;
use std::collections::HashMap;

/// Email alert templates
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AlertMessages {
    pub no_certificate_subject: String,
    pub no_certificate_body: String,
    pub expiring_subject: String,
    pub expiring_body: String,
}

impl Default for AlertMessages {
    fn default() -> Self {
        Self {
            no_certificate_subject: "Alert: Tidak Ada Sertifikat SSL untuk {domain}".to_string(),
            no_certificate_body: "Website {domain} tidak memiliki sertifikat SSL yang valid."
                .to_string(),
            expiring_subject: "Alert Expiration Sertifikat SSL: {domain}".to_string(),
            expiring_body: "Sertifikat SSL {domain} akan expire dalam {days} hari.".to_string(),
        }
    }
}

/// Console status lines
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleMessages {
    pub status: String,
    pub expiring_alert: String,
    pub no_certificate_alert: String,
}

impl Default for ConsoleMessages {
    fn default() -> Self {
        Self {
            status: "Sertifikat SSL {domain} akan expire dalam {days} hari".to_string(),
            expiring_alert: "Sertifikat SSL {domain} akan expire dalam {days} hari!".to_string(),
            no_certificate_alert: "Tidak ada sertifikat SSL untuk {domain}".to_string(),
        }
    }
}

/// All message templates.
///
/// Alert templates are read straight from `[messages]`; console lines from
/// `[messages.console]`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Messages {
    #[serde(flatten)]
    pub alert: AlertMessages,
    #[serde(default)]
    pub console: ConsoleMessages,
}

impl Messages {
    /// Format a message with placeholder substitution
    pub fn format(template: &str, vars: &HashMap<&str, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{}}}", key), value);
        }
        result
    }

    /// Substitute `{domain}` and, when given, `{days}`
    pub fn render(template: &str, domain: &str, days: Option<i64>) -> String {
        let mut vars = HashMap::new();
        vars.insert("domain", domain.to_string());
        if let Some(days) = days {
            vars.insert("days", days.to_string());
        }
        Self::format(template, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_expiring_body() {
        let messages = Messages::default();
        let body = Messages::render(&messages.alert.expiring_body, "soon.example", Some(5));
        assert_eq!(body, "Sertifikat SSL soon.example akan expire dalam 5 hari.");
    }

    #[test]
    fn test_render_without_days_leaves_no_count() {
        let messages = Messages::default();
        let body = Messages::render(&messages.alert.no_certificate_body, "noSSL.example", None);
        assert_eq!(
            body,
            "Website noSSL.example tidak memiliki sertifikat SSL yang valid."
        );
        assert!(!body.contains("hari"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let messages: Messages = toml::from_str(
            r#"
            expiring_subject = "Certificate for {domain} expires in {days} days"
            "#,
        )
        .unwrap();

        assert_eq!(
            Messages::render(&messages.alert.expiring_subject, "a.example", Some(3)),
            "Certificate for a.example expires in 3 days"
        );
        assert_eq!(
            messages.alert.no_certificate_subject,
            AlertMessages::default().no_certificate_subject
        );
    }

    #[test]
    fn test_console_override() {
        let messages: Messages = toml::from_str(
            r#"
            no_certificate_body = "{domain} has no certificate"

            [console]
            status = "{domain}: {days} days left"
            "#,
        )
        .unwrap();

        assert_eq!(
            Messages::render(&messages.console.status, "a.example", Some(9)),
            "a.example: 9 days left"
        );
        assert_eq!(
            Messages::render(&messages.alert.no_certificate_body, "b.example", None),
            "b.example has no certificate"
        );
        assert_eq!(messages.console.expiring_alert, ConsoleMessages::default().expiring_alert);
    }
}
