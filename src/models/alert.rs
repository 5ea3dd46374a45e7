//! Alert message type

use serde::Serialize;

/// A notification ready for delivery. Built per alert, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMessage {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: String,
}
