// Operational alerts broadcast by the command center.
use serde::{Deserialize, Serialize};

use crate::types::AlertId;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Weather,
    Logistics,
    Security,
    Medical,
    Info,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Alert {
    pub id: AlertId,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub timestamp: String,
}

impl Alert {
    pub fn build(id: AlertId, alert_type: AlertType, severity: Severity, title: &str, message: &str, timestamp: String) -> Self {
        Self {
            id,
            alert_type,
            title: title.to_string(),
            message: message.to_string(),
            severity,
            timestamp,
        }
    }

    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}
