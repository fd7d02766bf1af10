// Service requests raised by delegations and handled by the command center.
use serde::{Deserialize, Serialize};

use crate::{session::Session, types::RequestId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Transport,
    Medical,
    Logistics,
    Catering,
    Security,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    #[default] Normal,
    High,
    Critical,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    #[default] Pending,
    Dispatched,
    Completed,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: RequestId,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub requestor: String,
    pub details: String,
    pub timestamp: String,
}

impl ServiceRequest {
    pub fn build(id: RequestId, request_type: RequestType, priority: Priority, requestor: &str, details: &str, timestamp: String) -> Self {
        Self {
            id,
            request_type,
            priority,
            status: RequestStatus::Pending,
            requestor: requestor.to_string(),
            details: details.to_string(),
            timestamp,
        }
    }

    // The director sees everything. Everyone else sees what they raised themselves.
    pub fn is_visible_to(&self, session: &Session) -> bool {
        session.is_director() || self.requestor.contains(&session.name)
    }

    pub fn is_open(&self) -> bool {
        self.status != RequestStatus::Completed
    }
}
