// The master schedule, the venues and the event-wide settings.
use serde::{Deserialize, Serialize};

use crate::types::{ScheduleItemId, VenueId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Upcoming,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScheduleType {
    Logistics,
    Event,
    Competition,
    Social,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct ScheduleItem {
    pub id: ScheduleItemId,
    pub name: String,
    pub time: String,
    pub status: ScheduleStatus,
    pub location: String,
    pub item_type: ScheduleType,
}

impl ScheduleItem {
    pub fn build(id: ScheduleItemId, name: &str, time: &str, status: ScheduleStatus, location: &str, item_type: ScheduleType) -> Self {
        Self {
            id,
            name: name.to_string(),
            time: time.to_string(),
            status,
            location: location.to_string(),
            item_type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum VenueState {
    Operational,
    Maintenance,
    #[serde(rename = "Security Alert")]
    SecurityAlert,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct VenueStatus {
    pub id: VenueId,
    pub name: String,
    pub capacity: u32,
    pub current_occupancy: u32,
    pub status: VenueState,
    pub security_level: SecurityLevel,
}

impl VenueStatus {
    // Occupancy as a whole percentage of capacity.
    pub fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 { return 0; }
        ((u64::from(self.current_occupancy) * 100) / u64::from(self.capacity)) as u32
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct EventSettings {
    pub event_name: String,
    pub event_year: String,
    pub broadcast_reach: String,
    pub total_attendance: String,
    pub ops_efficiency: String,
    pub delegation_status: String,
    pub official_site_url: String,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            event_name: "Kalam".to_string(),
            event_year: "2025".to_string(),
            broadcast_reach: "1.2M".to_string(),
            total_attendance: "25.8k".to_string(),
            ops_efficiency: "98%".to_string(),
            delegation_status: "100%".to_string(),
            official_site_url: "https://www.iihf.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_rounds_down_and_survives_empty_venues() {
        let mut venue = VenueStatus {
            id: 1,
            name: "Ottawa Arena".to_string(),
            capacity: 18500,
            current_occupancy: 17200,
            status: VenueState::Operational,
            security_level: SecurityLevel::Green,
        };
        assert_eq!(venue.occupancy_percent(), 92);

        venue.capacity = 0;
        assert_eq!(venue.occupancy_percent(), 0);
    }

    #[test]
    fn statuses_use_display_names_on_the_wire() {
        let json = serde_json::to_string(&ScheduleStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
