// Operations staff and the vehicle fleet behind the resources screen.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{StaffId, VehicleId};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    #[serde(rename = "TLO")]
    Liaison,    // Team liaison officer.
    Driver,
    Security,
    Medical,
    Volunteer,
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TLO" => Ok(StaffRole::Liaison),
            "Driver" => Ok(StaffRole::Driver),
            "Security" => Ok(StaffRole::Security),
            "Medical" => Ok(StaffRole::Medical),
            "Volunteer" => Ok(StaffRole::Volunteer),
            other => Err(format!("unknown staff role \"{other}\"")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum StaffStatus {
    #[default] Active,
    Break,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
    pub assignment: String,
    #[serde(default)]
    pub status: StaffStatus,
    pub location: String,
    pub contact: String,
    pub shift_end: String,
    pub battery_level: u8,   // Radio battery, percent.
}

// Basics.
impl StaffMember {
    pub const LOW_BATTERY: u8 = 20;

    pub fn build(id: StaffId, name: &str, role: StaffRole, assignment: &str, location: &str, contact: &str, shift_end: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            role,
            assignment: assignment.to_string(),
            status: StaffStatus::Active,
            location: location.to_string(),
            contact: contact.to_string(),
            shift_end: shift_end.to_string(),
            battery_level: 100,
        }
    }
}

// Functional.
impl StaffMember {
    // Case-insensitive search on name or assignment, optionally narrowed to one role.
    pub fn matches(&self, query: &str, role: Option<StaffRole>) -> bool {
        let query = query.to_lowercase();
        let found = self.name.to_lowercase().contains(&query) || self.assignment.to_lowercase().contains(&query);
        found && role.map_or(true, |r| r == self.role)
    }

    pub fn is_low_battery(&self) -> bool {
        self.battery_level < Self::LOW_BATTERY
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Bus,
    #[serde(rename = "SUV")]
    Suv,
    Van,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    #[serde(rename = "In Transit")]
    InTransit,
    #[default] Idle,
    Maintenance,
    Reserved,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub plate: String,
    pub driver_name: String,
    #[serde(default)]
    pub status: VehicleStatus,
    pub location: String,
    pub fuel_level: u8,      // Percent.
    pub capacity: String,
}

impl Vehicle {
    pub const LOW_FUEL: u8 = 25;

    pub fn build(id: VehicleId, name: &str, vehicle_type: VehicleType, plate: &str, driver_name: &str, capacity: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            vehicle_type,
            plate: plate.to_string(),
            driver_name: driver_name.to_string(),
            status: VehicleStatus::Idle,
            location: "Depot".to_string(),
            fuel_level: 100,
            capacity: capacity.to_string(),
        }
    }

    // Case-insensitive search on the vehicle or its driver.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.driver_name.to_lowercase().contains(&query)
    }

    pub fn needs_fuel(&self) -> bool {
        self.fuel_level < Self::LOW_FUEL
    }
}
