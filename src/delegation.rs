// Delegations: a nation's travelling party, tracked separately from its team in the standings.
use serde::{Deserialize, Serialize};

use crate::{team::{Group, Team}, types::{MovementLogId, TeamId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DelegationStatus {
    Secure,
    Transit,
    Issue,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Hotel,
    Arena,
    Airborne,
    #[serde(rename = "City Center")]
    CityCenter,
}

impl Location {
    pub fn name(&self) -> &'static str {
        match self {
            Location::Hotel => "Hotel",
            Location::Arena => "Arena",
            Location::Airborne => "Airborne",
            Location::CityCenter => "City Center",
        }
    }

    // Shuttles run between the hotel and the arena. Anywhere else heads back to the hotel.
    pub fn shuttle_destination(&self) -> Location {
        match self {
            Location::Hotel => Location::Arena,
            _ => Location::Hotel,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Delegation {
    pub id: TeamId,     // Same as the team's ID.
    pub country: String,
    pub flag: String,
    pub group: Group,
    pub status: DelegationStatus,
    pub location: Location,
    pub next_movement: String,
    pub personnel_count: u16,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Departure,
    Arrival,
    Issue,
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct MovementLog {
    pub id: MovementLogId,
    pub team_id: TeamId,
    pub team_name: String,
    pub flag: String,
    pub action: String,
    pub timestamp: String,
    pub movement_type: MovementType,
}

// Basics.
impl Delegation {
    pub const DEFAULT_PERSONNEL: u16 = 42;

    // Every team arrives with a delegation waiting at the hotel.
    pub fn from_team(team: &Team) -> Self {
        Self {
            id: team.id,
            country: team.name.clone(),
            flag: team.flag.clone(),
            group: team.group,
            status: DelegationStatus::Secure,
            location: Location::Hotel,
            next_movement: "Awaiting Schedule".to_string(),
            personnel_count: Self::DEFAULT_PERSONNEL,
        }
    }
}

// Functional.
impl Delegation {
    // Leave for the shuttle destination. The location only changes on arrival.
    // Returns the log action text.
    pub fn depart(&mut self) -> String {
        let destination = self.location.shuttle_destination();
        let action = format!("Departed {} for {}", self.location.name(), destination.name());
        self.status = DelegationStatus::Transit;
        action
    }

    pub fn arrive(&mut self) -> String {
        self.location = self.location.shuttle_destination();
        self.status = DelegationStatus::Secure;
        format!("Arrived at {} safely", self.location.name())
    }

    pub fn report_issue(&mut self, details: &str) -> String {
        self.status = DelegationStatus::Issue;
        format!("Issue reported: {details}")
    }
}

// Head count of where the delegations are right now.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, PartialEq, Eq)]
pub struct DelegationSummary {
    pub hotel: usize,
    pub arena: usize,
    pub transit: usize,
    pub issue: usize,
}

impl DelegationSummary {
    pub fn build(delegations: &[Delegation]) -> Self {
        Self {
            hotel: delegations.iter().filter(|d| d.location == Location::Hotel).count(),
            arena: delegations.iter().filter(|d| d.location == Location::Arena).count(),
            transit: delegations.iter().filter(|d| d.status == DelegationStatus::Transit).count(),
            issue: delegations.iter().filter(|d| d.status == DelegationStatus::Issue).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usa() -> Delegation {
        Delegation::from_team(&Team::build(3, "USA", Group::A, "🇺🇸"))
    }

    #[test]
    fn departure_keeps_location_until_arrival() {
        let mut delegation = usa();
        assert_eq!(delegation.depart(), "Departed Hotel for Arena");
        assert_eq!(delegation.status, DelegationStatus::Transit);
        assert_eq!(delegation.location, Location::Hotel);

        assert_eq!(delegation.arrive(), "Arrived at Arena safely");
        assert_eq!(delegation.status, DelegationStatus::Secure);
        assert_eq!(delegation.location, Location::Arena);
    }

    #[test]
    fn city_center_shuttles_back_to_hotel() {
        let mut delegation = usa();
        delegation.location = Location::CityCenter;
        assert_eq!(delegation.depart(), "Departed City Center for Hotel");
    }

    #[test]
    fn summary_counts_locations_and_statuses() {
        let mut moving = usa();
        moving.depart();
        let mut troubled = usa();
        troubled.location = Location::Arena;
        troubled.report_issue("bus breakdown");

        let summary = DelegationSummary::build(&[usa(), moving, troubled]);
        assert_eq!(summary, DelegationSummary { hotel: 2, arena: 1, transit: 1, issue: 1 });
    }
}
