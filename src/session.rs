// Who is using the command center and what they are allowed to see and do.
use serde::{Deserialize, Serialize};

use crate::types::TeamId;

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Director,   // Full authority over the whole event.
    TeamLiaison { team_id: TeamId },
    Official,
}

// Screens of the dashboard.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Groups,
    Schedule,
    Operations,
    Resources,
    Concierge,
    Handbook,
    Users,
}

impl Role {
    pub fn title(&self) -> &'static str {
        match self {
            Role::Director => "Command Center",
            Role::TeamLiaison { .. } => "Team Manager",
            Role::Official => "Official Portal",
        }
    }

    // Navigation entries in the order they are shown.
    pub fn views(&self) -> &'static [View] {
        match self {
            Role::Director => &[
                View::Dashboard, View::Groups, View::Schedule, View::Operations,
                View::Resources, View::Concierge, View::Handbook, View::Users,
            ],
            Role::TeamLiaison { .. } => &[View::Dashboard, View::Schedule, View::Concierge, View::Groups],
            Role::Official => &[View::Dashboard, View::Schedule],
        }
    }

    pub fn can_view(&self, view: View) -> bool {
        self.views().contains(&view)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Session {
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn build(name: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            role,
        }
    }

    pub fn is_director(&self) -> bool {
        self.role == Role::Director
    }

    pub fn can_record_scores(&self) -> bool {
        self.is_director()
    }

    pub fn can_manage_requests(&self) -> bool {
        self.is_director()
    }

    // Staff and fleet sit behind the resources screen.
    pub fn can_manage_resources(&self) -> bool {
        self.role.can_view(View::Resources)
    }

    // Liaison officers only look after their own delegation.
    pub fn can_move_delegation(&self, team_id: TeamId) -> bool {
        match self.role {
            Role::Director => true,
            Role::TeamLiaison { team_id: own } => own == team_id,
            Role::Official => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_depends_on_role() {
        assert_eq!(Role::Director.views().len(), 8);
        assert!(Role::TeamLiaison { team_id: 1 }.can_view(View::Groups));
        assert!(!Role::Official.can_view(View::Groups));
        assert_eq!(Role::Official.title(), "Official Portal");
    }

    #[test]
    fn liaison_moves_only_own_delegation() {
        let liaison = Session::build("Sarah Jenkins", Role::TeamLiaison { team_id: 1 });
        assert!(liaison.can_move_delegation(1));
        assert!(!liaison.can_move_delegation(3));
        assert!(!liaison.can_record_scores());
        assert!(!liaison.can_manage_resources());

        let official = Session::build("O. Larsen", Role::Official);
        assert!(!official.can_move_delegation(1));

        assert!(Session::build("Ops Director", Role::Director).can_move_delegation(3));
    }

    #[test]
    fn session_serialises_role_inline() {
        let session = Session::build("Mike Ross", Role::TeamLiaison { team_id: 3 });
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["role"]["role"], "team_liaison");
        assert_eq!(json["role"]["team_id"], 3);
    }
}
