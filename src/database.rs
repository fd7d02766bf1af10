// The built-in event data the command center starts from when no tournament file is given.
use lazy_static::lazy_static;
use log::info;

use crate::{
    app_data::AppData,
    config::ResolvedConfig,
    error::StoreError,
    game::{Game, GameGroup, GameStatus},
    schedule::{ScheduleItem, ScheduleStatus, ScheduleType, SecurityLevel, VenueState, VenueStatus},
    team::{Group, Team},
};

lazy_static! {
    pub static ref TEAMS: Vec<Team> = vec![
        Team::build(1, "Canada", Group::A, "🇨🇦"),
        Team::build(2, "Finland", Group::A, "🇫🇮"),
        Team::build(3, "USA", Group::A, "🇺🇸"),
        Team::build(4, "Germany", Group::A, "🇩🇪"),
        Team::build(5, "Latvia", Group::A, "🇱🇻"),
        Team::build(6, "Sweden", Group::B, "🇸🇪"),
        Team::build(7, "Czechia", Group::B, "🇨🇿"),
        Team::build(8, "Slovakia", Group::B, "🇸🇰"),
        Team::build(9, "Switzerland", Group::B, "🇨🇭"),
        Team::build(10, "Kazakhstan", Group::B, "🇰🇿"),
    ];

    pub static ref GAMES: Vec<Game> = vec![
        Game::build(1, 1, 2, GameGroup::A, "14:00", "Ottawa Arena")
            .with_result(3, 1, GameStatus::Finished, None),
        Game::build(2, 6, 3, GameGroup::B, "18:00", "Montreal Arena")
            .with_result(0, 0, GameStatus::Live, None),
        Game::build(3, 7, 4, GameGroup::B, "20:30", "Ottawa Arena"),
    ];

    pub static ref VENUES: Vec<VenueStatus> = vec![
        VenueStatus {
            id: 1, name: "Ottawa Arena".to_string(), capacity: 18500, current_occupancy: 17200,
            status: VenueState::Operational, security_level: SecurityLevel::Green,
        },
        VenueStatus {
            id: 2, name: "Montreal Arena".to_string(), capacity: 21000, current_occupancy: 8500,
            status: VenueState::Operational, security_level: SecurityLevel::Green,
        },
        VenueStatus {
            id: 3, name: "Civic Practice Center".to_string(), capacity: 2000, current_occupancy: 150,
            status: VenueState::Maintenance, security_level: SecurityLevel::Yellow,
        },
    ];

    pub static ref SCHEDULE: Vec<ScheduleItem> = vec![
        ScheduleItem::build(1, "Group Stage - Round Robin", "Dec 26 - Dec 31", ScheduleStatus::InProgress, "All Venues", ScheduleType::Competition),
        ScheduleItem::build(2, "Quarter Finals", "Jan 2, 12:00", ScheduleStatus::Upcoming, "Ottawa Arena", ScheduleType::Competition),
        ScheduleItem::build(3, "Semi-Finals", "Jan 4, 15:00", ScheduleStatus::Upcoming, "Ottawa Arena", ScheduleType::Competition),
        ScheduleItem::build(4, "Championship Final", "Jan 5, 19:30", ScheduleStatus::Upcoming, "Ottawa Arena", ScheduleType::Competition),
    ];
}

// Build the store from the built-in event data.
pub fn initialise(config: &ResolvedConfig) -> Result<AppData, StoreError> {
    let mut data = AppData::build(config, TEAMS.clone(), GAMES.clone())?;
    data.replace_venues(VENUES.clone());
    data.replace_schedule(SCHEDULE.clone());

    info!("initialised {} {} with built-in data", config.settings.event_name, config.settings.event_year);
    Ok(data)
}
