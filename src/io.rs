// Input/output logic: loading a tournament from a TOML or JSON file.
// Games in the file name their teams; names are resolved to IDs here and must all resolve.
use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    alert::Alert,
    app_data::AppData,
    config::ResolvedConfig,
    error::LoadError,
    game::{Game, GameGroup, GameStatus, Period},
    resources::{StaffMember, Vehicle},
    schedule::{ScheduleItem, VenueStatus},
    team::Team,
    types::{GameId, TeamId},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct TournamentFile {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub games: Vec<GameRecord>,
    #[serde(default)]
    pub venues: Vec<VenueStatus>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub fleet: Vec<Vehicle>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

// A game as written in a tournament file.
#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
    pub home: String,
    pub away: String,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub period: Option<Period>,
    pub game_time: Option<String>,
    #[serde(default)]
    pub status: GameStatus,
    pub group: GameGroup,
}

fn find_team(teams: &[Team], game: GameId, name: &str) -> Result<TeamId, LoadError> {
    teams.iter()
        .find(|t| t.name == name)
        .map(|t| t.id)
        .ok_or_else(|| LoadError::UnknownTeam { game, name: name.to_string() })
}

impl GameRecord {
    fn resolve(self, teams: &[Team]) -> Result<Game, LoadError> {
        let home = find_team(teams, self.id, &self.home)?;
        let away = find_team(teams, self.id, &self.away)?;

        Ok(Game {
            id: self.id,
            time: self.time,
            venue: self.venue,
            home,
            away,
            home_score: self.home_score,
            away_score: self.away_score,
            period: self.period,
            game_time: self.game_time,
            status: self.status,
            group: self.group,
        })
    }
}

impl TournamentFile {
    pub fn parse(contents: &str, extension: &str) -> Result<Self, LoadError> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(toml::from_str(contents)?),
            "json" => Ok(serde_json::from_str(contents)?),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }

    // Resolve the games and build the store.
    pub fn into_app_data(self, config: &ResolvedConfig) -> Result<AppData, LoadError> {
        let teams = self.teams;
        let games = self.games.into_iter()
            .map(|g| g.resolve(&teams))
            .collect::<Result<Vec<_>, _>>()?;

        let mut data = AppData::build(config, teams, games)?;
        data.replace_venues(self.venues);
        data.replace_schedule(self.schedule);
        data.replace_staff(self.staff)?;
        data.replace_fleet(self.fleet)?;
        data.replace_alerts(self.alerts)?;
        Ok(data)
    }
}

pub fn load_tournament(path: &Path, config: &ResolvedConfig) -> Result<AppData, LoadError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let contents = fs::read_to_string(path)?;
    let file = TournamentFile::parse(&contents, extension)?;
    debug!("{} teams and {} games in {}", file.teams.len(), file.games.len(), path.display());

    let data = file.into_app_data(config)?;
    info!("loaded tournament from {}", path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StoreError, team::Group};

    const TOURNAMENT: &str = r#"
        [[teams]]
        id = 6
        name = "Sweden"
        group = "B"
        flag = "🇸🇪"

        [[teams]]
        id = 3
        name = "USA"
        group = "B"

        [[games]]
        id = 1
        time = "18:00"
        venue = "Montreal Arena"
        home = "Sweden"
        away = "USA"
        home_score = 2
        away_score = 3
        period = "OT"
        status = "finished"
        group = "B"
    "#;

    #[test]
    fn toml_tournament_resolves_names_to_ids() {
        let file = TournamentFile::parse(TOURNAMENT, "toml").unwrap();
        let mut data = file.into_app_data(&ResolvedConfig::default()).unwrap();

        let game = data.game(1).unwrap();
        assert_eq!((game.home, game.away), (6, 3));
        assert_eq!(game.period, Some(Period::Overtime));

        let standings = data.standings();
        assert_eq!(standings.group(Group::B)[0].team.name, "USA");
        assert_eq!(standings.stats(6).map(|s| s.points), Some(1));
    }

    #[test]
    fn unknown_team_name_fails_the_load() {
        let broken = TOURNAMENT.replace("away = \"USA\"", "away = \"United States\"");
        let file = TournamentFile::parse(&broken, "toml").unwrap();

        match file.into_app_data(&ResolvedConfig::default()) {
            Err(LoadError::UnknownTeam { game, name }) => {
                assert_eq!(game, 1);
                assert_eq!(name, "United States");
            }
            other => panic!("expected UnknownTeam, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_team_ids_surface_as_store_errors() {
        let broken = TOURNAMENT.replace("id = 3", "id = 6");
        let file = TournamentFile::parse(&broken, "toml").unwrap();
        assert!(matches!(
            file.into_app_data(&ResolvedConfig::default()),
            Err(LoadError::Store(StoreError::DuplicateId { kind: "team", .. }))
        ));
    }

    #[test]
    fn json_files_load_from_disk() {
        let json = r#"{
            "teams": [
                {"id": 1, "name": "Canada", "group": "A"},
                {"id": 2, "name": "Finland", "group": "A"}
            ],
            "games": [
                {"id": 1, "home": "Canada", "away": "Finland", "home_score": 3, "away_score": 1,
                 "status": "finished", "group": "A"}
            ]
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournament.json");
        fs::write(&path, json).unwrap();

        let data = load_tournament(&path, &ResolvedConfig::default()).unwrap();
        assert_eq!(data.compute_standings().stats(1).map(|s| s.wins), Some(1));
    }

    #[test]
    fn staff_fleet_and_alerts_load_with_the_tournament() {
        let extra = r#"
        [[staff]]
        id = 1
        name = "Luc Tremblay"
        role = "Driver"
        assignment = "Team Bus 1"
        status = "Off Duty"
        location = "Depot"
        contact = "+1 613 555 0120"
        shift_end = "20:00"
        battery_level = 15

        [[fleet]]
        id = 1
        name = "Team Bus 1"
        type = "Bus"
        plate = "ON-4471"
        driver_name = "Luc Tremblay"
        status = "In Transit"
        location = "Highway 417"
        fuel_level = 60
        capacity = "52 seats"

        [[alerts]]
        id = 4
        type = "Weather"
        title = "Freezing rain"
        message = "Shuttles running slow"
        severity = "high"
        timestamp = "06:40"
        "#;
        let file = TournamentFile::parse(&format!("{TOURNAMENT}{extra}"), "toml").unwrap();
        let data = file.into_app_data(&ResolvedConfig::default()).unwrap();

        assert!(data.staff()[0].is_low_battery());
        assert_eq!(data.filtered_fleet("tremblay").len(), 1);
        assert_eq!(data.alerts()[0].id, 4);
        assert!(data.system_critical());
    }

    #[test]
    fn other_extensions_are_refused() {
        assert!(matches!(TournamentFile::parse("", "yaml"), Err(LoadError::UnsupportedFormat(ext)) if ext == "yaml"));
    }
}
