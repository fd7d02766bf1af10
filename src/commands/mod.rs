// Functions that let the command line interact with the store.
use log::info;

use crate::{
    app_data::AppData,
    error::AppError,
    game::{GameStatus, Period},
    packages::{game_screen::{games_package, GamePackage}, standings_screen::standings_package},
    session::Session,
    team::Group,
    types::GameId,
};

// Standings of one group or all of them, as a text table or JSON.
pub fn show_standings(data: &mut AppData, group: Option<Group>, qualifying_spots: usize, json: bool) -> Result<String, AppError> {
    let packages = standings_package(data.standings(), group, qualifying_spots);

    if json {
        return Ok(serde_json::to_string_pretty(&packages)?);
    }
    Ok(packages.iter().map(|p| p.display()).collect::<Vec<_>>().join("\n"))
}

pub fn show_games(data: &AppData, json: bool) -> Result<String, AppError> {
    let packages = games_package(data.games(), data.teams());

    if json {
        return Ok(serde_json::to_string_pretty(&packages)?);
    }
    Ok(packages.iter().map(|p| p.display()).collect::<Vec<_>>().join("\n"))
}

// Record a score as the given session, then show the game line.
pub fn record_score(data: &mut AppData, session: &Session, game_id: GameId, home_score: u16, away_score: u16,
status: GameStatus, period: Option<Period>) -> Result<String, AppError> {
    data.record_score(session, game_id, home_score, away_score, status, period)?;
    info!("score for game {game_id} recorded from the command line");

    let line = data.game(game_id)
        .map(|g| GamePackage::build(g, data.teams()).display())
        .unwrap_or_default();
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ResolvedConfig, database, session::Role};

    #[test]
    fn text_standings_show_both_groups() {
        let mut data = database::initialise(&ResolvedConfig::default()).unwrap();
        let text = show_standings(&mut data, None, 4, false).unwrap();

        assert!(text.contains("Group A"));
        assert!(text.contains("Group B"));
        assert!(text.contains("Canada"));
    }

    #[test]
    fn json_standings_for_one_group() {
        let mut data = database::initialise(&ResolvedConfig::default()).unwrap();
        let json = show_standings(&mut data, Some(Group::B), 4, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["group"], "B");
    }

    #[test]
    fn recorded_score_shows_in_games_and_standings() {
        let mut data = database::initialise(&ResolvedConfig::default()).unwrap();
        let director = Session::build("Ops Director", Role::Director);

        let line = record_score(&mut data, &director, 2, 2, 3, GameStatus::Finished, Some(Period::Overtime)).unwrap();
        assert!(line.contains("Sweden vs USA  2 - 3 (OT)  [finished]"));

        let games = show_games(&data, false).unwrap();
        assert_eq!(games.lines().count(), 3);

        let json = show_standings(&mut data, Some(Group::A), 4, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let usa = value[0]["teams"].as_array().unwrap().iter().find(|t| t["name"] == "USA").unwrap();
        assert_eq!(usa["ot_wins"], 1);
        assert_eq!(usa["points"], 2);
    }
}
