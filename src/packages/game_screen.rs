use serde::Serialize;

use crate::{game::{Game, GameStatus}, team::Team, types::{GameId, TeamId}};

#[derive(Debug, Serialize)]
pub struct GamePackage {
    id: GameId,
    time: String,
    venue: String,
    home: String,
    away: String,
    score: String,
    status: GameStatus,
    period: Option<String>,
}

impl GamePackage {
    // Teams that cannot be found show up as "TBD".
    pub fn build(game: &Game, teams: &[Team]) -> Self {
        let name = |id: TeamId| teams.iter().find(|t| t.id == id).map_or_else(|| "TBD".to_string(), |t| t.name.clone());

        Self {
            id: game.id,
            time: game.time.clone(),
            venue: game.venue.clone(),
            home: name(game.home),
            away: name(game.away),
            score: match game.status {
                GameStatus::Scheduled => "-".to_string(),
                _ => game.score_line(),
            },
            status: game.status,
            period: game.period.as_ref().map(|p| p.to_string()),
        }
    }

    pub fn display(&self) -> String {
        let period = self.period.as_deref().map(|p| format!(" ({p})")).unwrap_or_default();
        format!("{:>3}  {}  {:<16} {} vs {}  {}{}  [{}]", self.id, self.time, self.venue, self.home, self.away, self.score, period, self.status)
    }
}

pub fn games_package(games: &[Game], teams: &[Team]) -> Vec<GamePackage> {
    games.iter().map(|g| GamePackage::build(g, teams)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::{GameGroup, Period}, team::Group};

    #[test]
    fn scheduled_games_hide_the_score() {
        let teams = vec![Team::build(7, "Czechia", Group::B, "🇨🇿")];
        let game = Game::build(3, 7, 4, GameGroup::B, "20:30", "Ottawa Arena");
        let package = GamePackage::build(&game, &teams);

        assert_eq!(package.home, "Czechia");
        assert_eq!(package.away, "TBD");
        assert_eq!(package.score, "-");
    }

    #[test]
    fn finished_games_show_score_and_period() {
        let teams = vec![Team::build(6, "Sweden", Group::B, "🇸🇪"), Team::build(3, "USA", Group::B, "🇺🇸")];
        let game = Game::build(2, 6, 3, GameGroup::B, "18:00", "Montreal Arena")
            .with_result(2, 3, GameStatus::Finished, Some(Period::Overtime));

        let line = GamePackage::build(&game, &teams).display();
        assert!(line.contains("Sweden vs USA  2 - 3 (OT)  [finished]"));
    }
}
