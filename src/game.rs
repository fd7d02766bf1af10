// Games of the tournament and the score data the standings are derived from.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{team::Group, types::{GameId, TeamId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default] Scheduled,
    Live,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Scheduled => write!(f, "scheduled"),
            GameStatus::Live => write!(f, "live"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}

impl FromStr for GameStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(GameStatus::Scheduled),
            "live" => Ok(GameStatus::Live),
            "finished" => Ok(GameStatus::Finished),
            other => Err(format!("unknown game status \"{other}\"")),
        }
    }
}

// Pool the game belongs to. Playoff games never belong to a group table.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameGroup {
    A,
    B,
    Playoff,
}

impl From<Group> for GameGroup {
    fn from(group: Group) -> Self {
        match group {
            Group::A => GameGroup::A,
            Group::B => GameGroup::B,
        }
    }
}

// Period tag of a game. On a finished game it tells whether the decision came in extra time.
// Tags that are not recognised are kept as they were written and count as regulation.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Period {
    First,
    Second,
    Third,
    Overtime,
    Shootout,
    Other(String),
}

impl Period {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "1st" => Period::First,
            "2nd" => Period::Second,
            "3rd" => Period::Third,
            "OT" => Period::Overtime,
            "SO" => Period::Shootout,
            other => Period::Other(other.to_string()),
        }
    }

    // Overtime and shootout decisions change the points on offer.
    pub fn is_extra_time(&self) -> bool {
        matches!(self, Period::Overtime | Period::Shootout)
    }
}

impl From<String> for Period {
    fn from(tag: String) -> Self {
        Period::parse(&tag)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::First => write!(f, "1st"),
            Period::Second => write!(f, "2nd"),
            Period::Third => write!(f, "3rd"),
            Period::Overtime => write!(f, "OT"),
            Period::Shootout => write!(f, "SO"),
            Period::Other(tag) => write!(f, "{tag}"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub time: String,
    pub venue: String,
    pub home: TeamId,
    pub away: TeamId,
    pub home_score: Option<u16>,
    pub away_score: Option<u16>,
    pub period: Option<Period>,
    pub game_time: Option<String>,  // Clock text, e.g. "14:32".
    pub status: GameStatus,
    pub group: GameGroup,
}

// Basics.
impl Game {
    pub fn build(id: GameId, home: TeamId, away: TeamId, group: GameGroup, time: &str, venue: &str) -> Self {
        Self {
            id,
            time: time.to_string(),
            venue: venue.to_string(),
            home,
            away,
            home_score: None,
            away_score: None,
            period: None,
            game_time: None,
            status: GameStatus::Scheduled,
            group,
        }
    }

    // Builder-style helper for seed data and tests.
    pub fn with_result(mut self, home_score: u16, away_score: u16, status: GameStatus, period: Option<Period>) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.status = status;
        self.period = period;
        self
    }
}

// Functional.
impl Game {
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home == team_id || self.away == team_id
    }

    pub fn decided_in_extra_time(&self) -> bool {
        self.period.as_ref().is_some_and(Period::is_extra_time)
    }

    // Scores from the point of view of the given team, missing scores read as 0.
    // None if the team did not play in this game.
    pub fn scores_for(&self, team_id: TeamId) -> Option<(u16, u16)> {
        let home = self.home_score.unwrap_or(0);
        let away = self.away_score.unwrap_or(0);

        if self.home == team_id {
            return Some((home, away));
        }
        else if self.away == team_id {
            return Some((away, home));
        }
        None
    }

    // Score line for display, e.g. "3 - 1". Unplayed games show 0 - 0.
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.home_score.unwrap_or(0), self.away_score.unwrap_or(0))
    }
}
