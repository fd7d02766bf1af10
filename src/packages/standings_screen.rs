use std::fmt::Write as _;

use ordinal::ToOrdinal as _;
use serde::Serialize;

use crate::{competition::{Standings, StandingsEntry}, team::Group, types::{Count, GoalDifference, Points, TeamId}};

#[derive(Debug, Serialize)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    #[serde(rename = "QF Spot")]
    QuarterFinal,
    Relegation,
}

impl Projection {
    pub fn label(&self) -> &'static str {
        match self {
            Projection::QuarterFinal => "QF Spot",
            Projection::Relegation => "Relegation",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamPackage {
    id: TeamId,
    rank: String,
    name: String,
    flag: String,
    group: Group,
    games: Count,
    wins: Count,
    ot_wins: Count,
    ot_losses: Count,
    losses: Count,
    goal_ratio: String,
    goal_difference: GoalDifference,
    points: Points,
    projection: Projection,
}

impl TeamPackage {
    // Position is 1-based.
    pub fn build(entry: &StandingsEntry, position: usize, qualifying_spots: usize) -> Self {
        let rank = u8::try_from(position).unwrap_or(u8::MAX);
        let stats = &entry.stats;

        Self {
            id: entry.team.id,
            rank: rank.to_ordinal_string(),
            name: entry.team.name.clone(),
            flag: entry.team.flag.clone(),
            group: entry.team.group,
            games: stats.games_played,
            wins: stats.wins,
            ot_wins: stats.ot_wins,
            ot_losses: stats.ot_losses,
            losses: stats.losses,
            goal_ratio: stats.goal_ratio(),
            goal_difference: stats.goal_difference(),
            points: stats.points,
            projection: match position <= qualifying_spots {
                true => Projection::QuarterFinal,
                false => Projection::Relegation,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupPackage {
    group: Group,
    teams: Vec<TeamPackage>,
}

impl GroupPackage {
    pub fn build(standings: &Standings, group: Group, qualifying_spots: usize) -> Self {
        Self {
            group,
            teams: standings.group(group).iter()
                .enumerate()
                .map(|(i, entry)| TeamPackage::build(entry, i + 1, qualifying_spots))
                .collect(),
        }
    }

    // Plain text table for the terminal.
    pub fn display(&self) -> String {
        let mut s = format!("Group {}\n", self.group);
        s += "POS  NATION          GP   W OTW OTL   L   GF:GA  PTS  PROJECTION\n";
        for team in self.teams.iter() {
            let _ = writeln!(
                s,
                "{:<4} {:<15} {:>2} {:>3} {:>3} {:>3} {:>3} {:>7} {:>4}  {}",
                team.rank, team.name, team.games, team.wins, team.ot_wins, team.ot_losses,
                team.losses, team.goal_ratio, team.points, team.projection.label()
            );
        }
        s
    }
}

// Packages for every group, or just the one asked for.
pub fn standings_package(standings: &Standings, group: Option<Group>, qualifying_spots: usize) -> Vec<GroupPackage> {
    let groups = match group {
        Some(g) => vec![g],
        None => Group::ALL.to_vec(),
    };
    groups.into_iter().map(|g| GroupPackage::build(standings, g, qualifying_spots)).collect()
}
