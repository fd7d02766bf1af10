// Functions for ranking teams within a group.
use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{competition::team::TeamStats, error::ConfigError};

// What ranking criteria a group table applies, in order.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Eq, Hash, PartialEq)]
#[derive(Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RankCriteria {
    Points,
    GoalDifference,
    GoalsFor,
    GoalsAgainst,   // Lower is better.
    RegularWins,
    TotalWins,
    OvertimeWins,
    OvertimeLosses,
    RegularLosses,  // Lower is better.
    TotalLosses,    // Lower is better.
}

type CmpFunc = fn (&TeamStats, &TeamStats) -> Ordering;

// Compare functions here. Each puts the better team first.

fn compare_points(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points.cmp(&a.points)
}

fn compare_goal_difference(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.goal_difference().cmp(&a.goal_difference())
}

fn compare_goals_for(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.goals_for.cmp(&a.goals_for)
}

fn compare_goals_against(a: &TeamStats, b: &TeamStats) -> Ordering {
    a.goals_against.cmp(&b.goals_against)
}

fn compare_regular_wins(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.wins.cmp(&a.wins)
}

fn compare_total_wins(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.all_wins().cmp(&a.all_wins())
}

fn compare_overtime_wins(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.ot_wins.cmp(&a.ot_wins)
}

fn compare_overtime_losses(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.ot_losses.cmp(&a.ot_losses)
}

fn compare_regular_losses(a: &TeamStats, b: &TeamStats) -> Ordering {
    a.losses.cmp(&b.losses)
}

fn compare_total_losses(a: &TeamStats, b: &TeamStats) -> Ordering {
    a.all_losses().cmp(&b.all_losses())
}

impl RankCriteria {
    // Points first, then goal difference. Anything still level keeps its input order.
    pub const DEFAULT: [RankCriteria; 2] = [RankCriteria::Points, RankCriteria::GoalDifference];

    fn sort_function(&self) -> CmpFunc {
        match self {
            RankCriteria::Points => compare_points,
            RankCriteria::GoalDifference => compare_goal_difference,
            RankCriteria::GoalsFor => compare_goals_for,
            RankCriteria::GoalsAgainst => compare_goals_against,
            RankCriteria::RegularWins => compare_regular_wins,
            RankCriteria::TotalWins => compare_total_wins,
            RankCriteria::OvertimeWins => compare_overtime_wins,
            RankCriteria::OvertimeLosses => compare_overtime_losses,
            RankCriteria::RegularLosses => compare_regular_losses,
            RankCriteria::TotalLosses => compare_total_losses,
        }
    }

    pub fn compare(&self, a: &TeamStats, b: &TeamStats) -> Ordering {
        (self.sort_function())(a, b)
    }
}

impl FromStr for RankCriteria {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "points" => Ok(RankCriteria::Points),
            "goal_difference" => Ok(RankCriteria::GoalDifference),
            "goals_for" => Ok(RankCriteria::GoalsFor),
            "goals_against" => Ok(RankCriteria::GoalsAgainst),
            "regular_wins" => Ok(RankCriteria::RegularWins),
            "total_wins" => Ok(RankCriteria::TotalWins),
            "overtime_wins" => Ok(RankCriteria::OvertimeWins),
            "overtime_losses" => Ok(RankCriteria::OvertimeLosses),
            "regular_losses" => Ok(RankCriteria::RegularLosses),
            "total_losses" => Ok(RankCriteria::TotalLosses),
            other => Err(ConfigError::UnknownCriterion(other.to_string())),
        }
    }
}

impl fmt::Display for RankCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RankCriteria::Points => "points",
            RankCriteria::GoalDifference => "goal_difference",
            RankCriteria::GoalsFor => "goals_for",
            RankCriteria::GoalsAgainst => "goals_against",
            RankCriteria::RegularWins => "regular_wins",
            RankCriteria::TotalWins => "total_wins",
            RankCriteria::OvertimeWins => "overtime_wins",
            RankCriteria::OvertimeLosses => "overtime_losses",
            RankCriteria::RegularLosses => "regular_losses",
            RankCriteria::TotalLosses => "total_losses",
        };
        write!(f, "{name}")
    }
}

// Compare two teams with the given criteria, stopping at the first that separates them.
pub fn compare_with(criteria: &[RankCriteria], a: &TeamStats, b: &TeamStats) -> Ordering {
    let mut order = Ordering::Equal;
    for criterium in criteria.iter() {
        order = criterium.compare(a, b);

        if order.is_ne() { break; }
    }
    order
}

// Get the teams in the order of betterhood.
// Returns a new sequence; `sort_by` is stable so level teams keep their relative order.
pub fn rank_teams<T, F>(teams: &[T], criteria: &[RankCriteria], stats_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &TeamStats,
{
    let mut ranked = teams.to_vec();
    ranked.sort_by(|a, b| compare_with(criteria, stats_of(a), stats_of(b)));
    ranked
}
