// Per-team standings data derived from finished games.
use serde::{Deserialize, Serialize};

use crate::{competition::round_robin::RoundRobin, game::Game, types::{Count, GoalDifference, Points, TeamId}};

#[derive(Debug, Serialize, Deserialize)]
#[derive(PartialEq, Eq)]
#[derive(Default, Clone)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub games_played: Count,
    pub wins: Count,        // Regulation wins.
    pub losses: Count,      // Regulation losses.
    pub ot_wins: Count,
    pub ot_losses: Count,
    pub goals_for: Count,
    pub goals_against: Count,
    pub points: Points,
}

// Basics.
impl TeamStats {
    pub fn build(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Default::default()
        }
    }
}

// Functional.
impl TeamStats {
    pub fn goal_difference(&self) -> GoalDifference {
        GoalDifference::from(self.goals_for) - GoalDifference::from(self.goals_against)
    }

    pub fn all_wins(&self) -> Count {
        self.wins.saturating_add(self.ot_wins)
    }

    pub fn all_losses(&self) -> Count {
        self.losses.saturating_add(self.ot_losses)
    }

    // Goal ratio for display, e.g. "3:1".
    pub fn goal_ratio(&self) -> String {
        format!("{}:{}", self.goals_for, self.goals_against)
    }

    // Add one game to the record. Returns false when the team did not play in it.
    // A level score goes down the losing branch for both sides: there is no draw column.
    // Counters saturate at their maximum instead of overflowing.
    pub fn record(&mut self, game: &Game, rr: &RoundRobin) -> bool {
        let Some((scored, conceded)) = game.scores_for(self.team_id) else { return false };

        self.games_played = self.games_played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);

        let extra_time = game.decided_in_extra_time();
        let points = if scored > conceded {
            if extra_time {
                self.ot_wins = self.ot_wins.saturating_add(1);
                rr.points_for_ot_win
            }
            else {
                self.wins = self.wins.saturating_add(1);
                rr.points_for_win
            }
        }
        else {
            if extra_time {
                self.ot_losses = self.ot_losses.saturating_add(1);
                rr.points_for_ot_loss
            }
            else {
                self.losses = self.losses.saturating_add(1);
                rr.points_for_loss
            }
        };
        self.points = self.points.saturating_add(points);
        true
    }
}
