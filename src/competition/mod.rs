// The group stage standings engine.
// Stats are derived from the game list on every call and never written back onto teams.
pub mod ranking;
pub mod round_robin;
pub mod team;

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
use serde::Serialize;

use crate::{game::Game, team::{Group, Team}, types::TeamId};
use self::{ranking::{rank_teams, RankCriteria}, round_robin::RoundRobin, team::TeamStats};

// Compute the stats of every team in the roster from the finished games.
// Every roster team gets an entry, all zeroes if it has not finished a game.
// Games that point at teams outside the roster are skipped for the unknown side.
pub fn compute_stats(teams: &[Team], games: &[Game], rr: &RoundRobin) -> HashMap<TeamId, TeamStats> {
    let finished: Vec<&Game> = games.iter().filter(|g| g.is_finished()).collect();

    for game in finished.iter() {
        for side in [game.home, game.away] {
            if !teams.iter().any(|t| t.id == side) {
                warn!("game {} references team id {side} which is not in the roster", game.id);
            }
        }
    }

    let mut stats = HashMap::with_capacity(teams.len());
    for team in teams.iter() {
        let mut team_stats = TeamStats::build(team.id);
        for game in finished.iter() {
            team_stats.record(game, rr);
        }
        stats.insert(team.id, team_stats);
    }

    debug!("computed stats for {} teams from {} finished games", teams.len(), finished.len());
    stats
}

// One row of a group table.
#[derive(Debug, Serialize)]
#[derive(Clone, PartialEq)]
pub struct StandingsEntry {
    pub team: Team,
    pub stats: TeamStats,
}

// Ranked tables for every group.
#[derive(Debug, Serialize)]
#[derive(Default, Clone, PartialEq)]
pub struct Standings {
    pub groups: BTreeMap<Group, Vec<StandingsEntry>>,
}

impl Standings {
    // Compute and rank. Each group is ranked on its own and groups are never compared.
    pub fn build(teams: &[Team], games: &[Game], rr: &RoundRobin, criteria: &[RankCriteria]) -> Self {
        let mut stats = compute_stats(teams, games, rr);

        let mut groups = BTreeMap::new();
        for group in Group::ALL {
            let entries: Vec<StandingsEntry> = teams.iter()
                .filter(|t| t.group == group)
                .map(|t| StandingsEntry {
                    team: t.clone(),
                    stats: stats.remove(&t.id).unwrap_or_else(|| TeamStats::build(t.id)),
                })
                .collect();

            groups.insert(group, rank_teams(&entries, criteria, |e| &e.stats));
        }

        Self { groups }
    }

    pub fn group(&self, group: Group) -> &[StandingsEntry] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    // 1-based position of a team in its group.
    pub fn position(&self, team_id: TeamId) -> Option<usize> {
        self.groups.values()
            .find_map(|entries| entries.iter().position(|e| e.team.id == team_id))
            .map(|i| i + 1)
    }

    pub fn stats(&self, team_id: TeamId) -> Option<&TeamStats> {
        self.groups.values()
            .flat_map(|entries| entries.iter())
            .find(|e| e.team.id == team_id)
            .map(|e| &e.stats)
    }
}
