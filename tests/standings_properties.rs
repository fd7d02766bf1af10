// Properties of the standings engine over generated game lists.
use std::cmp::Reverse;

use command_center_lib::{
    competition::{compute_stats, ranking::{rank_teams, RankCriteria}, round_robin::RoundRobin, team::TeamStats, Standings},
    game::{Game, GameGroup, GameStatus, Period},
    team::{Group, Team},
    types::TeamId,
};
use proptest::prelude::*;

fn roster() -> Vec<Team> {
    vec![
        Team::build(1, "Canada", Group::A, "🇨🇦"),
        Team::build(2, "Finland", Group::A, "🇫🇮"),
        Team::build(3, "USA", Group::A, "🇺🇸"),
        Team::build(6, "Sweden", Group::B, "🇸🇪"),
        Team::build(7, "Czechia", Group::B, "🇨🇿"),
        Team::build(8, "Slovakia", Group::B, "🇸🇰"),
    ]
}

fn status_strategy() -> impl Strategy<Value = GameStatus> {
    prop_oneof![Just(GameStatus::Scheduled), Just(GameStatus::Live), Just(GameStatus::Finished)]
}

fn period_strategy() -> impl Strategy<Value = Option<Period>> {
    prop_oneof![
        Just(None),
        Just(Some(Period::Third)),
        Just(Some(Period::Overtime)),
        Just(Some(Period::Shootout)),
        Just(Some(Period::Other("2OT".to_string()))),
    ]
}

// Games between two different roster teams with arbitrary scores, status and period.
fn games_strategy(decisive_only: bool) -> impl Strategy<Value = Vec<Game>> {
    let ids: Vec<TeamId> = roster().iter().map(|t| t.id).collect();
    let game = (0..ids.len(), 1..ids.len(), 0u16..9, 0u16..9, status_strategy(), period_strategy());

    prop::collection::vec(game, 0..25).prop_map(move |raw| {
        raw.into_iter()
            .enumerate()
            .filter(|(_, (_, _, home_score, away_score, _, _))| !decisive_only || home_score != away_score)
            .map(|(i, (home, offset, home_score, away_score, status, period))| {
                let away = (home + offset) % ids.len();
                Game::build(i as u16 + 1, ids[home], ids[away], GameGroup::A, "12:00", "Ottawa Arena")
                    .with_result(home_score, away_score, status, period)
            })
            .collect()
    })
}

fn finished_count(games: &[Game]) -> usize {
    games.iter().filter(|g| g.is_finished()).count()
}

proptest! {
    #[test]
    fn games_played_and_goals_mirror(games in games_strategy(false)) {
        let stats = compute_stats(&roster(), &games, &RoundRobin::default());

        let played: usize = stats.values().map(|s| usize::from(s.games_played)).sum();
        let goals_for: u32 = stats.values().map(|s| u32::from(s.goals_for)).sum();
        let goals_against: u32 = stats.values().map(|s| u32::from(s.goals_against)).sum();

        prop_assert_eq!(played, 2 * finished_count(&games));
        prop_assert_eq!(goals_for, goals_against);
    }

    #[test]
    fn decisive_games_hand_out_three_points(games in games_strategy(true)) {
        let stats = compute_stats(&roster(), &games, &RoundRobin::default());
        let points: usize = stats.values().map(|s| usize::from(s.points)).sum();

        prop_assert_eq!(points, 3 * finished_count(&games));
    }

    #[test]
    fn unfinished_games_change_nothing(games in games_strategy(false)) {
        let finished: Vec<Game> = games.iter().filter(|g| g.is_finished()).cloned().collect();

        prop_assert_eq!(
            compute_stats(&roster(), &games, &RoundRobin::default()),
            compute_stats(&roster(), &finished, &RoundRobin::default())
        );
    }

    #[test]
    fn ranking_is_a_stable_sort_on_points_then_difference(
        raw in prop::collection::vec((0u16..6, 0u16..5, 0u16..5), 0..12)
    ) {
        let teams: Vec<TeamStats> = raw.iter().enumerate().map(|(i, (points, goals_for, goals_against))| TeamStats {
            points: *points,
            goals_for: *goals_for,
            goals_against: *goals_against,
            ..TeamStats::build(i as TeamId)
        }).collect();

        let ranked = rank_teams(&teams, &RankCriteria::DEFAULT, |s| s);

        let mut expected = teams.clone();
        expected.sort_by_key(|s| Reverse((s.points, s.goal_difference())));
        prop_assert_eq!(ranked, expected);
    }

    #[test]
    fn groups_never_mix(games in games_strategy(false)) {
        let standings = Standings::build(&roster(), &games, &RoundRobin::default(), &RankCriteria::DEFAULT);

        for group in Group::ALL {
            let table = standings.group(group);
            prop_assert_eq!(table.len(), 3);
            prop_assert!(table.iter().all(|e| e.team.group == group));
        }
    }
}

#[test]
fn level_teams_keep_their_order_either_way_round() {
    let first = TeamStats { points: 10, goals_for: 12, goals_against: 7, ..TeamStats::build(1) };
    let second = TeamStats { points: 10, goals_for: 9, goals_against: 4, ..TeamStats::build(2) };

    let ranked = rank_teams(&[first.clone(), second.clone()], &RankCriteria::DEFAULT, |s| s);
    assert_eq!(ranked.iter().map(|s| s.team_id).collect::<Vec<_>>(), vec![1, 2]);

    let ranked = rank_teams(&[second, first], &RankCriteria::DEFAULT, |s| s);
    assert_eq!(ranked.iter().map(|s| s.team_id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn teams_without_finished_games_are_all_zero() {
    let games = vec![
        Game::build(1, 1, 2, GameGroup::A, "14:00", "Ottawa Arena").with_result(3, 1, GameStatus::Finished, None),
    ];
    let stats = compute_stats(&roster(), &games, &RoundRobin::default());

    for id in [3, 6, 7, 8] {
        assert_eq!(stats[&id], TeamStats::build(id));
    }
}
