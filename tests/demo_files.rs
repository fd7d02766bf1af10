// The sample files under demos/ load and produce the expected tables.
use std::path::Path;

use command_center_lib::{competition::ranking::RankCriteria, config::load_config, open_store, team::Group};

#[test]
fn demo_config_and_tournament_load() {
    let config = load_config(Path::new("demos/command-center.toml")).unwrap().resolve().unwrap();
    assert_eq!(config.rank_criteria, vec![RankCriteria::Points, RankCriteria::GoalDifference, RankCriteria::GoalsFor]);
    assert_eq!(config.data_file.as_deref(), Some("demos/tournament.toml"));

    let mut data = open_store(&config, None).unwrap();
    assert_eq!(data.teams().len(), 5);
    assert_eq!(data.games().len(), 3);

    let standings = data.standings();
    let group_a: Vec<&str> = standings.group(Group::A).iter().map(|e| e.team.name.as_str()).collect();
    assert_eq!(group_a, vec!["Canada", "USA", "Finland"]);

    let sweden = standings.stats(6).unwrap();
    assert_eq!((sweden.ot_losses, sweden.points), (1, 1));
}
