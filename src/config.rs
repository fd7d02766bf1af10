// Configuration: a sparse TOML file resolved against built-in defaults.
// Every field is optional; anything left out keeps its default.
use std::{fs, path::Path};

use log::{debug, info, warn, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::{competition::{ranking::RankCriteria, round_robin::RoundRobin}, error::ConfigError, schedule::EventSettings, types::Points};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub points: PointsConfig,
    #[serde(default)]
    pub standings: StandingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EventConfig {
    pub name: Option<String>,
    pub year: Option<String>,
    pub official_site_url: Option<String>,
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PointsConfig {
    pub win: Option<Points>,
    pub ot_win: Option<Points>,
    pub ot_loss: Option<Points>,
    pub loss: Option<Points>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StandingsConfig {
    pub rank_criteria: Option<Vec<String>>,
    pub qualifying_spots: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

pub const DEFAULT_QUALIFYING_SPOTS: usize = 4;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Concrete values, no Options.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: EventSettings,
    pub data_file: Option<String>,
    pub points: RoundRobin,
    pub rank_criteria: Vec<RankCriteria>,
    pub qualifying_spots: usize,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            settings: EventSettings::default(),
            data_file: None,
            points: RoundRobin::default(),
            rank_criteria: RankCriteria::DEFAULT.to_vec(),
            qualifying_spots: DEFAULT_QUALIFYING_SPOTS,
            log_level: DEFAULT_LOG_LEVEL,
            log_file: None,
        }
    }
}

// Load the config from a path. A missing file is not an error: defaults apply.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        info!("no config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    info!("loaded config from {}", path.display());
    debug!("config: {:?}", config);
    Ok(config)
}

fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(ConfigError::UnknownLogLevel(other.to_string())),
    }
}

impl Config {
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let defaults = ResolvedConfig::default();

        let mut settings = defaults.settings;
        if let Some(name) = &self.event.name { settings.event_name = name.clone(); }
        if let Some(year) = &self.event.year { settings.event_year = year.clone(); }
        if let Some(url) = &self.event.official_site_url { settings.official_site_url = url.clone(); }

        let points = RoundRobin::build(
            self.points.win.unwrap_or(defaults.points.points_for_win),
            self.points.ot_win.unwrap_or(defaults.points.points_for_ot_win),
            self.points.ot_loss.unwrap_or(defaults.points.points_for_ot_loss),
            self.points.loss.unwrap_or(defaults.points.points_for_loss),
        );
        if !points.is_balanced() {
            warn!("points table {points:?} hands out more points for some results than others");
        }

        let rank_criteria = match &self.standings.rank_criteria {
            Some(names) if !names.is_empty() => names.iter()
                .map(|n| n.parse::<RankCriteria>())
                .collect::<Result<Vec<_>, _>>()?,
            _ => defaults.rank_criteria,
        };

        let log_level = match &self.logging.level {
            Some(level) => parse_level(level)?,
            None => defaults.log_level,
        };

        Ok(ResolvedConfig {
            settings,
            data_file: self.event.data_file.clone(),
            points,
            rank_criteria,
            qualifying_spots: self.standings.qualifying_spots.unwrap_or(defaults.qualifying_spots),
            log_level,
            log_file: self.logging.file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = Config::default().resolve().unwrap();
        assert_eq!(resolved.points, RoundRobin::build(3, 2, 1, 0));
        assert_eq!(resolved.rank_criteria, vec![RankCriteria::Points, RankCriteria::GoalDifference]);
        assert_eq!(resolved.qualifying_spots, 4);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.settings.event_name, "Kalam");
    }

    #[test]
    fn sparse_file_overrides_only_what_it_names() {
        let toml_str = r#"
            [event]
            name = "Winter Classic"

            [points]
            ot_win = 3

            [standings]
            rank_criteria = ["points", "goal_difference", "goals_for"]

            [logging]
            level = "debug"
            file = "command-center.log"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.settings.event_name, "Winter Classic");
        assert_eq!(resolved.settings.event_year, "2025");
        assert_eq!(resolved.points, RoundRobin::build(3, 3, 1, 0));
        assert_eq!(resolved.rank_criteria.last(), Some(&RankCriteria::GoalsFor));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file.as_deref(), Some("command-center.log"));
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let config: Config = toml::from_str("[standings]\nrank_criteria = [\"seed\"]").unwrap();
        assert!(matches!(config.resolve(), Err(ConfigError::UnknownCriterion(name)) if name == "seed"));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert!(config.points.win.is_none());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[points\nwin = 3").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unbalanced_points_table_still_resolves() {
        let config: Config = toml::from_str("[points]\nwin = 40000\nloss = 1").unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.points, RoundRobin::build(40000, 2, 1, 1));
        assert!(!resolved.points.is_balanced());
    }
}
