// Error types for everything around the standings engine.
// The engine itself never fails; these cover the store, loading and config.
use thiserror::Error;

use crate::types::{AlertId, GameId, RequestId, StaffId, TeamId};

#[derive(Error, Debug)]
#[derive(PartialEq)]
pub enum StoreError {
    #[error("unknown team id {0}")]
    UnknownTeam(TeamId),

    #[error("unknown game id {0}")]
    UnknownGame(GameId),

    #[error("no delegation for team id {0}")]
    UnknownDelegation(TeamId),

    #[error("unknown service request id {0}")]
    UnknownRequest(RequestId),

    #[error("unknown staff member id {0}")]
    UnknownStaff(StaffId),

    #[error("unknown alert id {0}")]
    UnknownAlert(AlertId),

    #[error("game {game} has the same team on both sides")]
    SameTeamTwice { game: GameId },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("{who} is not allowed to {action}")]
    Forbidden { who: String, action: &'static str },

    #[error("service request details cannot be empty")]
    EmptyRequestDetails,

    #[error("the shared store lock was poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read tournament file: {0}")]
    Io(#[from] std::io::Error),

    #[error("tournament TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("tournament JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported tournament file extension: {0}")]
    UnsupportedFormat(String),

    #[error("game {game} references unknown team \"{name}\"")]
    UnknownTeam { game: GameId, name: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown rank criterion \"{0}\"")]
    UnknownCriterion(String),

    #[error("unknown log level \"{0}\"")]
    UnknownLogLevel(String),
}

// Anything a command-line run can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not serialise output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("could not set up logging: {0}")]
    Logging(String),

    #[error("{0}")]
    InvalidArgument(String),
}
