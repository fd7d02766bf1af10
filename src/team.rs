// Teams taking part in the group stage.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::TeamId;

// The round-robin pools. Standings are only ever computed within one.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    A,
    B,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::A, Group::B];
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Group::A),
            "B" => Ok(Group::B),
            other => Err(format!("unknown group \"{other}\"")),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::A => write!(f, "A"),
            Group::B => write!(f, "B"),
        }
    }
}

// Static reference data. Statistics live in competition::team::TeamStats and are never stored here.
#[derive(Debug, Serialize, Deserialize)]
#[derive(Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub group: Group,
    #[serde(default)]
    pub flag: String,
}

impl Team {
    pub fn build(id: TeamId, name: &str, group: Group, flag: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            group,
            flag: flag.to_string(),
        }
    }
}
