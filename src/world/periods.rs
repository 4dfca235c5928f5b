use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Where the game stood when it was last snapshotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Setup,
    Night,
    Day,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Setup => write!(f, "🎲 Setup"),
            Phase::Night => write!(f, "🌃 Night"),
            Phase::Day => write!(f, "🌇 Day"),
        }
    }
}
