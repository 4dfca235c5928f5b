use thiserror::Error;

use crate::world::person::roles::{Genome, Role};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("roster has {players} players but {roles} roles")]
    RoleCountMismatch { players: usize, roles: usize },
    #[error("player {player} is pre-assigned {role}, which is not left in the role pool")]
    RoleNotInPool { player: String, role: Role },
    #[error("no eligible players left to receive a {genome} genome")]
    NoEligiblePlayers { genome: Genome },
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("console input closed")]
    InputClosed,
    #[error("interrupted by moderator")]
    Interrupted,
}

impl GameError {
    /// Whether this error means the moderator stopped the game rather than
    /// something going wrong.
    pub fn is_stop(&self) -> bool {
        matches!(self, GameError::InputClosed | GameError::Interrupted)
    }
}
