use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::GameError;

use super::game::Game;

/// Writes the whole game to one YAML file after every phase.
#[derive(Debug, Clone)]
pub struct Snapshot {
    path: PathBuf,
}

impl Snapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the snapshot file through a sibling temp file, so a crash
    /// mid-write leaves the previous snapshot intact.
    pub fn save(&self, game: &Game) -> Result<(), GameError> {
        let text = serde_yaml::to_string(game)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;

        debug!(
            path = %self.path.display(),
            round = game.round,
            phase = ?game.phase,
            "snapshot written"
        );
        Ok(())
    }

    pub fn load(&self) -> Result<Game, GameError> {
        let text = fs::read_to_string(&self.path)?;
        let game: Game = serde_yaml::from_str(&text)?;

        if let Some(chief) = &game.chief {
            if !game.players.contains_key(chief) {
                return Err(GameError::UnknownPlayer(chief.clone()));
            }
        }

        Ok(game)
    }
}
