use std::{collections::BTreeMap, fs, path::Path};

use rand::Rng;
use serde::Deserialize;
use tracing::info;

use crate::error::GameError;

use super::{
    game::Game,
    person::{
        assigner::{assign_roles, mark_mutants, top_up_genome},
        roles::{Genome, Role},
        Person,
    },
};

fn default_genome_count() -> usize {
    1
}

/// The hand-written roster a game starts from.
///
/// ```yaml
/// num_weak: 1
/// num_resistant: 1
/// roles: [mutant, doctor, spy, hacker]
/// players:
///   alice: null
///   bob: doctor
/// ```
///
/// `roles` may be left out when every player is pre-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    #[serde(default = "default_genome_count")]
    pub num_weak: usize,
    #[serde(default = "default_genome_count")]
    pub num_resistant: usize,
    #[serde(default)]
    pub roles: Vec<Role>,
    pub players: BTreeMap<String, Option<Role>>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Roster, GameError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Roster, GameError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Deals roles and genomes, producing a game ready for its first night.
    pub fn into_game<R: Rng>(self, rng: &mut R) -> Result<Game, GameError> {
        let roles = if self.roles.is_empty() {
            self.players.values().flatten().copied().collect()
        } else {
            self.roles
        };

        let (num_weak, num_resistant) = (self.num_weak, self.num_resistant);
        let mut game = Game::new(
            num_weak,
            num_resistant,
            roles,
            self.players
                .iter()
                .map(|(name, role)| Person::new(name, *role)),
        );

        assign_roles(&mut game, rng)?;
        mark_mutants(&mut game);
        top_up_genome(&mut game, Genome::Weak, num_weak, rng)?;
        top_up_genome(&mut game, Genome::Resistant, num_resistant, rng)?;

        info!(
            game_id = %game.game_id,
            players = game.players.len(),
            "roles assigned"
        );
        Ok(game)
    }
}
