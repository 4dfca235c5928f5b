pub mod day;
pub mod game;
pub mod lookup;
pub mod night;
pub mod periods;
pub mod person;
pub mod roster;
pub mod snapshot;
pub mod table;

use std::convert::Infallible;

use tracing::info;

use crate::{console::prelude::Console, error::GameError, gm};

use self::{day::run_day, game::Game, night::run_night, periods::Phase, snapshot::Snapshot};

/// One game driven from one console, snapshotted after every phase.
pub struct World {
    game: Game,
    console: Console,
    snapshot: Snapshot,
}

impl World {
    pub fn new(game: Game, console: Console, snapshot: Snapshot) -> Self {
        Self {
            game,
            console,
            snapshot,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn save(&self) -> Result<(), GameError> {
        self.snapshot.save(&self.game)
    }

    fn show_roles(&self) {
        gm!();
        gm!();
        print!("{}", table::render(&self.game));
    }

    fn announce(&self, phase: Phase) {
        gm!();
        gm!();
        gm!("{} {}", phase, self.game.round);
    }

    /// Night, then the round boundary reset.
    pub async fn night(&mut self) -> Result<(), GameError> {
        self.game.phase = Phase::Night;
        self.save()?;
        self.show_roles();

        self.announce(Phase::Night);
        run_night(&mut self.game, &mut self.console).await?;
        self.game.phase = Phase::Day;
        self.save()?;
        self.show_roles();

        self.game.reset_round();
        self.save()
    }

    pub async fn day(&mut self) -> Result<(), GameError> {
        self.announce(Phase::Day);
        run_day(&mut self.game, &mut self.console).await?;

        self.game.round += 1;
        self.game.phase = Phase::Night;
        self.save()
    }

    /// Plays rounds until the moderator stops the game. There is no win
    /// condition; the moderator calls the end.
    pub async fn live(&mut self) -> Result<Infallible, GameError> {
        info!(
            game_id = %self.game.game_id,
            round = self.game.round,
            phase = ?self.game.phase,
            "game live"
        );

        if self.game.phase == Phase::Day {
            // The night's last save can precede its reset.
            self.game.reset_round();
            self.day().await?;
        }

        loop {
            self.night().await?;
            self.day().await?;
        }
    }

    /// Runs the game until the moderator stops it. A stop keeps the snapshot
    /// of the last phase boundary, so a half-played phase is replayed from its
    /// start on resume.
    pub async fn run(&mut self) -> Result<(), GameError> {
        match self.live().await {
            Ok(never) => match never {},
            Err(err) if err.is_stop() => {
                info!(
                    reason = %err,
                    round = self.game.round,
                    snapshot = %self.snapshot.path().display(),
                    "game stopped"
                );
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::game::tests::sample_game;

    #[tokio::test]
    async fn full_round_is_snapshotted() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("snapshot.yaml"));
        let console = Console::scripted([
            "kill", "dave", "", // mutant
            "heal", "alice", "", // doctor
            "", "", "", // absent info roles
            "",         // dead hacker
            "carol", "", // spy
            "carol", "alice", // day
        ]);
        let mut world = World::new(sample_game(), console, snapshot.clone());

        let stopped = world.live().await.unwrap_err();
        assert!(stopped.is_stop());

        let saved = snapshot.load().unwrap();
        assert_eq!(saved.round, 1);
        assert_eq!(saved.phase, Phase::Night);
        assert_eq!(saved.chief.as_deref(), Some("carol"));
        assert!(saved.players["dave"].dead);
        assert!(saved.players["alice"].dead);
        assert!(saved.players["alice"].mutant);
        assert!(!saved.players["alice"].spied.healed);
    }

    #[tokio::test]
    async fn resumed_day_runs_before_the_next_night() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("snapshot.yaml"));
        let mut game = sample_game();
        game.phase = Phase::Day;
        game.round = 4;

        let console = Console::scripted(["dave", "bob"]);
        let mut world = World::new(game, console, snapshot.clone());
        assert!(world.live().await.unwrap_err().is_stop());

        assert_eq!(world.game().round, 5);
        assert!(world.game().players["bob"].dead);
        assert_eq!(snapshot.load().unwrap().phase, Phase::Night);
    }

    #[tokio::test]
    async fn stopping_mid_night_keeps_the_clean_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("snapshot.yaml"));

        let console = Console::scripted(["kill", "bob"]);
        let mut world = World::new(sample_game(), console, snapshot.clone());
        world.run().await.unwrap();
        assert!(world.game().players["bob"].dead);

        let saved = snapshot.load().unwrap();
        assert_eq!(saved.round, 0);
        assert_eq!(saved.phase, Phase::Night);
        assert!(saved.players.values().all(|p| !p.dead));

        let console = Console::scripted(["kill", "carol"]);
        let mut world = World::new(saved, console, snapshot.clone());
        world.run().await.unwrap();

        let dead: Vec<&str> = world
            .game()
            .players
            .values()
            .filter(|p| p.dead)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(dead, vec!["carol"]);
    }

    #[tokio::test]
    async fn resumed_day_starts_with_a_clean_round() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::new(dir.path().join("snapshot.yaml"));
        let mut game = sample_game();
        game.paralyze("carol").unwrap();
        game.infect("dave").unwrap();
        game.phase = Phase::Day;

        let console = Console::scripted(["dave", ""]);
        let mut world = World::new(game, console, snapshot.clone());
        world.run().await.unwrap();

        let saved = snapshot.load().unwrap();
        assert_eq!(saved.round, 1);
        assert!(!saved.players["carol"].paralyzed);
        assert_eq!(saved.players["dave"].spied, Default::default());
        assert!(saved.players["dave"].mutant);
    }
}
