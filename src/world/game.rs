use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::GameError;

use super::{
    periods::Phase,
    person::{
        roles::{Genome, Role},
        Person,
    },
};

/// Whether the holder of a single-holder role may act tonight.
#[derive(Debug, Clone, Copy)]
pub enum RoleStatus<'g> {
    Absent,
    Dead(&'g Person),
    Paralyzed(&'g Person),
    Ready(&'g Person),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfectionOutcome {
    Mutated,
    Resisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealOutcome {
    Healed,
    Failed,
}

/// The whole table: every person, the role pool they were dealt from and
/// the current chief. This is exactly what goes into a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_id: Uuid,
    #[serde(default)]
    pub round: u32,
    #[serde(default)]
    pub phase: Phase,
    pub num_weak: usize,
    pub num_resistant: usize,
    pub roles: Vec<Role>,
    pub players: BTreeMap<String, Person>,
    #[serde(default)]
    pub chief: Option<String>,
}

impl Game {
    pub fn new<I>(num_weak: usize, num_resistant: usize, roles: Vec<Role>, players: I) -> Self
    where
        I: IntoIterator<Item = Person>,
    {
        Game {
            game_id: Uuid::new_v4(),
            round: 0,
            phase: Phase::Setup,
            num_weak,
            num_resistant,
            roles,
            players: players
                .into_iter()
                .map(|person| (person.name.clone(), person))
                .collect(),
            chief: None,
        }
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.players.get(name)
    }

    fn person_mut(&mut self, name: &str) -> Result<&mut Person, GameError> {
        self.players
            .get_mut(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    pub fn holders(&self, role: Role) -> impl Iterator<Item = &Person> {
        self.players.values().filter(move |p| p.has_role(role))
    }

    /// First holder of `role` in name order.
    pub fn holder(&self, role: Role) -> Option<&Person> {
        self.holders(role).next()
    }

    pub fn role_status(&self, role: Role) -> RoleStatus<'_> {
        match self.holder(role) {
            None => RoleStatus::Absent,
            Some(person) if person.dead => RoleStatus::Dead(person),
            Some(person) if person.paralyzed => RoleStatus::Paralyzed(person),
            Some(person) => RoleStatus::Ready(person),
        }
    }

    /// Living, unparalyzed players carrying the mutation, whatever their role.
    pub fn active_mutants(&self) -> Vec<&Person> {
        self.players
            .values()
            .filter(|p| p.mutant && p.can_act())
            .collect()
    }

    /// Doctors who can still heal: alive, unparalyzed and not mutated.
    pub fn active_doctors(&self) -> Vec<&Person> {
        self.holders(Role::Doctor)
            .filter(|p| p.can_act() && !p.mutant)
            .collect()
    }

    pub fn mutant_count(&self) -> usize {
        self.players.values().filter(|p| p.mutant).count()
    }

    pub fn kill(&mut self, name: &str) -> Result<&Person, GameError> {
        let person = self.person_mut(name)?;
        person.dead = true;
        info!(player = %person.name, role = person.role_name(), "player killed");
        Ok(person)
    }

    pub fn paralyze(&mut self, name: &str) -> Result<(), GameError> {
        let person = self.person_mut(name)?;
        person.paralyzed = true;
        person.spied.paralyzed = true;
        Ok(())
    }

    /// Resistant genomes never mutate. The attempt is recorded either way.
    pub fn infect(&mut self, name: &str) -> Result<InfectionOutcome, GameError> {
        let person = self.person_mut(name)?;
        person.spied.mutated = true;

        if person.genome == Genome::Resistant {
            info!(player = %person.name, "infection resisted");
            Ok(InfectionOutcome::Resisted)
        } else {
            person.mutant = true;
            info!(player = %person.name, "player mutated");
            Ok(InfectionOutcome::Mutated)
        }
    }

    /// A weak-genome mutant cannot be cured. Healing a non-mutant succeeds
    /// trivially.
    pub fn heal(&mut self, name: &str) -> Result<HealOutcome, GameError> {
        let person = self.person_mut(name)?;
        person.spied.healed = true;

        if person.mutant && person.genome == Genome::Weak {
            info!(player = %person.name, "healing failed");
            Ok(HealOutcome::Failed)
        } else {
            person.mutant = false;
            info!(player = %person.name, "player healed");
            Ok(HealOutcome::Healed)
        }
    }

    pub fn psychologize(&mut self, name: &str) -> Result<bool, GameError> {
        let person = self.person_mut(name)?;
        person.spied.psychologized = true;
        Ok(person.mutant)
    }

    pub fn geneticize(&mut self, name: &str) -> Result<Genome, GameError> {
        let person = self.person_mut(name)?;
        person.spied.geneticized = true;
        Ok(person.genome)
    }

    pub fn chief(&self) -> Option<&Person> {
        self.chief.as_deref().and_then(|name| self.person(name))
    }

    /// A new chief is only elected when there is none or the last one died.
    pub fn needs_chief(&self) -> bool {
        match self.chief() {
            Some(chief) => chief.dead,
            None => true,
        }
    }

    pub fn elect_chief(&mut self, name: Option<&str>) -> Result<(), GameError> {
        match name {
            Some(name) => {
                self.person(name)
                    .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
                info!(chief = name, "chief elected");
                self.chief = Some(name.to_string());
            }
            None => self.chief = None,
        }
        Ok(())
    }

    /// Round boundary: paralysis wears off and spied records start fresh.
    pub fn reset_round(&mut self) {
        for person in self.players.values_mut() {
            person.reset_round();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_game() -> Game {
        let mut game = Game::new(
            1,
            1,
            vec![Role::Mutant, Role::Doctor, Role::Spy, Role::Hacker],
            vec![
                Person::new("alice", Some(Role::Mutant)),
                Person::new("bob", Some(Role::Doctor)),
                Person::new("carol", Some(Role::Spy)),
                Person::new("dave", Some(Role::Hacker)),
            ],
        );
        let alice = game.players.get_mut("alice").unwrap();
        alice.mutant = true;
        alice.genome = Genome::Weak;
        game
    }

    #[test]
    fn killing_marks_only_the_target() {
        let mut game = sample_game();
        let before = game.players.clone();

        game.kill("bob").unwrap();

        assert!(game.players["bob"].dead);
        for name in ["alice", "carol", "dave"] {
            assert_eq!(game.players[name], before[name]);
        }
    }

    #[test]
    fn kill_unknown_player_is_an_error() {
        let mut game = sample_game();
        assert!(matches!(
            game.kill("zed"),
            Err(GameError::UnknownPlayer(name)) if name == "zed"
        ));
    }

    #[test]
    fn infection_respects_resistant_genome() {
        let mut game = sample_game();
        game.players.get_mut("carol").unwrap().genome = Genome::Resistant;

        assert_eq!(game.infect("carol").unwrap(), InfectionOutcome::Resisted);
        assert!(!game.players["carol"].mutant);
        assert!(game.players["carol"].spied.mutated);

        assert_eq!(game.infect("dave").unwrap(), InfectionOutcome::Mutated);
        assert!(game.players["dave"].mutant);

        game.players.get_mut("bob").unwrap().genome = Genome::Weak;
        assert_eq!(game.infect("bob").unwrap(), InfectionOutcome::Mutated);
        assert!(game.players["bob"].mutant);
    }

    #[test]
    fn healing_fails_only_on_weak_mutants() {
        let mut game = sample_game();

        assert_eq!(game.heal("alice").unwrap(), HealOutcome::Failed);
        assert!(game.players["alice"].mutant);

        game.infect("dave").unwrap();
        assert_eq!(game.heal("dave").unwrap(), HealOutcome::Healed);
        assert!(!game.players["dave"].mutant);
        assert!(game.players["dave"].spied.healed);

        assert_eq!(game.heal("carol").unwrap(), HealOutcome::Healed);
        assert!(!game.players["carol"].mutant);
    }

    #[test]
    fn role_status_follows_holder() {
        let mut game = sample_game();
        assert!(matches!(game.role_status(Role::Spy), RoleStatus::Ready(p) if p.name == "carol"));
        assert!(matches!(game.role_status(Role::Technician), RoleStatus::Absent));

        game.paralyze("carol").unwrap();
        assert!(matches!(game.role_status(Role::Spy), RoleStatus::Paralyzed(_)));

        game.kill("carol").unwrap();
        assert!(matches!(game.role_status(Role::Spy), RoleStatus::Dead(_)));
    }

    #[test]
    fn mutated_doctor_stops_healing() {
        let mut game = sample_game();
        assert_eq!(game.active_doctors().len(), 1);

        game.infect("bob").unwrap();
        assert!(game.active_doctors().is_empty());
    }

    #[test]
    fn reset_round_clears_every_player() {
        let mut game = sample_game();
        game.paralyze("bob").unwrap();
        game.infect("carol").unwrap();
        game.psychologize("dave").unwrap();
        game.geneticize("alice").unwrap();

        game.reset_round();
        let once = game.players.clone();
        game.reset_round();

        assert_eq!(game.players, once);
        for person in game.players.values() {
            assert!(!person.paralyzed);
            assert!(person.spied.fields().iter().all(|(_, set)| !set));
        }
        assert!(game.players["carol"].mutant);
    }

    #[test]
    fn chief_is_replaced_only_when_dead() {
        let mut game = sample_game();
        assert!(game.needs_chief());

        game.elect_chief(Some("carol")).unwrap();
        assert!(!game.needs_chief());

        game.kill("carol").unwrap();
        assert!(game.needs_chief());

        assert!(game.elect_chief(Some("nobody")).is_err());
        game.elect_chief(None).unwrap();
        assert!(game.chief().is_none());
    }
}
