use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::{error::GameError, world::game::Game};

use super::roles::{Genome, Role};

/// Deals the game's role pool: pre-assigned roles are taken out of the pool
/// first, then every unassigned player draws uniformly from what is left.
pub fn assign_roles<R>(game: &mut Game, rng: &mut R) -> Result<(), GameError>
where
    R: Rng,
{
    if game.roles.len() != game.players.len() {
        return Err(GameError::RoleCountMismatch {
            players: game.players.len(),
            roles: game.roles.len(),
        });
    }

    let mut pool = game.roles.clone();

    for person in game.players.values() {
        if let Some(role) = person.role {
            match pool.iter().position(|r| *r == role) {
                Some(at) => {
                    pool.swap_remove(at);
                }
                None => {
                    return Err(GameError::RoleNotInPool {
                        player: person.name.clone(),
                        role,
                    })
                }
            }
        }
    }

    for person in game.players.values_mut().filter(|p| p.role.is_none()) {
        // Lengths match and every pre-assigned role consumed one slot, so the
        // pool holds exactly one role per unassigned player.
        let drawn = pool.swap_remove(rng.gen_range(0..pool.len()));
        debug!(player = %person.name, role = %drawn, "role drawn");
        person.role = Some(drawn);
    }

    Ok(())
}

/// Mutant role-holders start infected and weak.
pub fn mark_mutants(game: &mut Game) {
    for person in game.players.values_mut() {
        if person.has_role(Role::Mutant) {
            person.mutant = true;
            person.genome = Genome::Weak;
        }
    }
}

/// Hands out `genome` to random normal players until `target` players carry
/// it. Mutant and doctor holders are never picked.
pub fn top_up_genome<R>(
    game: &mut Game,
    genome: Genome,
    target: usize,
    rng: &mut R,
) -> Result<(), GameError>
where
    R: Rng,
{
    let mut current = game.players.values().filter(|p| p.genome == genome).count();

    while current < target {
        let eligible: Vec<String> = game
            .players
            .values()
            .filter(|p| p.genome == Genome::Normal)
            .filter(|p| matches!(p.role, Some(role) if !role.keeps_genome()))
            .map(|p| p.name.clone())
            .collect();

        let chosen = eligible
            .choose(rng)
            .ok_or(GameError::NoEligiblePlayers { genome })?;

        if let Some(person) = game.players.get_mut(chosen) {
            debug!(player = %person.name, %genome, "genome assigned");
            person.genome = genome;
        }
        current += 1;
    }

    Ok(())
}
