mod night_events_storage;
mod turns;

use tracing::debug;

use crate::{
    console::prelude::Console,
    error::GameError,
    gm,
    world::{
        game::{Game, RoleStatus},
        person::roles::Role,
    },
};

use self::night_events_storage::NightEventsStorage;

fn announce(role: Role, holders: &str) {
    gm!();
    if holders.is_empty() {
        gm!("=== {} ===", role);
    } else {
        gm!("=== {} ({}) ===", role, holders);
    }
}

/// Runs every role's turn in night order. Each turn ends with the moderator
/// pressing enter.
pub async fn run_night(game: &mut Game, console: &mut Console) -> Result<(), GameError> {
    let mut storage = NightEventsStorage::new();

    for role in Role::NIGHT_ORDER {
        play_turn(role, game, console, &mut storage).await?;
        console.pause().await?;
    }

    Ok(())
}

async fn play_turn(
    role: Role,
    game: &mut Game,
    console: &mut Console,
    storage: &mut NightEventsStorage,
) -> Result<(), GameError> {
    match role {
        Role::Mutant => {
            let mutants: Vec<&str> = game
                .active_mutants()
                .into_iter()
                .map(|p| p.name.as_str())
                .collect();
            announce(role, &mutants.join(", "));

            if mutants.is_empty() {
                gm!("No active mutant");
                return Ok(());
            }
            turns::mutant(game, console).await
        }
        Role::Doctor => {
            let doctors: Vec<&str> = game
                .active_doctors()
                .into_iter()
                .map(|p| p.name.as_str())
                .collect();
            announce(role, &doctors.join(" and "));

            if doctors.is_empty() {
                gm!("No active doctor");
                return Ok(());
            }
            let count = doctors.len();
            turns::doctor(game, console, count).await
        }
        Role::Traitor => Ok(()),
        Role::Technician => {
            if ready(game, role) {
                turns::technician(game, storage);
            }
            Ok(())
        }
        Role::Psychologist if ready(game, role) => {
            turns::psychologist(game, console, storage).await
        }
        Role::Geneticist if ready(game, role) => turns::geneticist(game, console, storage).await,
        Role::Hacker if ready(game, role) => turns::hacker(console, storage).await,
        Role::Spy if ready(game, role) => turns::spy(game, console).await,
        Role::Psychologist | Role::Geneticist | Role::Hacker | Role::Spy => Ok(()),
    }
}

/// Announces a single-holder role and tells the moderator whether its holder
/// gets to act.
fn ready(game: &Game, role: Role) -> bool {
    match game.role_status(role) {
        RoleStatus::Absent => {
            announce(role, "");
            gm!("Role not in game");
            false
        }
        RoleStatus::Dead(holder) => {
            announce(role, &holder.name);
            gm!("Dead");
            false
        }
        RoleStatus::Paralyzed(holder) => {
            announce(role, &holder.name);
            gm!("Paralyzed");
            false
        }
        RoleStatus::Ready(holder) => {
            debug!(%role, holder = %holder.name, "night turn");
            announce(role, &holder.name);
            true
        }
    }
}
