use crate::{
    console::{
        enums::{DoctorMove, MutantMove},
        prelude::Console,
    },
    error::GameError,
    gm,
    quick_resolver::QuickResolver,
    world::{
        day::eliminate,
        game::{Game, HealOutcome, InfectionOutcome},
        person::{roles::InfoRole, Person},
    },
};

use super::night_events_storage::NightEventsStorage;

/// Either one kill, or a paralysis followed by an infection.
pub(super) async fn mutant(game: &mut Game, console: &mut Console) -> Result<(), GameError> {
    match console.ask_mutant_move().await? {
        MutantMove::Kill => {
            let target = console.ask_player(game, "Who to kill?").await?;
            if let Some(name) = target.or_announce("Nobody was killed") {
                eliminate(game, &name)?;
            }
        }
        MutantMove::Infect => {
            if let Some(name) = console.ask_player(game, "Who to paralyze?").await? {
                game.paralyze(&name)?;
                gm!("{} is paralyzed", name);
            }

            let target = console.ask_player(game, "Who to infect?").await?;
            if let Some(name) = target.or_announce("Nobody was infected") {
                match game.infect(&name)? {
                    InfectionOutcome::Mutated => gm!("Mutation successful"),
                    InfectionOutcome::Resisted => gm!("Mutation failed"),
                }
            }
        }
    }

    Ok(())
}

/// One heal per active doctor, unless they agree on a kill instead.
pub(super) async fn doctor(
    game: &mut Game,
    console: &mut Console,
    doctors: usize,
) -> Result<(), GameError> {
    match console.ask_doctor_move().await? {
        DoctorMove::Kill => {
            let target = console.ask_player(game, "Who to kill?").await?;
            if let Some(name) = target.or_announce("Nobody was killed") {
                eliminate(game, &name)?;
            }
        }
        DoctorMove::Heal => {
            for _ in 0..doctors {
                let target = console.ask_player(game, "Who to heal?").await?;
                if let Some(name) = target.or_announce("Nobody was healed") {
                    match game.heal(&name)? {
                        HealOutcome::Healed => gm!("Healing successful"),
                        HealOutcome::Failed => gm!("Healing failed"),
                    }
                }
            }
        }
    }

    Ok(())
}

pub(super) fn technician(game: &Game, storage: &mut NightEventsStorage) {
    let info = format!("Number of mutants: {}", game.mutant_count());
    storage.set_info(InfoRole::Technician, &info);
    gm!("{}", info);
}

pub(super) async fn psychologist(
    game: &mut Game,
    console: &mut Console,
    storage: &mut NightEventsStorage,
) -> Result<(), GameError> {
    let target = console.ask_player(game, "Who to psychologize?").await?;
    if let Some(name) = target.or_announce("Nobody was psychologized") {
        let mutant = game.psychologize(&name)?;
        let info = format!("{}, mutant: {}", name, mutant);
        storage.set_info(InfoRole::Psychologist, &info);
        gm!("{}", info);
    }
    Ok(())
}

pub(super) async fn geneticist(
    game: &mut Game,
    console: &mut Console,
    storage: &mut NightEventsStorage,
) -> Result<(), GameError> {
    let target = console.ask_player(game, "Who to geneticize?").await?;
    if let Some(name) = target.or_announce("Nobody was geneticized") {
        let genome = game.geneticize(&name)?;
        let info = format!("{}, genome: {}", name, genome);
        storage.set_info(InfoRole::Geneticist, &info);
        gm!("{}", info);
    }
    Ok(())
}

/// What the hacker learns from `role`'s work tonight.
pub(super) fn hack_report(storage: &NightEventsStorage, role: InfoRole) -> String {
    match storage.info(role) {
        Some(info) => info.to_string(),
        None => format!("No information from the {} tonight", role),
    }
}

pub(super) async fn hacker(
    console: &mut Console,
    storage: &NightEventsStorage,
) -> Result<(), GameError> {
    let role = console.ask_hack_target().await?;
    if let Some(role) = role.or_announce("Hacker gave up") {
        gm!("{}", hack_report(storage, role));
    }
    Ok(())
}

pub(super) fn spy_report(person: &Person) -> Vec<String> {
    person
        .spied
        .fields()
        .into_iter()
        .map(|(field, value)| format!("{}: {}", field, value))
        .collect()
}

pub(super) async fn spy(game: &Game, console: &mut Console) -> Result<(), GameError> {
    let target = console.ask_player(game, "Who to spy?").await?;
    if let Some(person) = target
        .or_announce("Nobody was spied on")
        .and_then(|name| game.person(&name))
    {
        for line in spy_report(person) {
            gm!("{}", line);
        }
    }
    Ok(())
}
