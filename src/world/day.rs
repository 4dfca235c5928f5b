use crate::{console::prelude::Console, error::GameError, gm, quick_resolver::QuickResolver};

use super::game::Game;

/// Kills `name` and reads out the role they held.
pub(crate) fn eliminate(game: &mut Game, name: &str) -> Result<(), GameError> {
    let person = game.kill(name)?;
    gm!("{} was killed, they were {}", person.name, person.role_name());
    Ok(())
}

/// Keeps the chief unless they died, then eliminates whoever the vote is
/// against.
pub async fn run_day(game: &mut Game, console: &mut Console) -> Result<(), GameError> {
    if game.needs_chief() {
        let chief = console.ask_player(game, "Who is the chief?").await?;
        game.elect_chief(chief.as_deref())?;
    }

    let target = console.ask_player(game, "Who to vote against?").await?;
    if let Some(name) = target.or_announce("Nobody was voted out") {
        eliminate(game, &name)?;
    }

    Ok(())
}
