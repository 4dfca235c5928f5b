use anyhow::Context;
use clap::Parser;
use mutants_moderator::{
    config::Config,
    console::prelude::Console,
    world::{roster::Roster, snapshot::Snapshot, World},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let snapshot = Snapshot::new(config.snapshot.clone());
    let game = if config.resume {
        snapshot
            .load()
            .with_context(|| format!("resuming from {}", snapshot.path().display()))?
    } else {
        let mut rng = config.rng();
        Roster::load(&config.roster)
            .and_then(|roster| roster.into_game(&mut rng))
            .with_context(|| format!("dealing roster {}", config.roster.display()))?
    };

    let mut world = World::new(game, Console::stdin(), snapshot);
    world.run().await?;
    Ok(())
}
