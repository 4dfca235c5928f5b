use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone, Parser)]
#[command(name = "mutants-moderator")]
#[command(about = "Moderator aid for the mutants social deduction game")]
pub struct Config {
    /// Roster to deal a new game from
    #[arg(long, default_value = "players.yaml")]
    pub roster: PathBuf,

    /// Snapshot written after every phase
    #[arg(long, default_value = "snapshot.yaml")]
    pub snapshot: PathBuf,

    /// Continue the game stored in the snapshot instead of dealing a new one
    #[arg(long)]
    pub resume: bool,

    /// Seed for role and genome assignment
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Default log filter; `RUST_LOG` wins when set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
