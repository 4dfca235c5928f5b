use std::io::{BufRead, Write};

use tokio::sync::mpsc::{self, Receiver};
use tracing::debug;

use crate::{
    error::GameError,
    gm,
    world::{
        game::Game,
        lookup::{lookup, Lookup},
        person::roles::InfoRole,
    },
};

use super::{
    decide, doctor_moves,
    enums::{DoctorMove, HackerChoice, MutantMove},
    hacker_choices, mutant_moves,
};

/// Reads stdin on its own thread so the async loop never blocks on it. The
/// channel closes when stdin does.
pub fn get_console_input_receiver() -> Receiver<String> {
    let (tx, rx) = mpsc::channel(1024);
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut input = String::new();
        loop {
            input.clear();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if tx.blocking_send(input.trim().to_string()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    rx
}

pub enum Received {
    FromConsole(String),
    Closed,
    Interrupted,
}

pub async fn receive_console_or_interrupt(console_receiver: &mut Receiver<String>) -> Received {
    tokio::select! {
        v = console_receiver.recv() => match v {
            Some(line) => Received::FromConsole(line),
            None => Received::Closed,
        },
        Ok(()) = tokio::signal::ctrl_c() => Received::Interrupted,
    }
}

/// Line-based moderator prompts. Every read can be cut short by closing the
/// input or, on a real terminal, by Ctrl-C.
pub struct Console {
    receiver: Receiver<String>,
    interruptible: bool,
}

impl Console {
    pub fn stdin() -> Self {
        Self {
            receiver: get_console_input_receiver(),
            interruptible: true,
        }
    }

    /// A console that answers with `lines`, then reports closed input.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let (tx, rx) = mpsc::channel(lines.len().max(1));
        for line in lines {
            // Capacity covers every line.
            let _ = tx.try_send(line);
        }

        Self {
            receiver: rx,
            interruptible: false,
        }
    }

    pub async fn read(&mut self, prompt: &str) -> Result<String, GameError> {
        print!("{} ", prompt);
        std::io::stdout().flush()?;

        let received = if self.interruptible {
            receive_console_or_interrupt(&mut self.receiver).await
        } else {
            match self.receiver.recv().await {
                Some(line) => Received::FromConsole(line),
                None => Received::Closed,
            }
        };

        match received {
            Received::FromConsole(line) => Ok(line),
            Received::Closed => Err(GameError::InputClosed),
            Received::Interrupted => Err(GameError::Interrupted),
        }
    }

    /// Waits for enter, so role results can be read out privately.
    pub async fn pause(&mut self) -> Result<(), GameError> {
        self.read("(enter)").await.map(|_| ())
    }

    /// Asks until the answer names exactly one player. `None` means the
    /// moderator left the answer empty.
    pub async fn ask_player(
        &mut self,
        game: &Game,
        prompt: &str,
    ) -> Result<Option<String>, GameError> {
        loop {
            let line = self.read(prompt).await?;
            match lookup(game, &line) {
                Lookup::Nobody => return Ok(None),
                Lookup::Found(name) => return Ok(Some(name)),
                Lookup::Ambiguous(candidates) => {
                    debug!(input = %line, "ambiguous player name");
                    gm!("Ambiguous, could be: {}", candidates.join(", "));
                }
                Lookup::NotFound => {
                    debug!(input = %line, "unknown player name");
                    gm!("Player not found");
                }
            }
        }
    }

    pub async fn ask_mutant_move(&mut self) -> Result<MutantMove, GameError> {
        let line = self.read("Infect or kill?").await?;
        Ok(decide(&mutant_moves(), line).await.unwrap_or(MutantMove::Infect))
    }

    pub async fn ask_doctor_move(&mut self) -> Result<DoctorMove, GameError> {
        let line = self.read("Heal or kill?").await?;
        Ok(decide(&doctor_moves(), line).await.unwrap_or(DoctorMove::Heal))
    }

    /// `None` when the hacker gives up with an empty answer.
    pub async fn ask_hack_target(&mut self) -> Result<Option<InfoRole>, GameError> {
        let handler = hacker_choices();
        loop {
            let line = self.read("Role to hack?").await?;
            match decide(&handler, line).await {
                Some(HackerChoice::Hack(role)) => return Ok(Some(role)),
                Some(HackerChoice::GiveUp) => return Ok(None),
                Some(HackerChoice::Unknown) | None => {
                    gm!("Hackable roles: psychologist, geneticist, technician");
                }
            }
        }
    }
}
