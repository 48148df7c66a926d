//! Rock, paper, scissors against a (pseudo) random opponent.
//!
//! The opponent sits behind the [`Opponent`] trait so the game loop can be
//! driven by a fixed choice in tests.

use std::{
    fmt,
    io::{BufRead, Write},
    str::FromStr,
};

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

pub const VALID_CHOICES: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// the choice this one defeats
    pub fn beats(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RpsError {
    #[error("Opción inválida: {0}")]
    InvalidChoice(String),
}

/// exact match only: "rock", "paper", "scissors"
impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VALID_CHOICES
            .iter()
            .find(|choice| choice.as_str() == s)
            .copied()
            .ok_or_else(|| RpsError::InvalidChoice(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// outcome from the user's side
pub fn determine_result(user: Choice, cpu: Choice) -> Outcome {
    if user == cpu {
        Outcome::Draw
    } else if user.beats() == cpu {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

pub trait Opponent {
    fn choose(&mut self) -> Choice;
}

/// uniform pick over [`VALID_CHOICES`]
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose(&mut self) -> Choice {
        VALID_CHOICES[self.rng.gen_range(0..VALID_CHOICES.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub user: Choice,
    pub cpu: Choice,
    pub outcome: Outcome,
}

/// one round. `user_choice` must be one of the valid choices
pub fn play<O: Opponent + ?Sized>(
    user_choice: &str,
    opponent: &mut O,
) -> Result<Round, RpsError> {
    let user = user_choice.parse::<Choice>()?;
    let cpu = opponent.choose();
    Ok(Round {
        user,
        cpu,
        outcome: determine_result(user, cpu),
    })
}

pub const PROMPT: &str = "Tu elección (rock/paper/scissors) > ";

fn print_banner<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "🎮 Rock, Paper, Scissors Game 🎮")?;
    writeln!(out, "Escribe rock, paper o scissors.")?;
    writeln!(out, "Presiona ENTER sin escribir nada para salir.")?;
    writeln!(out, "{}", "-".repeat(40))
}

/// interactive loop. stops on an empty line or end of input,
/// reprompts on anything that is not a valid choice
pub fn run_game<B, W, O>(input: &mut B, out: &mut W, opponent: &mut O) -> std::io::Result<()>
where
    B: BufRead + ?Sized,
    W: Write + ?Sized,
    O: Opponent + ?Sized,
{
    print_banner(out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        let n = input.read_line(&mut line)?;
        let user_input = line.trim().to_lowercase();
        if n == 0 || user_input.is_empty() {
            writeln!(out, "¡Gracias por jugar! Hasta la próxima 👋")?;
            break;
        }

        let round = match play(&user_input, opponent) {
            Ok(round) => round,
            Err(err) => {
                tracing::debug!("{}", err);
                writeln!(out, "Entrada inválida. Escribe rock, paper o scissors.")?;
                continue;
            }
        };

        writeln!(out, "CPU: {}", round.cpu)?;
        writeln!(out, "Resultado: {}", round.outcome)?;
        if round.outcome == Outcome::Win {
            writeln!(out, "🎉✨🚀 ¡Ganaste! 🎉✨🚀")?;
        }
    }
    Ok(())
}
