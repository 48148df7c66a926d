use std::io;

use clap::Parser;
use dnakits::{
    rps::{self, RandomOpponent},
    utils,
};

/// Piedra, papel o tijera contra la computadora. ENTER vacío para salir.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    utils::init_logging();
    let _args = Args::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut opponent = RandomOpponent::new(rand::thread_rng());
    rps::run_game(&mut stdin.lock(), &mut stdout.lock(), &mut opponent)?;
    Ok(())
}
