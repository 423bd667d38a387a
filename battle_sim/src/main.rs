//! battle_sim - Play a four-on-four battle in the terminal
//!
//! Loads a roster (the built-in one by default), decides turn order, and asks
//! for each controlled hero's move on stdin. With `--auto` the scripted policy
//! plays both sides.

mod input;
mod render;

use battle_core::config::{default_roster, load_roster};
use battle_core::{Battle, ScriptedSource, Side};
use clap::Parser;
use input::StdinSource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::path::PathBuf;

/// Four-on-four turn-based battle.
///
/// Commands: attack <slot>, magic <slot>, cluster, defend (or a/m/c/d)
#[derive(Parser, Debug)]
#[command(name = "battle_sim", version, about)]
struct Options {
    /// Load parties from a TOML roster instead of the built-in one
    #[arg(long, value_name = "PATH")]
    roster: Option<PathBuf>,
    /// Seed the random number generator
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Let the scripted policy play your party
    #[arg(long)]
    auto: bool,
    /// Print the event log as JSON when the battle ends
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let options = Options::parse();

    let roster = match &options.roster {
        Some(path) => load_roster(path)?,
        None => default_roster()?,
    };
    let mut battle: Battle = roster.build_battle()?;

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    println!("Welcome to the battle sim!");
    let winner = if options.auto {
        let policy_rng = ChaCha8Rng::seed_from_u64(options.seed.unwrap_or(0).wrapping_add(1));
        let mut source = ScriptedSource::with_weights(*battle.weights(), policy_rng);
        let winner = battle.run(&mut source, &mut rng)?;
        for event in battle.events() {
            render::print_event(event);
        }
        winner
    } else {
        let mut source = StdinSource::new();
        let winner = battle.run(&mut source, &mut rng)?;
        source.flush_events(&battle);
        winner
    };

    render::print_parties(&battle);
    log::info!(
        "{} after {} rounds",
        if winner == Side::Controlled { "won" } else { "lost" },
        battle.round()
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(battle.events())?);
    }

    Ok(())
}
