//! Inventory Demo - A fixed scenario demonstrating inventory_core
//!
//! This demo shows:
//! - Stacking, capacity checks and removal
//! - Equipping and unequipping gear
//! - Crafting from the bundled recipe book
//! - Saving and reloading the inventory
//! - A console battle with status effects

mod console;
mod scenario;

use clap::Parser;
use console::ConsoleObserver;
use inventory_core::{CombatSystem, Combatant, GameConfig};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inventory_demo")]
#[command(about = "Inventory management walkthrough followed by a turn-based battle")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Seed for the enemy's choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    let save_path = std::env::temp_dir().join("inventory.json");
    scenario::run(&config, &save_path)?;

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let player = Combatant::from_config(&config.combat.player);
    let enemy = Combatant::from_config(&config.combat.enemy);
    let mut battle = CombatSystem::new(player, enemy, rng);

    scenario::separator("Battle");
    let stdin = io::stdin();
    let outcome = battle.run(&mut stdin.lock(), &mut ConsoleObserver)?;
    println!(
        "\n{} wins the battle after {} turns!",
        outcome.winner_name, outcome.turns
    );

    Ok(())
}

fn init_logging(verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format(|fmt, record| writeln!(fmt, "[{}] {}", record.level(), record.args()));
    builder.init();
}
