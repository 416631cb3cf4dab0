//! Barkyard CLI - dog daycare management
//!
//! Usage: barkyard [OPTIONS]
//!
//! Runs the interactive facility menu when attached to a terminal, or
//! emits a JSON facility summary with `--json`.

mod menu;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use barkyard::{Config, Daycare, Dog, Owner, Verbosity};

/// Barkyard - dog daycare management
#[derive(Parser, Debug)]
#[command(name = "barkyard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit a JSON facility summary and exit
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a configuration file (defaults to ./barkyard.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    ui::logging::init(log_level(&config, cli.verbose));

    let daycare = seed_daycare(&config)?;

    if cli.json {
        print_summary_json(&daycare)?;
        return Ok(());
    }

    if !std::io::stdin().is_terminal() {
        println!("No terminal attached.");
        println!("Try: `barkyard --json` for a machine-readable summary");
        return Ok(());
    }

    menu::run(daycare)
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                eprintln!(
                    "warning: unknown configuration key '{}' in {}",
                    warning.key,
                    warning.file.display()
                );
            }
            Ok(config.with_env_overrides())
        }
        None => Ok(Config::load_or_default(
            std::env::current_dir().ok().as_deref(),
        )),
    }
}

fn log_level(config: &Config, verbose: u8) -> tracing::Level {
    use tracing::Level;

    match verbose {
        0 => match config.output.verbosity {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Seed the facility with its initial roster.
fn seed_daycare(config: &Config) -> Result<Daycare> {
    let mut daycare = Daycare::new(&config.facility.name, &config.facility.address)
        .with_activities(config.facility.activities.clone());

    daycare.add_dog(Dog::small("D001", "Daisy", "Yorkshire Terrier", 5, 7.5, "Plush toys")?);
    daycare.add_dog(Dog::large("D002", "Max", "German Shepherd", 2, 75.0, "High")?);
    daycare.add_dog(Dog::small("D003", "Bella", "Beagle", 3, 25.0, "Tennis balls")?);
    daycare.add_dog(Dog::large("D004", "Rocky", "Labrador Retriever", 4, 70.0, "Medium")?);

    daycare.add_owner(Owner::new("O001", "John Smith", "john@example.com", "555-123-4567")?);
    daycare.add_owner(Owner::new("O002", "Jane Doe", "jane@example.com", "555-987-6543")?);

    daycare.register_dog_to_owner("D001", "O001");
    daycare.register_dog_to_owner("D003", "O001");
    daycare.register_dog_to_owner("D002", "O002");
    daycare.register_dog_to_owner("D004", "O002");

    Ok(daycare)
}

fn print_summary_json(daycare: &Daycare) -> Result<()> {
    let dogs: Vec<_> = daycare
        .get_all_dogs()
        .values()
        .map(|dog| {
            serde_json::json!({
                "id": dog.dog_id(),
                "name": dog.name(),
                "breed": dog.breed(),
                "age": dog.age(),
                "weight": dog.weight(),
                "checked_in": dog.is_checked_in(),
                "toy_preference": dog.toy_preference(),
                "exercise_needs": dog.exercise_needs(),
            })
        })
        .collect();

    let owners: Vec<_> = daycare
        .get_all_owners()
        .values()
        .map(|owner| {
            serde_json::json!({
                "id": owner.owner_id(),
                "name": owner.name(),
                "email": owner.email(),
                "phone": owner.phone(),
                "dogs_registered": owner.dogs_registered(),
            })
        })
        .collect();

    let summary = serde_json::json!({
        "facility": {
            "name": daycare.name(),
            "address": daycare.address(),
            "activities": daycare.available_activities(),
        },
        "dog_count": daycare.dog_count(),
        "owner_count": daycare.owner_count(),
        "dogs": dogs,
        "owners": owners,
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
