use clap::{Parser, Subcommand};
use pandemic_core::board::CityNetwork;
use pandemic_core::disease::DiseaseType;
use pandemic_core::rng::GameRng;
use pandemic_core::simulation::{run_game, EndReason, GameResult, Scenario, SimulationConfig};
use rayon::prelude::*;
use std::collections::HashMap;

#[derive(Parser)]
#[command(name = "pandemic-sim")]
#[command(about = "Disease spread simulator for the Pandemic board game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// City network file
    #[arg(long, default_value = "data/cities.json", global = true)]
    cities: String,

    /// Infection deck file
    #[arg(long, default_value = "data/infection_cards.json", global = true)]
    infection_cards: String,

    /// Player deck file
    #[arg(long, default_value = "data/player_cards.json", global = true)]
    player_cards: String,

    /// Epidemic cards in the player deck
    #[arg(short, long, default_value = "4", global = true)]
    epidemics: usize,

    /// Outbreaks that end a game
    #[arg(long, default_value = "8", global = true)]
    max_outbreaks: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Play out a single game (default)
    Run {
        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print every draw and outbreak
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play many games and report spread statistics
    Batch {
        /// Number of games to simulate
        #[arg(short, long, default_value = "1000")]
        num_games: usize,

        /// Base seed; game i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the city network as an adjacency list
    Inspect,
}

fn main() {
    let cli = Cli::parse();

    let config = SimulationConfig {
        cities_path: cli.cities.clone(),
        infection_cards_path: cli.infection_cards.clone(),
        player_cards_path: cli.player_cards.clone(),
        epidemics: cli.epidemics,
        max_outbreaks: cli.max_outbreaks,
        ..SimulationConfig::default()
    };

    match cli.command {
        Some(Commands::Inspect) => inspect_network(&config.cities_path),
        Some(Commands::Batch { num_games, seed }) => {
            let scenario = load_scenario(config);
            run_batch(&scenario, num_games, seed);
        }
        Some(Commands::Run { seed, verbose }) => {
            let scenario = load_scenario(config);
            run_single(&scenario, seed, verbose);
        }
        None => {
            let scenario = load_scenario(config);
            run_single(&scenario, None, true);
        }
    }
}

fn load_scenario(config: SimulationConfig) -> Scenario {
    match Scenario::load(config) {
        Ok(scenario) => {
            eprintln!(
                "✓ Loaded {} cities from {}",
                scenario.network().city_count(),
                scenario.config.cities_path
            );
            scenario
        }
        Err(e) => {
            eprintln!("✗ Failed to load game data: {}", e);
            std::process::exit(1);
        }
    }
}

fn inspect_network(path: &str) {
    let network = match CityNetwork::build_from_file(path) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("✗ Failed to load cities from '{}': {}", path, e);
            std::process::exit(1);
        }
    };
    print!("{}", network.graph());
}

fn run_single(scenario: &Scenario, seed: Option<u64>, verbose: bool) {
    let seed = GameRng::new(seed).seed();
    match run_game(scenario, seed, verbose) {
        Ok(result) => print_result(&result),
        Err(e) => {
            eprintln!("✗ Game {} failed: {}", seed, e);
            std::process::exit(1);
        }
    }
}

fn print_result(result: &GameResult) {
    println!("\n=== Result ===\n");
    println!("Seed: {}", result.seed);
    println!("Turns: {}", result.turns);
    println!("Outbreaks: {}", result.outbreaks);
    println!("Epidemics: {}", result.epidemics);
    println!("Ended by: {}", result.end);
    for disease in DiseaseType::ALL {
        println!("  {:6} cubes: {}", disease, result.cubes_on_board[&disease]);
    }
}

fn run_batch(scenario: &Scenario, num_games: usize, seed: Option<u64>) {
    let batch_rng = GameRng::new(seed);
    let base_seed = batch_rng.seed();

    println!("\n=== Pandemic Spread Simulator ===\n");
    println!("Games: {}", num_games);
    println!("Epidemics: {}", scenario.config.epidemics);
    println!("Base seed: {}", base_seed);
    println!();

    let start = std::time::Instant::now();
    // Every game owns its board and decks, so games run independently
    let results: Vec<_> = (0..num_games)
        .into_par_iter()
        .filter_map(|i| {
            let seed = batch_rng.game_seed(i);
            match run_game(scenario, seed, false) {
                Ok(result) => Some(result),
                Err(e) => {
                    eprintln!("✗ Game {} failed: {}", seed, e);
                    None
                }
            }
        })
        .collect();
    let elapsed = start.elapsed();

    if results.is_empty() {
        eprintln!("✗ No games completed");
        std::process::exit(1);
    }

    let completed = results.len() as f64;
    let avg_turns = results.iter().map(|r| r.turns as f64).sum::<f64>() / completed;
    let avg_outbreaks = results.iter().map(|r| r.outbreaks as f64).sum::<f64>() / completed;

    let mut end_dist: HashMap<EndReason, usize> = HashMap::new();
    for r in &results {
        *end_dist.entry(r.end).or_insert(0) += 1;
    }

    println!("=== Results ===\n");
    println!("Average turns: {:.2}", avg_turns);
    println!("Average outbreaks: {:.2}", avg_outbreaks);
    println!();

    println!("Game end distribution:");
    let mut ends: Vec<_> = end_dist.iter().collect();
    ends.sort_by(|a, b| b.1.cmp(a.1));
    for (reason, count) in ends {
        let pct = *count as f64 / completed * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:24} {:5.1}% {} ({})", reason.to_string(), pct, bar, count);
    }

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        completed / elapsed.as_secs_f64()
    );
}
