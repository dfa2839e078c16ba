// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for games, tournaments, and evolution
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use risk_agents::{AggressiveStrategy, AggressiveWeights, RandomStrategy, TallStrategy};
use risk_engine::setup::create_game;
use risk_engine::strategy::Strategy;
use risk_tournament::{evolve, run_game, Database, EvolutionConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "risk-runner", about = "Conquest strategy lab")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single game and print the result
    Play {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 4)]
        players: usize,
        /// Strategy lineup: "random", "aggressive", "tall", or "mixed"
        #[arg(long, default_value = "mixed")]
        strategy: String,
        /// Emit the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run a tournament of N games into a results database
    Tournament {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value_t = 4)]
        players: usize,
        #[arg(short, long, default_value = "results.db")]
        db: String,
        /// Strategy lineup: "random", "aggressive", "tall", or "mixed"
        #[arg(long, default_value = "mixed")]
        strategy: String,
    },
    /// Evolve aggressive-strategy weights
    Evolve {
        #[arg(short, long, default_value_t = 30)]
        generations: usize,
        #[arg(long, default_value_t = 30)]
        population: usize,
        #[arg(long, default_value_t = 10)]
        games_per_eval: usize,
        #[arg(short, long, default_value_t = 4)]
        players: usize,
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,
        /// Write the best weight vector to this JSON file
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Show the ELO leaderboard from a results database
    Leaderboard {
        #[arg(short, long, default_value = "results.db")]
        db: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            seed,
            players,
            strategy,
            json,
        } => cmd_play(seed, players, &strategy, json),
        Commands::Tournament {
            games,
            players,
            db,
            strategy,
        } => cmd_tournament(games, players, &db, &strategy),
        Commands::Evolve {
            generations,
            population,
            games_per_eval,
            players,
            seed,
            out,
        } => cmd_evolve(generations, population, games_per_eval, players, seed, out),
        Commands::Leaderboard { db } => cmd_leaderboard(&db),
    }
}

fn cmd_play(seed: u64, players: usize, lineup: &str, json: bool) {
    let mut game = create_game(players, seed);
    let mut strategies = make_strategies(seed, players, lineup);

    match run_game(&mut game, &mut strategies, seed) {
        Ok(result) => {
            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(text) => println!("{}", text),
                    Err(e) => eprintln!("Serialization error: {}", e),
                }
                return;
            }
            println!("=== Conquest Strategy Lab ===\n");
            println!(
                "Seed {}, {} players, lineup {}\n",
                seed, players, lineup
            );
            println!("Winner: {} after {} rounds\n", result.winner, result.rounds_played);
            println!(
                "{:<4} {:<12} {:>12} {:>14} {:>8}",
                "", "Strategy", "Territories", "Reinforcement", "Fitness"
            );
            for pr in &result.player_results {
                println!(
                    "{:<4} {:<12} {:>12} {:>14} {:>8}",
                    pr.player.to_string(),
                    pr.strategy_name,
                    pr.territories,
                    pr.reinforcement_rate,
                    pr.fitness,
                );
            }
        }
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn cmd_tournament(num_games: u32, players: usize, db_path: &str, lineup: &str) {
    println!(
        "=== Tournament: {} games, {} players, lineup {} ===\n",
        num_games, players, lineup
    );

    let db = Database::new(db_path);
    let mut game = create_game(players, 0);
    let mut errors = 0u32;
    let mut wins = vec![0u32; players];

    for g in 0..num_games {
        let seed = 42u64 + g as u64 * 1000;
        let mut strategies = make_strategies(seed, players, lineup);
        match run_game(&mut game, &mut strategies, seed) {
            Ok(result) => {
                wins[result.winner.index()] += 1;

                let strategy_ids: Vec<i64> = result
                    .player_results
                    .iter()
                    .map(|pr| db.register_strategy(&pr.strategy_name))
                    .collect();
                db.store_game(&result, &strategy_ids);

                let winner_id = strategy_ids[result.winner.index()];
                let loser_ids: Vec<i64> = strategy_ids
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != result.winner.index())
                    .map(|(_, &id)| id)
                    .collect();
                db.update_elo(winner_id, &loser_ids, 32.0);

                if (g + 1) % 10 == 0 || g + 1 == num_games {
                    print!("\rGame {}/{}...", g + 1, num_games);
                }
            }
            Err(e) => {
                errors += 1;
                eprintln!("Game {}: ERROR -- {}", g + 1, e);
            }
        }
    }

    println!("\n\n--- Summary ({} games, {} errors) ---", num_games, errors);
    for (seat, w) in wins.iter().enumerate() {
        let pct = if num_games > 0 {
            *w as f64 / num_games as f64 * 100.0
        } else {
            0.0
        };
        println!("  P{}: {:>4} wins ({:.1}%)", seat, w, pct);
    }
    println!("\nResults saved to: {}", db_path);
    println!("Total games in DB: {}", db.game_count());
}

fn cmd_evolve(
    generations: usize,
    population: usize,
    games_per_eval: usize,
    players: usize,
    seed: u64,
    out: Option<String>,
) {
    let config = EvolutionConfig {
        generations,
        population_size: population,
        games_per_eval,
        players_per_game: players,
        base_seed: seed,
        ..EvolutionConfig::default()
    };
    println!(
        "=== Evolving weights: {} generations, population {} ===\n",
        generations, population
    );

    let outcome = evolve(&config);
    println!("Best fitness: {:.2}", outcome.best_fitness);
    println!("Best genes:   {:?}", outcome.best.genes());

    if let Some(path) = out {
        match serde_json::to_string_pretty(&outcome.best) {
            Ok(text) => match std::fs::write(&path, text) {
                Ok(()) => println!("Weights written to {}", path),
                Err(e) => eprintln!("Failed to write {}: {}", path, e),
            },
            Err(e) => eprintln!("Serialization error: {}", e),
        }
    }
}

fn cmd_leaderboard(db_path: &str) {
    let db = Database::new(db_path);
    let board = db.leaderboard();
    if board.is_empty() {
        println!("No strategies found. Run some tournaments first.");
        return;
    }
    println!("=== Leaderboard ===\n");
    println!("{:<20} {:>8} {:>8} {:>8}", "Strategy", "ELO", "Games", "Wins");
    println!("{}", "-".repeat(48));
    for (name, elo, games, wins_count) in &board {
        println!("{:<20} {:>8.1} {:>8} {:>8}", name, elo, games, wins_count);
    }
}

fn make_strategies(seed: u64, players: usize, lineup: &str) -> Vec<Box<dyn Strategy>> {
    (0..players)
        .map(|i| {
            let agent_seed = seed.wrapping_add(i as u64 * 7919);
            let strategy: Box<dyn Strategy> = match lineup {
                "aggressive" => Box::new(AggressiveStrategy::with_weights(
                    agent_seed,
                    AggressiveWeights::default(),
                )),
                "tall" => Box::new(TallStrategy::new(agent_seed)),
                "mixed" => match i % 3 {
                    0 => Box::new(AggressiveStrategy::new(agent_seed)),
                    1 => Box::new(TallStrategy::new(agent_seed)),
                    _ => Box::new(RandomStrategy::new(agent_seed)),
                },
                _ => Box::new(RandomStrategy::new(agent_seed)),
            };
            strategy
        })
        .collect()
}
