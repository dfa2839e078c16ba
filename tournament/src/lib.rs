pub mod database;
pub mod evolution;
pub mod runner;

pub use database::Database;
pub use evolution::{evolve, EvolutionConfig, EvolutionOutcome};
pub use runner::{run_game, GameResult, PlayerResult};
