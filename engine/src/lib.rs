pub mod types;
pub mod map;
pub mod territory;
pub mod cards;
pub mod player;
pub mod connectivity;
pub mod strategy;
pub mod engine;
pub mod fitness;
pub mod setup;


pub use engine::{Game, GameOutcome};
pub use map::ALL_TERRITORIES;
pub use strategy::{BoardView, Invasion, Maneuver, Strategy};
pub use types::*;
