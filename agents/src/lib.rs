pub mod aggressive;
pub mod random;
pub mod tall;

pub use aggressive::{AggressiveStrategy, AggressiveWeights};
pub use random::RandomStrategy;
pub use tall::TallStrategy;
