pub mod driver;
pub mod strategy;

pub use driver::{DriverError, Visibility, run_game};
pub use strategy::{
    ClueAlgorithm, CluePolicy, Observation, RandomStrategy, SearchStrategy, Strategy,
};
