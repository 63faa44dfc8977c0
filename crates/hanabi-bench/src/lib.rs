pub mod logging;
pub mod runner;
pub mod seed;
pub mod stats;
