pub mod config;
pub mod sizing;
