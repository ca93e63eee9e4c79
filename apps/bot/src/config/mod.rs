//! Environment-driven configuration.

pub mod game;

pub use game::GameConfig;
