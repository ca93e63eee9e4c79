#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::date_label::GameCalendar;
pub use domain::reply::{Reply, Visibility};
pub use domain::request::{GameMode, GameRequest, GameSelector, PlayerId, RawCommand};
pub use error::AppError;
pub use services::orchestrator::GameOrchestrator;
pub use store::memory::InMemoryStore;
pub use store::oracle::{ProximityOracle, WordListOracle};
pub use store::{CompetitiveGame, GameStore, Session, SharedGame};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
