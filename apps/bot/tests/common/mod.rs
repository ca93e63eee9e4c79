#![allow(dead_code)]

use std::sync::Arc;

use bot::domain::date_label::GameCalendar;
use bot::domain::request::{PlayerId, RawCommand};
use bot::services::orchestrator::GameOrchestrator;
use bot::store::memory::InMemoryStore;
use bot_test_support::oracle::ScriptedOracle;
use time::macros::date;
use time::Date;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    bot_test_support::logging::init();
}

/// Fixed "today" so game-date resolution is deterministic.
pub const TODAY: Date = date!(2025 - 07 - 10);

pub const EPOCH: Date = date!(2022 - 02 - 23);

pub struct TestBot {
    pub orchestrator: GameOrchestrator,
    pub oracle: Arc<ScriptedOracle>,
    pub calendar: GameCalendar,
}

impl TestBot {
    pub fn todays_game_id(&self) -> i64 {
        self.calendar.game_id_for(TODAY)
    }
}

/// Orchestrator over a fresh in-memory store and a scripted oracle.
pub fn test_bot(pairs: &[(&str, u32)]) -> TestBot {
    let oracle = Arc::new(ScriptedOracle::new(pairs));
    let calendar = GameCalendar::new(EPOCH);
    let store = Arc::new(InMemoryStore::new(oracle.clone(), calendar.clone()));
    let orchestrator = GameOrchestrator::new(store, calendar.clone());
    TestBot {
        orchestrator,
        oracle,
        calendar,
    }
}

pub fn cmd(player: &str, word: Option<&str>) -> RawCommand {
    RawCommand {
        player_id: PlayerId::from(player),
        word: word.map(String::from),
        mode: None,
        game_id: None,
        date: None,
    }
}

pub fn competitive_cmd(player: &str, word: Option<&str>) -> RawCommand {
    RawCommand {
        mode: Some("competitive".into()),
        ..cmd(player, word)
    }
}
