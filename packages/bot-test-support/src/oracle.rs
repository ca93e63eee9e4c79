//! Scripted proximity oracle for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bot::error::AppError;
use bot::store::oracle::ProximityOracle;

/// Oracle that answers from a fixed lemma-to-distance script and
/// counts how often it is consulted, so tests can assert that repeated
/// guesses never resubmit.
pub struct ScriptedOracle {
    ranks: HashMap<String, u32>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    pub fn new(pairs: &[(&str, u32)]) -> Self {
        Self {
            ranks: pairs
                .iter()
                .map(|(word, rank)| (word.to_string(), *rank))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of rank lookups performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProximityOracle for ScriptedOracle {
    async fn rank(&self, _game_id: i64, lemma: &str) -> Result<Option<u32>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.ranks.get(lemma).copied())
    }
}
