//! Semantic-distance oracle seam.

use async_trait::async_trait;

use crate::error::AppError;

/// Ranks a lemma's semantic proximity to a game's secret target.
///
/// `Ok(Some(0))` means an exact match; `Ok(None)` means the word is not
/// in the oracle's vocabulary. How the ranking is computed is entirely
/// outside this crate.
#[async_trait]
pub trait ProximityOracle: Send + Sync {
    async fn rank(&self, game_id: i64, lemma: &str) -> Result<Option<u32>, AppError>;
}

/// Demo oracle backed by a fixed ordered word list.
///
/// The list is read as a closeness ranking; the day's secret rotates
/// through the list by game id, so consecutive days have different
/// targets without any external data.
pub struct WordListOracle {
    words: Vec<String>,
}

impl WordListOracle {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Small built-in vocabulary for the interactive binary.
    pub fn demo() -> Self {
        let words = [
            "house", "home", "apartment", "building", "residence", "cottage", "cabin", "roof",
            "door", "window", "wall", "floor", "kitchen", "bedroom", "garage", "garden", "yard",
            "fence", "street", "neighborhood", "city", "village", "tent", "castle", "tower",
            "bridge", "tunnel", "road", "forest", "mountain",
        ];
        Self::new(words.iter().map(|w| w.to_string()).collect())
    }
}

#[async_trait]
impl ProximityOracle for WordListOracle {
    async fn rank(&self, game_id: i64, lemma: &str) -> Result<Option<u32>, AppError> {
        let len = self.words.len() as i64;
        let Some(position) = self.words.iter().position(|w| w == lemma) else {
            return Ok(None);
        };
        let target = game_id.rem_euclid(len);
        let distance = (position as i64 - target).rem_euclid(len);
        Ok(Some(distance as u32))
    }
}
