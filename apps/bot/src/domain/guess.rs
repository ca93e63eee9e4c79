//! Guess projections read from the session store at render time.

use serde::Serialize;

use crate::domain::request::PlayerId;

/// Outcome of submitting one word, as recorded by the session store.
///
/// `distance` is the semantic rank to the secret target (0 = exact
/// match); it is absent for guesses the oracle rejected, in which case
/// `error` carries the reason shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    pub word: String,
    pub lemma: String,
    pub distance: Option<u32>,
    pub error: Option<String>,
}

impl GuessResult {
    /// Rank shown to the player. Guesses are 1-indexed: an exact match
    /// (distance 0) displays as rank 1. An absent distance defaults to
    /// 0; callers check `error` first so this only matters for valid
    /// entries.
    pub fn display_rank(&self) -> u32 {
        self.distance.unwrap_or(0) + 1
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One row of a competitive game's completion ranking, ordered
/// ascending by guess count with ties kept in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub guess_count: u32,
}

/// A player's recorded completion of a competitive game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCompletion {
    pub guess_count: u32,
}

/// 1-indexed position of a player on an already-sorted leaderboard, or
/// `None` when the player has no entry.
pub fn leaderboard_rank(board: &[LeaderboardEntry], player: &PlayerId) -> Option<u32> {
    board
        .iter()
        .position(|entry| &entry.player_id == player)
        .map(|index| index as u32 + 1)
}
