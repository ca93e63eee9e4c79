//! Session store seam.
//!
//! The orchestration layer only ever talks to games through the traits
//! in this module. [`memory`] ships the in-process implementation used
//! by the binary and the integration tests; a persistent store would
//! implement the same traits.

pub mod memory;
pub mod oracle;

use std::sync::Arc;

use async_trait::async_trait;
use time::Date;

use crate::domain::guess::{GuessResult, LeaderboardEntry, PlayerCompletion};
use crate::domain::request::{GameMode, GameSelector, PlayerId};
use crate::error::AppError;

/// A default-mode game: one guess history shared by every participant,
/// finished for everyone once any player hits distance 0.
#[async_trait]
pub trait SharedGame: Send + Sync {
    fn game_id(&self) -> i64;

    fn finished(&self) -> bool;

    /// Number of valid guesses recorded so far.
    fn guess_count(&self) -> u32;

    /// Stored result for a previously submitted word, if any. Lookup is
    /// lemma-normalized; errored submissions are found too so they can
    /// be replayed without resubmission.
    fn existing_guess(&self, word: &str) -> Option<GuessResult>;

    /// Submit a word. Returns `Ok(None)` when the input normalizes to
    /// nothing (no-op); a repeated lemma returns the stored result
    /// unchanged without consulting the oracle again.
    async fn try_word(&self, player: &PlayerId, word: &str)
        -> Result<Option<GuessResult>, AppError>;

    /// All valid guesses, sorted ascending by distance.
    fn closest_guesses(&self) -> Vec<GuessResult>;
}

/// A competitive game: independent per-player histories, completion
/// tracked per player, the session itself never finishes.
#[async_trait]
pub trait CompetitiveGame: Send + Sync {
    fn game_id(&self) -> i64;

    fn has_completed(&self, player: &PlayerId) -> bool;

    fn completion(&self, player: &PlayerId) -> Option<PlayerCompletion>;

    fn guess_count(&self, player: &PlayerId) -> u32;

    fn existing_guess(&self, player: &PlayerId, word: &str) -> Option<GuessResult>;

    async fn try_word(&self, player: &PlayerId, word: &str)
        -> Result<Option<GuessResult>, AppError>;

    fn closest_guesses(&self, player: &PlayerId) -> Vec<GuessResult>;

    /// Completions ordered ascending by guess count, ties in arrival
    /// order.
    fn leaderboard(&self) -> Vec<LeaderboardEntry>;
}

/// Tagged session variant handed out by the store. Handlers dispatch on
/// the mode carried in the request, never on instance identity.
#[derive(Clone)]
pub enum Session {
    Shared(Arc<dyn SharedGame>),
    Competitive(Arc<dyn CompetitiveGame>),
}

impl Session {
    pub fn game_id(&self) -> i64 {
        match self {
            Session::Shared(game) => game.game_id(),
            Session::Competitive(game) => game.game_id(),
        }
    }

    pub fn mode(&self) -> GameMode {
        match self {
            Session::Shared(_) => GameMode::Default,
            Session::Competitive(_) => GameMode::Competitive,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Session::Shared(_) => "shared",
            Session::Competitive(_) => "competitive",
        }
    }
}

/// Creates and retrieves game sessions per player, mode and day.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Resolve the session a command targets, creating it when absent.
    /// `today` anchors the [`GameSelector::Today`] resolution so the
    /// caller owns the clock. The boolean reports whether the session
    /// was newly created.
    async fn current_or_create(
        &self,
        player: &PlayerId,
        mode: GameMode,
        selector: &GameSelector,
        today: Date,
    ) -> Result<(Session, bool), AppError>;

    /// Clear the player's active-session pointer so their next command
    /// resolves a fresh session.
    fn leave_current(&self, player: &PlayerId);
}
