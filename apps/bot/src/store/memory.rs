//! In-process session store.
//!
//! One instance owns every live game session plus the per-player
//! active-session pointers. Mutation goes through `parking_lot`
//! mutexes; per-player command serialization is the transport's
//! responsibility.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use time::Date;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::domain::date_label::GameCalendar;
use crate::domain::guess::{GuessResult, LeaderboardEntry, PlayerCompletion};
use crate::domain::request::{GameMode, GameSelector, PlayerId};
use crate::error::AppError;
use crate::store::oracle::ProximityOracle;
use crate::store::{CompetitiveGame, GameStore, Session, SharedGame};

/// Dictionary-normalized form of a submitted word, used as the
/// de-duplication key: NFC, trimmed, lowercased.
pub fn normalize_lemma(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}

fn rejected_word_error(word: &str) -> String {
    format!("The word \"{word}\" is not in the word list.")
}

/// Sort key that keeps valid guesses ascending by distance and sinks
/// errored entries to the end.
fn guess_sort_key(guess: &GuessResult) -> u32 {
    guess.distance.unwrap_or(u32::MAX)
}

/// In-memory [`GameStore`].
pub struct InMemoryStore {
    oracle: Arc<dyn ProximityOracle>,
    calendar: GameCalendar,
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    shared: HashMap<i64, Arc<SharedSession>>,
    competitive: HashMap<i64, Arc<CompetitiveSession>>,
    active: HashMap<PlayerId, Session>,
}

impl InMemoryStore {
    pub fn new(oracle: Arc<dyn ProximityOracle>, calendar: GameCalendar) -> Self {
        Self {
            oracle,
            calendar,
            inner: Mutex::new(StoreInner::default()),
        }
    }
}

#[async_trait]
impl GameStore for InMemoryStore {
    async fn current_or_create(
        &self,
        player: &PlayerId,
        mode: GameMode,
        selector: &GameSelector,
        today: Date,
    ) -> Result<(Session, bool), AppError> {
        let mut inner = self.inner.lock();

        // Without an explicit selector a player keeps playing whatever
        // they were playing, even an older day's game.
        if matches!(selector, GameSelector::Today) {
            if let Some(active) = inner.active.get(player) {
                if active.mode() == mode {
                    return Ok((active.clone(), false));
                }
            }
        }

        let game_id = match selector {
            GameSelector::Today => self.calendar.game_id_for(today),
            GameSelector::ById(id) => *id,
            GameSelector::ByDate(date) => self.calendar.game_id_for(*date),
        };

        let (session, created) = match mode {
            GameMode::Default => match inner.shared.get(&game_id) {
                Some(existing) if !existing.finished() => {
                    (Session::Shared(existing.clone()), false)
                }
                // A finished shared session stays reachable through the
                // pointers of players who have not seen the finale yet;
                // everyone else gets a fresh instance.
                _ => {
                    let session = Arc::new(SharedSession::new(game_id, self.oracle.clone()));
                    inner.shared.insert(game_id, session.clone());
                    (Session::Shared(session), true)
                }
            },
            GameMode::Competitive => match inner.competitive.get(&game_id) {
                Some(existing) => (Session::Competitive(existing.clone()), false),
                None => {
                    let session = Arc::new(CompetitiveSession::new(game_id, self.oracle.clone()));
                    inner.competitive.insert(game_id, session.clone());
                    (Session::Competitive(session), true)
                }
            },
        };

        if created {
            debug!(player = %player, game_id, ?mode, "created game session");
        }
        inner.active.insert(player.clone(), session.clone());
        Ok((session, created))
    }

    fn leave_current(&self, player: &PlayerId) {
        debug!(player = %player, "clearing active session pointer");
        self.inner.lock().active.remove(player);
    }
}

/// Shared guess history for a default-mode game.
pub struct SharedSession {
    game_id: i64,
    oracle: Arc<dyn ProximityOracle>,
    state: Mutex<SharedState>,
}

#[derive(Default)]
struct SharedState {
    guesses: Vec<GuessResult>,
    finished: bool,
}

impl SharedSession {
    fn new(game_id: i64, oracle: Arc<dyn ProximityOracle>) -> Self {
        Self {
            game_id,
            oracle,
            state: Mutex::new(SharedState::default()),
        }
    }
}

#[async_trait]
impl SharedGame for SharedSession {
    fn game_id(&self) -> i64 {
        self.game_id
    }

    fn finished(&self) -> bool {
        self.state.lock().finished
    }

    fn guess_count(&self) -> u32 {
        self.state.lock().guesses.iter().filter(|g| !g.is_error()).count() as u32
    }

    fn existing_guess(&self, word: &str) -> Option<GuessResult> {
        let lemma = normalize_lemma(word);
        self.state
            .lock()
            .guesses
            .iter()
            .find(|g| g.lemma == lemma)
            .cloned()
    }

    async fn try_word(
        &self,
        player: &PlayerId,
        word: &str,
    ) -> Result<Option<GuessResult>, AppError> {
        let lemma = normalize_lemma(word);
        if lemma.is_empty() {
            return Ok(None);
        }
        if let Some(existing) = self.existing_guess(word) {
            return Ok(Some(existing));
        }

        let ranked = self.oracle.rank(self.game_id, &lemma).await?;
        let result = build_result(word, lemma, ranked);

        let mut state = self.state.lock();
        // The oracle call ran unlocked; a concurrent submission of the
        // same lemma wins.
        if let Some(existing) = state.guesses.iter().find(|g| g.lemma == result.lemma) {
            return Ok(Some(existing.clone()));
        }
        if result.distance == Some(0) {
            state.finished = true;
        }
        debug!(player = %player, game_id = self.game_id, lemma = %result.lemma, distance = ?result.distance, "recorded shared guess");
        state.guesses.push(result.clone());
        state.guesses.sort_by_key(guess_sort_key);
        Ok(Some(result))
    }

    fn closest_guesses(&self) -> Vec<GuessResult> {
        self.state
            .lock()
            .guesses
            .iter()
            .filter(|g| !g.is_error())
            .cloned()
            .collect()
    }
}

/// Per-player guess histories and completions for a competitive game.
pub struct CompetitiveSession {
    game_id: i64,
    oracle: Arc<dyn ProximityOracle>,
    state: Mutex<CompetitiveState>,
}

#[derive(Default)]
struct CompetitiveState {
    histories: HashMap<PlayerId, Vec<GuessResult>>,
    // Arrival order; the leaderboard's tie-break.
    completions: Vec<LeaderboardEntry>,
}

impl CompetitiveSession {
    fn new(game_id: i64, oracle: Arc<dyn ProximityOracle>) -> Self {
        Self {
            game_id,
            oracle,
            state: Mutex::new(CompetitiveState::default()),
        }
    }
}

#[async_trait]
impl CompetitiveGame for CompetitiveSession {
    fn game_id(&self) -> i64 {
        self.game_id
    }

    fn has_completed(&self, player: &PlayerId) -> bool {
        self.state
            .lock()
            .completions
            .iter()
            .any(|entry| &entry.player_id == player)
    }

    fn completion(&self, player: &PlayerId) -> Option<PlayerCompletion> {
        self.state
            .lock()
            .completions
            .iter()
            .find(|entry| &entry.player_id == player)
            .map(|entry| PlayerCompletion {
                guess_count: entry.guess_count,
            })
    }

    fn guess_count(&self, player: &PlayerId) -> u32 {
        self.state
            .lock()
            .histories
            .get(player)
            .map(|history| history.iter().filter(|g| !g.is_error()).count() as u32)
            .unwrap_or(0)
    }

    fn existing_guess(&self, player: &PlayerId, word: &str) -> Option<GuessResult> {
        let lemma = normalize_lemma(word);
        self.state
            .lock()
            .histories
            .get(player)
            .and_then(|history| history.iter().find(|g| g.lemma == lemma))
            .cloned()
    }

    async fn try_word(
        &self,
        player: &PlayerId,
        word: &str,
    ) -> Result<Option<GuessResult>, AppError> {
        let lemma = normalize_lemma(word);
        if lemma.is_empty() {
            return Ok(None);
        }
        if let Some(existing) = self.existing_guess(player, word) {
            return Ok(Some(existing));
        }

        let ranked = self.oracle.rank(self.game_id, &lemma).await?;
        let result = build_result(word, lemma, ranked);

        let mut state = self.state.lock();
        let history = state.histories.entry(player.clone()).or_default();
        if let Some(existing) = history.iter().find(|g| g.lemma == result.lemma) {
            return Ok(Some(existing.clone()));
        }
        history.push(result.clone());
        history.sort_by_key(guess_sort_key);
        if result.distance == Some(0) {
            let guess_count = history.iter().filter(|g| !g.is_error()).count() as u32;
            debug!(player = %player, game_id = self.game_id, guess_count, "player completed competitive game");
            state.completions.push(LeaderboardEntry {
                player_id: player.clone(),
                guess_count,
            });
        }
        Ok(Some(result))
    }

    fn closest_guesses(&self, player: &PlayerId) -> Vec<GuessResult> {
        self.state
            .lock()
            .histories
            .get(player)
            .map(|history| history.iter().filter(|g| !g.is_error()).cloned().collect())
            .unwrap_or_default()
    }

    fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut board = self.state.lock().completions.clone();
        // Stable sort keeps arrival order between equal counts.
        board.sort_by_key(|entry| entry.guess_count);
        board
    }
}

fn build_result(word: &str, lemma: String, ranked: Option<u32>) -> GuessResult {
    let word = word.trim().to_string();
    match ranked {
        Some(distance) => GuessResult {
            word,
            lemma,
            distance: Some(distance),
            error: None,
        },
        None => GuessResult {
            error: Some(rejected_word_error(&word)),
            word,
            lemma,
            distance: None,
        },
    }
}
