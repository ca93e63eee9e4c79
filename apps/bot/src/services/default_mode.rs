//! Default-mode command handling: one shared guess history.

use time::Date;
use tracing::info;

use crate::domain::date_label::GameCalendar;
use crate::domain::guess::GuessResult;
use crate::domain::render::ProximityRenderer;
use crate::domain::reply::Reply;
use crate::domain::request::PlayerId;
use crate::domain::RankScale;
use crate::error::AppError;
use crate::store::{GameStore, SharedGame};

pub struct DefaultModeHandler<'a> {
    store: &'a dyn GameStore,
    renderer: &'a ProximityRenderer<RankScale>,
    calendar: &'a GameCalendar,
}

impl<'a> DefaultModeHandler<'a> {
    pub fn new(
        store: &'a dyn GameStore,
        renderer: &'a ProximityRenderer<RankScale>,
        calendar: &'a GameCalendar,
    ) -> Self {
        Self {
            store,
            renderer,
            calendar,
        }
    }

    pub async fn handle(
        &self,
        game: &dyn SharedGame,
        player: &PlayerId,
        word: Option<&str>,
        just_started: bool,
        today: Date,
    ) -> Result<Reply, AppError> {
        // The store flips the finished flag; this handler only reacts.
        // Leaving clears the player's pointer so their next command
        // starts a fresh session.
        if game.finished() {
            info!(player = %player, game_id = game.game_id(), "session already finished, releasing player");
            self.store.leave_current(player);
            return Ok(Reply::private(finished_notice(game.game_id())));
        }

        if let Some(word) = word {
            if let Some(prior) = game.existing_guess(word) {
                if let Some(error) = prior.error {
                    return Ok(Reply::private(error));
                }
                return Ok(Reply::private(already_guessed(word, prior.display_rank())));
            }

            if let Some(result) = game.try_word(player, word).await? {
                if let Some(error) = &result.error {
                    return Ok(Reply::private(error.clone()));
                }
                let closest = game.closest_guesses();
                let label = self.calendar.label(game.game_id(), today);
                let text = guess_response(
                    self.renderer,
                    game.game_id(),
                    &label,
                    game.guess_count(),
                    &result,
                    &closest,
                );
                return Ok(Reply::private(text));
            }
        }

        let label = self.calendar.label(game.game_id(), today);
        Ok(Reply::private(status_text(
            game.game_id(),
            &label,
            game.guess_count(),
            just_started,
        )))
    }
}

fn finished_notice(game_id: i64) -> String {
    format!("Game #{game_id} is already finished. Guess a word to start a new game.")
}

fn already_guessed(word: &str, rank: u32) -> String {
    format!("The word {word} was already tried. ({rank})")
}

fn status_text(game_id: i64, label: &str, guess_count: u32, just_started: bool) -> String {
    if just_started {
        format!("Started game #{game_id}{label}. Guess a word to play.")
    } else {
        format!("Game #{game_id}{label} in progress. Guesses: {guess_count}")
    }
}

fn win_text(game_id: i64, guess_count: u32) -> String {
    format!("Congratulations!\n\nYou found word #{game_id} in {guess_count} guesses.\n\n\n")
}

fn guess_response(
    renderer: &ProximityRenderer<RankScale>,
    game_id: i64,
    label: &str,
    guess_count: u32,
    result: &GuessResult,
    closest: &[GuessResult],
) -> String {
    let mut text = String::new();
    if result.distance == Some(0) {
        text.push_str(&win_text(game_id, guess_count));
    }
    text.push_str(&format!("Game: #{game_id}{label} Guesses: {guess_count}\n\n"));
    text.push_str(&renderer.block(result, closest));
    text
}
