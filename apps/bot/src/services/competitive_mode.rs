//! Competitive-mode command handling: per-player histories and a
//! cross-player completion ranking.

use time::Date;
use tracing::info;

use crate::domain::date_label::GameCalendar;
use crate::domain::guess::{leaderboard_rank, GuessResult};
use crate::domain::render::ProximityRenderer;
use crate::domain::reply::Reply;
use crate::domain::request::PlayerId;
use crate::domain::RankScale;
use crate::error::AppError;
use crate::store::CompetitiveGame;

pub struct CompetitiveModeHandler<'a> {
    renderer: &'a ProximityRenderer<RankScale>,
    calendar: &'a GameCalendar,
}

impl<'a> CompetitiveModeHandler<'a> {
    pub fn new(renderer: &'a ProximityRenderer<RankScale>, calendar: &'a GameCalendar) -> Self {
        Self { renderer, calendar }
    }

    // Competitive sessions never finish; completion is per player.
    pub async fn handle(
        &self,
        game: &dyn CompetitiveGame,
        player: &PlayerId,
        word: Option<&str>,
        just_started: bool,
        today: Date,
    ) -> Result<Reply, AppError> {
        if let Some(word) = word {
            if game.has_completed(player) {
                let guess_count = game
                    .completion(player)
                    .map(|completion| completion.guess_count)
                    .unwrap_or(0);
                return Ok(Reply::private(already_completed(guess_count)));
            }

            if let Some(prior) = game.existing_guess(player, word) {
                if let Some(error) = prior.error {
                    return Ok(Reply::private(error));
                }
                return Ok(Reply::private(already_tried(word, prior.display_rank())));
            }

            if let Some(result) = game.try_word(player, word).await? {
                if let Some(error) = &result.error {
                    return Ok(Reply::private(error.clone()));
                }
                let rank = if result.distance == Some(0) {
                    let rank = leaderboard_rank(&game.leaderboard(), player);
                    info!(player = %player, game_id = game.game_id(), ?rank, "player finished competitive game");
                    rank
                } else {
                    None
                };
                let closest = game.closest_guesses(player);
                let label = self.calendar.label(game.game_id(), today);
                let text = guess_response(
                    self.renderer,
                    game.game_id(),
                    &label,
                    game.guess_count(player),
                    rank,
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
            game.guess_count(player),
            just_started,
        )))
    }
}

fn already_completed(guess_count: u32) -> String {
    format!("You already found the word in {guess_count} guesses! Wait for the next game.")
}

fn already_tried(word: &str, rank: u32) -> String {
    format!("You already tried the word {word}. ({rank})")
}

fn status_text(game_id: i64, label: &str, guess_count: u32, just_started: bool) -> String {
    if just_started {
        format!("Started competitive game #{game_id}{label}. Guess a word to play.")
    } else {
        format!("Competitive game #{game_id}{label}. Your guesses: {guess_count}")
    }
}

fn win_text(game_id: i64, guess_count: u32, rank: Option<u32>) -> String {
    let mut text =
        format!("Congratulations!\n\nYou found word #{game_id} in {guess_count} guesses.\n\n\n");
    if let Some(rank) = rank {
        text.push_str(&format!("Your position: #{rank}\n\n"));
    }
    text
}

fn guess_response(
    renderer: &ProximityRenderer<RankScale>,
    game_id: i64,
    label: &str,
    guess_count: u32,
    rank: Option<u32>,
    result: &GuessResult,
    closest: &[GuessResult],
) -> String {
    let mut text = String::new();
    if result.distance == Some(0) {
        text.push_str(&win_text(game_id, guess_count, rank));
    }
    text.push_str(&format!(
        "Game: #{game_id}{label} Your guesses: {guess_count}\n\n"
    ));
    text.push_str(&renderer.block(result, closest));
    text
}
