//! Proximity bar rendering.

use crate::domain::guess::GuessResult;
use crate::domain::proximity::{ProximityScale, ANSI_RESET};

/// Total width of a proximity bar in character cells.
pub const TOTAL_BAR_WIDTH: usize = 30;

/// Renders guesses as color-coded proximity bars.
pub struct ProximityRenderer<S: ProximityScale> {
    scale: S,
}

impl<S: ProximityScale> ProximityRenderer<S> {
    pub fn new(scale: S) -> Self {
        Self { scale }
    }

    /// Render one guess as `[<word><fill><dashes>] <rank>`.
    ///
    /// The word and fill share the bar's color; filled cells are
    /// `floor(percent * width / 100)` minus the cells the word itself
    /// occupies, never negative. Words longer than the bar simply leave
    /// no room for filler.
    pub fn row(&self, guess: &GuessResult) -> String {
        let distance = guess.distance.unwrap_or(0);
        let color = self.scale.color(distance);
        let percent = usize::from(self.scale.fill_percent(distance));
        let bar_width = percent * TOTAL_BAR_WIDTH / 100;
        let word_len = guess.word.chars().count();
        let fill = "█".repeat(bar_width.saturating_sub(word_len));
        let rest = "-".repeat(TOTAL_BAR_WIDTH.saturating_sub(bar_width.max(word_len)));
        format!(
            "[{}{}{}{}{}] {}",
            color.ansi_prefix(),
            guess.word,
            fill,
            ANSI_RESET,
            rest,
            guess.display_rank()
        )
    }

    /// Render the newest guess followed by the player's closest prior
    /// guesses, newest separated by a blank line. `closest` is expected
    /// pre-sorted ascending by distance; an entry repeating the newest
    /// lemma is skipped so the fresh guess is not shown twice.
    pub fn block(&self, newest: &GuessResult, closest: &[GuessResult]) -> String {
        let mut out = self.row(newest);
        out.push('\n');
        for guess in closest {
            if guess.lemma == newest.lemma {
                continue;
            }
            out.push('\n');
            out.push_str(&self.row(guess));
        }
        out
    }
}
