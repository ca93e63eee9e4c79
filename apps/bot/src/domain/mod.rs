//! Domain layer: pure request, guess and rendering types.

pub mod date_label;
pub mod guess;
pub mod proximity;
pub mod render;
pub mod reply;
pub mod request;

#[cfg(test)]
mod tests_date_label;
#[cfg(test)]
mod tests_props_scale;
#[cfg(test)]
mod tests_render;

// Re-exports for ergonomics
pub use date_label::{parse_iso_date, GameCalendar};
pub use guess::{leaderboard_rank, GuessResult, LeaderboardEntry, PlayerCompletion};
pub use proximity::{BarColor, ProximityScale, RankScale};
pub use render::{ProximityRenderer, TOTAL_BAR_WIDTH};
pub use reply::{Reply, Visibility};
pub use request::{GameMode, GameRequest, GameSelector, PlayerId, RawCommand};
