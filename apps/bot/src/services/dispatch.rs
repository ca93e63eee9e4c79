//! Session resolution for incoming commands.

use time::Date;
use tracing::debug;

use crate::domain::date_label::parse_iso_date;
use crate::domain::request::{GameMode, GameSelector, PlayerId};
use crate::error::AppError;
use crate::store::{GameStore, Session};

/// Resolves the active game for a (player, mode, optional id/date)
/// tuple, creating it when absent.
pub struct SessionDispatcher<'a> {
    store: &'a dyn GameStore,
}

impl<'a> SessionDispatcher<'a> {
    pub fn new(store: &'a dyn GameStore) -> Self {
        Self { store }
    }

    /// Build the game selector from the command's explicit options. An
    /// explicit id takes precedence over an explicit date; a malformed
    /// date fails here, before any session lookup.
    pub fn selector(
        explicit_game_id: Option<i64>,
        explicit_date: Option<&str>,
    ) -> Result<GameSelector, AppError> {
        match (explicit_game_id, explicit_date) {
            (Some(id), _) => Ok(GameSelector::ById(id)),
            (None, Some(date)) => Ok(GameSelector::ByDate(parse_iso_date(date)?)),
            (None, None) => Ok(GameSelector::Today),
        }
    }

    /// Resolve (or create) the session the command targets. The boolean
    /// reports whether it was newly created.
    pub async fn resolve(
        &self,
        player: &PlayerId,
        mode: GameMode,
        explicit_game_id: Option<i64>,
        explicit_date: Option<&str>,
        today: Date,
    ) -> Result<(Session, bool), AppError> {
        let selector = Self::selector(explicit_game_id, explicit_date)?;
        let (session, created) = self
            .store
            .current_or_create(player, mode, &selector, today)
            .await?;
        debug!(
            player = %player,
            ?mode,
            game_id = session.game_id(),
            created,
            "resolved game session"
        );
        Ok((session, created))
    }
}
