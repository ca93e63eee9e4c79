//! Top-level command entry point.

use std::sync::Arc;

use time::Date;
use tracing::info;

use crate::domain::date_label::GameCalendar;
use crate::domain::render::ProximityRenderer;
use crate::domain::reply::Reply;
use crate::domain::request::{GameMode, GameRequest, RawCommand};
use crate::domain::RankScale;
use crate::error::AppError;
use crate::services::competitive_mode::CompetitiveModeHandler;
use crate::services::default_mode::DefaultModeHandler;
use crate::services::dispatch::SessionDispatcher;
use crate::store::{GameStore, Session};

/// Parses raw command inputs, resolves the session and dispatches to
/// the matching mode handler. Every user-facing failure ends in a
/// private reply; only contract violations surface as errors.
pub struct GameOrchestrator {
    store: Arc<dyn GameStore>,
    renderer: ProximityRenderer<RankScale>,
    calendar: GameCalendar,
}

impl GameOrchestrator {
    pub fn new(store: Arc<dyn GameStore>, calendar: GameCalendar) -> Self {
        Self {
            store,
            renderer: ProximityRenderer::new(RankScale),
            calendar,
        }
    }

    pub async fn handle(&self, raw: RawCommand) -> Result<Reply, AppError> {
        let today = self.calendar.today();
        self.handle_at(raw, today).await
    }

    /// Handle a command against an explicit "today", so game-date
    /// resolution is deterministic under test.
    pub async fn handle_at(&self, raw: RawCommand, today: Date) -> Result<Reply, AppError> {
        let request = match GameRequest::from_raw(raw) {
            Ok(request) => request,
            Err(AppError::UnknownMode { input }) => {
                return Ok(Reply::private(unknown_mode_text(&input)));
            }
            Err(other) => return Err(other),
        };

        info!(
            player = %request.player_id,
            mode = ?request.mode,
            has_word = request.word.is_some(),
            "handling game command"
        );

        let dispatcher = SessionDispatcher::new(self.store.as_ref());
        let resolved = dispatcher
            .resolve(
                &request.player_id,
                request.mode,
                request.game_id,
                request.date.as_deref(),
                today,
            )
            .await;
        let (session, just_started) = match resolved {
            Ok(resolved) => resolved,
            Err(AppError::InvalidDate { input }) => {
                return Ok(Reply::private(invalid_date_text(&input)));
            }
            Err(other) => return Err(other),
        };

        let word = request.word.as_deref();
        match (request.mode, &session) {
            (GameMode::Default, Session::Shared(game)) => {
                DefaultModeHandler::new(self.store.as_ref(), &self.renderer, &self.calendar)
                    .handle(game.as_ref(), &request.player_id, word, just_started, today)
                    .await
            }
            (GameMode::Competitive, Session::Competitive(game)) => {
                CompetitiveModeHandler::new(&self.renderer, &self.calendar)
                    .handle(game.as_ref(), &request.player_id, word, just_started, today)
                    .await
            }
            (mode, session) => Err(AppError::contract(format!(
                "store returned a {} session for {:?} mode",
                session.variant_name(),
                mode
            ))),
        }
    }
}

fn invalid_date_text(input: &str) -> String {
    format!("Invalid date \"{input}\". Use the YYYY-MM-DD format (e.g. 2025-07-09).")
}

fn unknown_mode_text(input: &str) -> String {
    format!("Unknown mode \"{input}\". Available modes: default, competitive.")
}
