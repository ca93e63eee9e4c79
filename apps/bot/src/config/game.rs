use std::env;

use time::Date;

use crate::domain::date_label::{parse_iso_date, GameCalendar};
use crate::error::AppError;

/// Game #0 of the reference deployment.
const DEFAULT_EPOCH: &str = "2022-02-23";

/// Runtime game configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub epoch: Date,
}

impl GameConfig {
    /// Build the configuration from environment variables.
    ///
    /// `GAME_EPOCH_DATE` (YYYY-MM-DD) anchors game id 0; it defaults to
    /// the reference deployment's epoch.
    pub fn from_env() -> Result<Self, AppError> {
        let raw = env::var("GAME_EPOCH_DATE").unwrap_or_else(|_| DEFAULT_EPOCH.to_string());
        let epoch = parse_iso_date(&raw)
            .map_err(|_| AppError::config(format!("GAME_EPOCH_DATE is not a valid date: {raw}")))?;
        Ok(Self { epoch })
    }

    pub fn calendar(&self) -> GameCalendar {
        GameCalendar::new(self.epoch)
    }
}
