//! Game-id to calendar-date mapping and date offset labels.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime};

use crate::error::AppError;

/// Wire format for explicit dates (`YYYY-MM-DD`).
pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Display format for date labels (`DD/MM/YYYY`).
const LABEL_DATE: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Parse an explicit `YYYY-MM-DD` date from a command.
pub fn parse_iso_date(input: &str) -> Result<Date, AppError> {
    Date::parse(input, ISO_DATE).map_err(|_| AppError::invalid_date(input))
}

/// Maps between puzzle ids and calendar dates. Game ids are assigned
/// monotonically, one per day since a fixed epoch.
#[derive(Debug, Clone)]
pub struct GameCalendar {
    epoch: Date,
}

impl GameCalendar {
    pub fn new(epoch: Date) -> Self {
        Self { epoch }
    }

    pub fn game_id_for(&self, date: Date) -> i64 {
        (date - self.epoch).whole_days()
    }

    pub fn date_for(&self, game_id: i64) -> Date {
        self.epoch + Duration::days(game_id)
    }

    pub fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }

    pub fn today_game_id(&self) -> i64 {
        self.game_id_for(self.today())
    }

    /// Human-readable date label for a game id relative to `today`.
    ///
    /// Today's game gets no label. Any other id renders as
    /// `" (DD/MM/YYYY)"`, deliberately identical for past and future
    /// ids; only the offset differs.
    pub fn label(&self, game_id: i64, today: Date) -> String {
        let diff = self.game_id_for(today) - game_id;
        if diff == 0 {
            return String::new();
        }
        let game_date = today - Duration::days(diff);
        game_date
            .format(LABEL_DATE)
            .map(|formatted| format!(" ({formatted})"))
            .unwrap_or_default()
    }
}
