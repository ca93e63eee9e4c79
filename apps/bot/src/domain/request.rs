//! Normalized command inputs: player identity, game mode and selector.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Serialize;
use time::Date;

use crate::error::AppError;

/// Opaque identifier of a requesting player, as assigned by the
/// transport (e.g. a chat user id). Never interpreted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Game mode requested by the player. Default is the shared session
/// where one guess history is common to all participants; Competitive
/// keeps an independent history per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Default,
    Competitive,
}

impl FromStr for GameMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(GameMode::Default),
            "competitive" => Ok(GameMode::Competitive),
            other => Err(AppError::unknown_mode(other)),
        }
    }
}

/// Which game instance a command targets. An explicit id always wins
/// over an explicit date; with neither, the command targets today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSelector {
    Today,
    ById(i64),
    ByDate(Date),
}

/// Raw command surface as delivered by the transport. Nothing here is
/// validated yet; [`GameRequest::from_raw`] normalizes it.
#[derive(Debug, Clone)]
pub struct RawCommand {
    pub player_id: PlayerId,
    pub word: Option<String>,
    pub mode: Option<String>,
    pub game_id: Option<i64>,
    pub date: Option<String>,
}

/// One normalized incoming command. Constructed per command and
/// discarded after the reply is produced.
#[derive(Debug, Clone)]
pub struct GameRequest {
    pub player_id: PlayerId,
    pub mode: GameMode,
    pub word: Option<String>,
    pub game_id: Option<i64>,
    pub date: Option<String>,
}

impl GameRequest {
    /// Normalize a raw command: parse the mode selector and drop empty
    /// words. The explicit date stays a string here; the dispatcher
    /// validates it before any session lookup.
    pub fn from_raw(raw: RawCommand) -> Result<Self, AppError> {
        let mode = match raw.mode.as_deref() {
            None => GameMode::default(),
            Some(s) => s.parse()?,
        };
        let word = raw
            .word
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());
        Ok(Self {
            player_id: raw.player_id,
            mode,
            word,
            game_id: raw.game_id,
            date: raw.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(word: Option<&str>, mode: Option<&str>) -> RawCommand {
        RawCommand {
            player_id: PlayerId::from("p1"),
            word: word.map(String::from),
            mode: mode.map(String::from),
            game_id: None,
            date: None,
        }
    }

    #[test]
    fn mode_defaults_to_default_when_absent() {
        let req = GameRequest::from_raw(raw(Some("casa"), None)).unwrap();
        assert_eq!(req.mode, GameMode::Default);
    }

    #[test]
    fn competitive_mode_parses() {
        let req = GameRequest::from_raw(raw(Some("casa"), Some("competitive"))).unwrap();
        assert_eq!(req.mode, GameMode::Competitive);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = GameRequest::from_raw(raw(Some("casa"), Some("ranked"))).unwrap_err();
        assert!(matches!(err, AppError::UnknownMode { input } if input == "ranked"));
    }

    #[test]
    fn blank_word_normalizes_to_none() {
        let req = GameRequest::from_raw(raw(Some("   "), None)).unwrap();
        assert_eq!(req.word, None);
    }
}
