use thiserror::Error;

/// Application error type for the game bot core.
///
/// Only genuinely exceptional conditions are errors here. Outcomes that
/// the player should simply read about (duplicate guesses, finished
/// games, rejected words) are rendered as replies by the mode handlers
/// and never travel through this type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed explicit date supplied with a command. Rejected before
    /// any session lookup happens.
    #[error("Invalid date: {input}")]
    InvalidDate { input: String },
    /// Mode selector string that is neither `default` nor `competitive`.
    #[error("Unknown game mode: {input}")]
    UnknownMode { input: String },
    /// The session store returned a session variant that does not match
    /// the requested mode. This is a programming defect, not user error.
    #[error("Session contract violation: {detail}")]
    Contract { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    pub fn unknown_mode(input: impl Into<String>) -> Self {
        Self::UnknownMode {
            input: input.into(),
        }
    }

    pub fn contract(detail: impl Into<String>) -> Self {
        Self::Contract {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
