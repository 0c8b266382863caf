//! Error types for the watchlist bot.
//!
//! Every failure is fatal: errors propagate with `?` up to `main`, which logs
//! them and exits. Nothing in the bot retries or recovers.

use thiserror::Error;

/// Errors that can occur while running the bot.
#[derive(Error, Debug)]
pub enum BotError {
    /// Credentials file missing or malformed, or an invalid environment override
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API rejected our credentials
    #[error("Authentication failed for operation '{operation}' ({status})")]
    Auth { operation: String, status: u16 },

    /// Transport failure or a non-success response from the API
    #[error("Network error: {0}")]
    Network(String),

    /// SQLite failure in the users store
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        BotError::Network(e.to_string())
    }
}

/// Result type used throughout the crate
pub type BotResult<T> = Result<T, BotError>;
