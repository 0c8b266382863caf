//! Configuration module for the watchlist bot.
//!
//! This module contains the Twitter/X credentials loaded from the JSON
//! credentials file, plus environment variable handling for paths and the
//! bot's timing settings.

use log::{debug, error, info, warn};
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{BotError, BotResult};

/// Default path of the credentials file.
pub const DEFAULT_CONFIG_PATH: &str = "twitter_conf.json";

/// Default path of the processed-users store.
pub const DEFAULT_USERS_DB_PATH: &str = "users.db";

/// Queries searched on every iteration, in order.
pub const DEFAULT_QUERIES: [&str; 2] = ["NSA watchlist", "CIA watchlist"];

const DEFAULT_RETWEET_DELAY_SECS: u64 = 5;
const DEFAULT_SEARCH_INTERVAL_SECS: u64 = 5 * 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// OAuth 1.0a credentials for the Twitter/X API.
///
/// Deserialized from the credentials file, which holds a JSON object with the
/// four string fields below.
#[derive(Debug, Clone, Deserialize)]
pub struct TwitterConfig {
    /// The application's consumer (API) key
    pub consumer_key: String,
    /// The application's consumer (API) secret
    pub consumer_secret: String,
    /// The bot account's access token
    pub access_token: String,
    /// The bot account's access token secret
    pub access_token_secret: String,
}

impl TwitterConfig {
    /// Loads credentials from a JSON file.
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the file exists and contains all four fields
    /// - `Err(BotError::Config)`: If the file is missing, unreadable or malformed,
    ///   or any field is empty
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use watchlist_bot::TwitterConfig;
    ///
    /// let config = TwitterConfig::from_file("twitter_conf.json").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> BotResult<Self> {
        let path = path.as_ref();
        info!("Loading Twitter credentials from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|e| {
            error!("Failed to read credentials file {}: {}", path.display(), e);
            BotError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_json(&raw).map_err(|e| {
            error!("Credentials file {} is invalid: {}", path.display(), e);
            e
        })?;

        info!("Twitter credentials loaded successfully");
        Ok(config)
    }

    /// Parses credentials from a JSON string.
    pub fn from_json(raw: &str) -> BotResult<Self> {
        let config: TwitterConfig = serde_json::from_str(raw)
            .map_err(|e| BotError::Config(format!("malformed credentials: {}", e)))?;

        for (field, value) in [
            ("consumer_key", &config.consumer_key),
            ("consumer_secret", &config.consumer_secret),
            ("access_token", &config.access_token),
            ("access_token_secret", &config.access_token_secret),
        ] {
            if value.is_empty() {
                return Err(BotError::Config(format!("{} cannot be empty", field)));
            }
            debug!("{} (masked): {}", field, mask_secret(value));
        }

        Ok(config)
    }
}

/// Masks a secret for logging, keeping at most the first and last 8 characters.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len > 16 {
        let prefix: String = chars[..8].iter().collect();
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        let prefix: String = chars[..len.min(8)].iter().collect();
        format!("{}...", prefix)
    }
}

/// Order of the two side effects performed for a qualifying tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistOrder {
    /// Record the author, then retweet. If the retweet fails the author stays
    /// recorded and is never retried.
    #[default]
    BeforeReaction,
    /// Retweet, then record the author. If the retweet fails nothing is
    /// recorded and the author qualifies again after a restart.
    AfterReaction,
}

impl FromStr for PersistOrder {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "before" => Ok(PersistOrder::BeforeReaction),
            "after" => Ok(PersistOrder::AfterReaction),
            other => Err(BotError::Config(format!(
                "PERSIST_ORDER must be 'before' or 'after', got '{}'",
                other
            ))),
        }
    }
}

/// Settings for the bot loop.
#[derive(Debug, Clone)]
pub struct BotSettings {
    /// Search queries, searched in order on every iteration
    pub queries: Vec<String>,
    /// Pause after each retweet
    pub retweet_delay: Duration,
    /// Pause after each full search iteration
    pub search_interval: Duration,
    /// Whether the author is recorded before or after the retweet
    pub persist_order: PersistOrder,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            queries: DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect(),
            retweet_delay: Duration::from_secs(DEFAULT_RETWEET_DELAY_SECS),
            search_interval: Duration::from_secs(DEFAULT_SEARCH_INTERVAL_SECS),
            persist_order: PersistOrder::default(),
        }
    }
}

impl BotSettings {
    /// Builds settings from the defaults, overridden by `RETWEET_DELAY_SECS`,
    /// `SEARCH_INTERVAL_SECS` and `PERSIST_ORDER` when set.
    pub fn from_env() -> BotResult<Self> {
        let settings = Self {
            retweet_delay: get_duration_secs("RETWEET_DELAY_SECS", DEFAULT_RETWEET_DELAY_SECS)?,
            search_interval: get_duration_secs(
                "SEARCH_INTERVAL_SECS",
                DEFAULT_SEARCH_INTERVAL_SECS,
            )?,
            persist_order: match env::var("PERSIST_ORDER") {
                Ok(value) => value.parse()?,
                Err(_) => PersistOrder::default(),
            },
            ..Self::default()
        };

        info!(
            "Bot settings: queries {:?}, retweet delay {:?}, search interval {:?}, persist order {:?}",
            settings.queries, settings.retweet_delay, settings.search_interval, settings.persist_order
        );
        Ok(settings)
    }
}

/// Gets the credentials file path from `TWITTER_CONF`, defaulting to `twitter_conf.json`.
pub fn get_config_path() -> String {
    env::var("TWITTER_CONF").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

/// Gets the users store path from `USERS_DB`, defaulting to `users.db`.
pub fn get_users_db_path() -> String {
    env::var("USERS_DB").unwrap_or_else(|_| DEFAULT_USERS_DB_PATH.to_string())
}

/// Gets the HTTP request timeout from `HTTP_TIMEOUT_SECS`, defaulting to 30 seconds.
pub fn get_http_timeout() -> BotResult<Duration> {
    get_duration_secs("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)
}

fn get_duration_secs(name: &str, default: u64) -> BotResult<Duration> {
    match env::var(name) {
        Ok(value) => {
            let secs = parse_secs(name, &value)?;
            info!("Found {} environment variable: {} seconds", name, secs);
            Ok(Duration::from_secs(secs))
        }
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

fn parse_secs(name: &str, value: &str) -> BotResult<u64> {
    value.trim().parse::<u64>().map_err(|e| {
        warn!("{} has invalid value '{}'", name, value);
        BotError::Config(format!("{} must be a whole number of seconds: {}", name, e))
    })
}
