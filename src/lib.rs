//! # Watchlist Bot Library
//!
//! A polling Twitter/X bot. It periodically searches for tweets matching a
//! fixed list of queries, skips tweets that contain links or whose author has
//! already been handled, retweets the rest, and records each author in a
//! local SQLite file so nobody is retweeted twice.
//!
//! ## Configuration
//!
//! - `twitter_conf.json` (or `TWITTER_CONF`): OAuth 1.0a credentials
//! - `users.db` (or `USERS_DB`): processed-users store
//! - `RETWEET_DELAY_SECS`, `SEARCH_INTERVAL_SECS`: pauses (default 5 and 300)
//! - `PERSIST_ORDER`: `before` (default) or `after` the retweet
//! - `HTTP_TIMEOUT_SECS`: request timeout (default 30)

pub mod bot;
pub mod config;
pub mod db;
pub mod error;
pub mod oauth;
pub mod twitter;

// Re-export commonly used types and functions
pub use bot::{run_bot, run_iteration, IterationSummary};
pub use config::{get_config_path, get_users_db_path, BotSettings, PersistOrder, TwitterConfig};
pub use db::UserDb;
pub use error::{BotError, BotResult};
pub use twitter::{
    find_matching_tweets, get_original_tweet, tweet_has_link, Tweet, TwitterApi, TwitterClient,
};
