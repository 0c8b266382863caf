//! Twitter/X API integration module.
//!
//! This module contains the tweet model, the predicates the bot filters with,
//! and the OAuth 1.0a signed client for searching and retweeting.

mod api;
mod models;
mod parsing;
mod search;
mod tweets;

// Re-export public API
pub use api::{sanitize_for_logging, TwitterApi, TwitterClient};
pub use models::{Entities, Tweet, UrlEntity, User};
pub use parsing::{get_original_tweet, tweet_has_link};
pub use search::find_matching_tweets;
