//! Predicates over a single tweet.
//!
//! Pure functions used by the bot loop to decide whether a search result
//! qualifies for a retweet.

use super::models::Tweet;

/// If a tweet is a retweet, returns the original tweet. Otherwise returns the tweet.
///
/// Only one level is followed: the platform already points `retweeted_status`
/// at the root original.
///
/// # Parameters
///
/// - `tweet`: The tweet to inspect
///
/// # Returns
///
/// A reference to the original tweet.
pub fn get_original_tweet(tweet: &Tweet) -> &Tweet {
    match &tweet.retweeted_status {
        Some(original) => original,
        None => tweet,
    }
}

/// Does a tweet contain at least one link?
///
/// A tweet whose entities carry no `urls` list counts as having none.
pub fn tweet_has_link(tweet: &Tweet) -> bool {
    !tweet.entities.urls.is_empty()
}
