//! Tweet operations for Twitter API.
//!
//! This module contains the retweet call, the bot's only write against the API.

use log::{debug, info};

use crate::error::BotResult;
use crate::oauth::{build_oauth1_header, percent_encode};

use super::api::{make_authenticated_request, TwitterClient};

/// Retweets a tweet as the authenticated account using the v1.1 endpoint.
///
/// # Parameters
///
/// - `client`: The authenticated client
/// - `tweet_id`: The ID of the tweet to retweet
///
/// # Errors
///
/// Fails on network errors and any non-success status, including the API
/// refusing a tweet that was already retweeted.
pub(crate) async fn retweet(client: &TwitterClient, tweet_id: &str) -> BotResult<()> {
    let url = format!(
        "{}/statuses/retweet/{}.json",
        client.base_url,
        percent_encode(tweet_id)
    );
    debug!("Retweet URL: {}", url);

    let auth_header = build_oauth1_header(&client.config, "POST", &url, &[])?;
    let request_builder = client.http.post(&url).header("Authorization", auth_header);

    make_authenticated_request(request_builder, "retweet").await?;
    info!("Retweeted tweet {}", tweet_id);
    Ok(())
}
