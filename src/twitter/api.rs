//! Core Twitter API utilities.
//!
//! This module contains the `TwitterApi` seam used by the bot loop, the
//! reqwest-backed `TwitterClient`, and the low-level helper for sending
//! signed requests and classifying failures.

use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::Client;
use std::time::Duration;

use crate::config::TwitterConfig;
use crate::error::{BotError, BotResult};

use super::models::Tweet;

/// Base URL of the v1.1 REST API.
pub(crate) const API_BASE: &str = "https://api.twitter.com/1.1";

/// The operations the bot needs from the platform.
///
/// `TwitterClient` talks to the real API; tests substitute stubs.
#[async_trait]
pub trait TwitterApi: Send + Sync {
    /// Searches recent tweets matching `query`, returning one page of results
    /// in the order the API returned them.
    async fn search(&self, query: &str) -> BotResult<Vec<Tweet>>;

    /// Retweets the tweet with the given ID as the authenticated account.
    async fn retweet(&self, tweet_id: &str) -> BotResult<()>;
}

/// Authenticated client for the Twitter/X v1.1 API.
///
/// Constructed once at startup and held for the lifetime of the process.
pub struct TwitterClient {
    pub(crate) config: TwitterConfig,
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl TwitterClient {
    /// Creates a client signing every request with `config`.
    ///
    /// # Parameters
    ///
    /// - `config`: OAuth 1.0a credentials
    /// - `timeout`: Per-request timeout applied to every call
    pub fn new(config: TwitterConfig, timeout: Duration) -> BotResult<Self> {
        Self::with_base_url(config, timeout, API_BASE)
    }

    /// Creates a client against a different API root, e.g. a local test server.
    pub fn with_base_url(
        config: TwitterConfig,
        timeout: Duration,
        base_url: &str,
    ) -> BotResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        info!(
            "Twitter client for {} created with {:?} request timeout",
            base_url, timeout
        );
        Ok(Self {
            config,
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TwitterApi for TwitterClient {
    async fn search(&self, query: &str) -> BotResult<Vec<Tweet>> {
        super::search::search_tweets(self, query).await
    }

    async fn retweet(&self, tweet_id: &str) -> BotResult<()> {
        super::tweets::retweet(self, tweet_id).await
    }
}

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Sends a signed request and returns the response body on success.
///
/// # Parameters
///
/// - `request_builder`: A configured reqwest::RequestBuilder carrying the Authorization header
/// - `operation_name`: Human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok(String)`: The API response body on a 2xx status
/// - `Err(BotError::Auth)`: On 401 Unauthorized
/// - `Err(BotError::Network)`: On transport failure or any other status
pub(crate) async fn make_authenticated_request(
    request_builder: reqwest::RequestBuilder,
    operation_name: &str,
) -> BotResult<String> {
    debug!(
        "Making authenticated request for operation: {}",
        operation_name
    );

    let response = request_builder.send().await.map_err(|e| {
        error!("Request for operation '{}' failed: {}", operation_name, e);
        BotError::Network(format!("request for '{}' failed: {}", operation_name, e))
    })?;

    let status = response.status();
    debug!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    if status.is_success() {
        let response_text = response.text().await?;
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            response_text.len()
        );
        return Ok(response_text);
    }

    let error_text = response.text().await.unwrap_or_default();
    debug!(
        "Error response for '{}': {}",
        operation_name,
        sanitize_for_logging(&error_text, 200)
    );

    if status == reqwest::StatusCode::UNAUTHORIZED {
        error!(
            "Received 401 Unauthorized for operation '{}' - check the credentials file",
            operation_name
        );
        return Err(BotError::Auth {
            operation: operation_name.to_string(),
            status: status.as_u16(),
        });
    }

    warn!("Operation '{}' failed - Status: {}", operation_name, status);
    Err(BotError::Network(format!(
        "Twitter API error for operation '{}' ({}): {}",
        operation_name,
        status,
        sanitize_for_logging(&error_text, 200)
    )))
}
