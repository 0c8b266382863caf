//! Tweet search functionality for Twitter API.
//!
//! This module contains the v1.1 `search/tweets.json` call and
//! `find_matching_tweets`, which runs a list of queries in order.

use log::{debug, info};

use crate::error::{BotError, BotResult};
use crate::oauth::{build_oauth1_header, percent_encode};

use super::api::{make_authenticated_request, TwitterApi, TwitterClient};
use super::models::{SearchResponse, Tweet};

/// Searches for tweets that match any one of a set of query strings.
///
/// Runs one search per query, in order, and concatenates the results in query
/// order, then in the order the API returned them. A tweet matching two
/// queries appears twice.
///
/// # Parameters
///
/// - `queries`: The queries to search
/// - `api`: The API to search with
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: All matching tweets
/// - `Err(BotError)`: The first error raised by any search; no partial results
pub async fn find_matching_tweets<S, A>(queries: &[S], api: &A) -> BotResult<Vec<Tweet>>
where
    S: AsRef<str>,
    A: TwitterApi + ?Sized,
{
    let mut results = Vec::new();
    for query in queries {
        let query = query.as_ref();
        let tweets = api.search(query).await?;
        info!("Query '{}' returned {} tweets", query, tweets.len());
        results.extend(tweets);
    }
    Ok(results)
}

/// Runs a single search against the v1.1 search endpoint.
///
/// Returns the first page of results only, at the API's default page size.
pub(crate) async fn search_tweets(client: &TwitterClient, query: &str) -> BotResult<Vec<Tweet>> {
    let base_url = format!("{}/search/tweets.json", client.base_url);
    let url = format!("{}?q={}", base_url, percent_encode(query));
    debug!("Search URL: {}", url);

    let auth_header = build_oauth1_header(&client.config, "GET", &base_url, &[("q", query)])?;
    debug!("Request headers: Authorization: OAuth [REDACTED]");

    let request_builder = client.http.get(&url).header("Authorization", auth_header);
    let response_text = make_authenticated_request(request_builder, "search_tweets").await?;

    let response: SearchResponse = serde_json::from_str(&response_text).map_err(|e| {
        BotError::Network(format!("unexpected search response format: {}", e))
    })?;
    Ok(response.statuses)
}
