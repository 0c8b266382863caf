//! OAuth authentication module for Twitter/X API integration.
//!
//! This module signs requests with OAuth 1.0a (HMAC-SHA1), the scheme used by
//! the v1.1 search and retweet endpoints with consumer key/secret and access
//! token/secret credentials.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use log::debug;
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

use crate::config::TwitterConfig;
use crate::error::{BotError, BotResult};

type HmacSha1 = Hmac<Sha1>;

/// Percent-encodes a string as required by OAuth 1.0a (RFC 3986 unreserved set).
pub fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Builds the Authorization header for an OAuth 1.0a signed request.
///
/// A fresh nonce and the current timestamp are generated on every call.
///
/// # Parameters
///
/// - `config`: The consumer and access token credentials
/// - `method`: The HTTP method (`GET`, `POST`)
/// - `url`: The base URL without a query string
/// - `params`: The request's query or form parameters, unencoded
///
/// # Returns
///
/// A header value of the form `OAuth oauth_consumer_key="...", ...`.
pub fn build_oauth1_header(
    config: &TwitterConfig,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
) -> BotResult<String> {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    let timestamp = chrono::Utc::now().timestamp().to_string();

    build_oauth1_header_with(config, method, url, params, &nonce, &timestamp)
}

/// Builds the OAuth 1.0a Authorization header with a caller-supplied nonce and timestamp.
pub fn build_oauth1_header_with(
    config: &TwitterConfig,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> BotResult<String> {
    let oauth_params = [
        ("oauth_consumer_key", config.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", config.access_token.as_str()),
        ("oauth_version", "1.0"),
    ];

    let mut all_params: Vec<(&str, &str)> = params.to_vec();
    all_params.extend_from_slice(&oauth_params);

    let base = signature_base_string(method, url, &all_params);
    debug!("OAuth signature base string: {} bytes", base.len());

    let signature = sign(
        &base,
        &config.consumer_secret,
        &config.access_token_secret,
    )?;

    let mut header_params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    header_params.push(("oauth_signature".to_string(), percent_encode(&signature)));
    header_params.sort();

    let fields: Vec<String> = header_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, v))
        .collect();

    Ok(format!("OAuth {}", fields.join(", ")))
}

/// Builds the signature base string: `METHOD&url&params`, with the parameters
/// percent-encoded, sorted by key then value, and joined with `&`.
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// Signs a base string with HMAC-SHA1 using `consumer_secret&token_secret` as key.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> BotResult<String> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| BotError::Config(format!("invalid signing key: {}", e)))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
