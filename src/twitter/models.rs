//! Tweet and user records as returned by the v1.1 API.
//!
//! Only the fields the bot inspects are modelled; everything else in the JSON
//! payload is ignored on deserialization.

use serde::Deserialize;

/// A single tweet (status).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tweet {
    /// The tweet ID as a string
    pub id_str: String,
    /// Tweet text (`text`, or `full_text` in extended mode)
    #[serde(default, alias = "full_text")]
    pub text: String,
    /// The author
    pub user: User,
    /// Entities parsed out of the text
    #[serde(default)]
    pub entities: Entities,
    /// The original tweet, present when this tweet is a retweet
    #[serde(default)]
    pub retweeted_status: Option<Box<Tweet>>,
}

/// Tweet author.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub screen_name: String,
}

/// Entities embedded in a tweet. Only URLs matter here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub urls: Vec<UrlEntity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlEntity {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expanded_url: Option<String>,
}

/// Body of a `search/tweets.json` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Tweet>,
}
