//! The bot's periodic task.
//!
//! Each iteration searches every query, resolves retweets to their originals,
//! skips tweets with links or from authors already recorded, and retweets the
//! rest, recording each author. Pauses between retweets and between
//! iterations race a shutdown signal so the task can stop gracefully.

use log::{debug, info};
use std::time::Duration;
use tokio::sync::watch;

use crate::config::{BotSettings, PersistOrder};
use crate::db::UserDb;
use crate::error::BotResult;
use crate::twitter::{
    find_matching_tweets, get_original_tweet, sanitize_for_logging, tweet_has_link, Tweet,
    TwitterApi,
};

/// Counts from one search iteration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IterationSummary {
    /// Tweets returned across all queries
    pub found: usize,
    /// Tweets retweeted
    pub retweeted: usize,
    /// Tweets skipped because they contain a link
    pub skipped_links: usize,
    /// Tweets skipped because their author is already recorded
    pub skipped_known: usize,
    /// Whether shutdown was requested before the iteration finished
    pub interrupted: bool,
}

/// Runs one search iteration.
///
/// Errors from search, retweet or the store end the iteration immediately and
/// are returned unchanged.
pub async fn run_iteration<A>(
    api: &A,
    db: &UserDb,
    settings: &BotSettings,
    shutdown: &mut watch::Receiver<bool>,
) -> BotResult<IterationSummary>
where
    A: TwitterApi + ?Sized,
{
    let tweets = find_matching_tweets(settings.queries.as_slice(), api).await?;
    let mut summary = IterationSummary {
        found: tweets.len(),
        ..IterationSummary::default()
    };

    for tweet in &tweets {
        let original = get_original_tweet(tweet);
        let username = original.user.screen_name.as_str();

        if tweet_has_link(original) {
            debug!(
                "Skipping tweet {} by @{} - contains a link to {}",
                original.id_str,
                username,
                linked_urls(original)
            );
            summary.skipped_links += 1;
            continue;
        }
        if db.has_user(username).await? {
            debug!("Skipping tweet {} by @{} - already processed", original.id_str, username);
            summary.skipped_known += 1;
            continue;
        }

        react(api, db, original, settings.persist_order).await?;
        summary.retweeted += 1;

        if pause(settings.retweet_delay, shutdown).await {
            summary.interrupted = true;
            break;
        }
    }

    Ok(summary)
}

/// Expanded targets of a tweet's links, for logging.
fn linked_urls(tweet: &Tweet) -> String {
    tweet
        .entities
        .urls
        .iter()
        .map(|u| u.expanded_url.as_deref().unwrap_or(u.url.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records the author and retweets, in the configured order.
async fn react<A>(api: &A, db: &UserDb, tweet: &Tweet, order: PersistOrder) -> BotResult<()>
where
    A: TwitterApi + ?Sized,
{
    let username = tweet.user.screen_name.as_str();
    info!(
        "Retweeting {} by @{}: {}",
        tweet.id_str,
        username,
        sanitize_for_logging(&tweet.text, 140)
    );

    match order {
        PersistOrder::BeforeReaction => {
            db.add_user(username).await?;
            api.retweet(&tweet.id_str).await?;
        }
        PersistOrder::AfterReaction => {
            api.retweet(&tweet.id_str).await?;
            db.add_user(username).await?;
        }
    }
    Ok(())
}

/// Runs the bot until shutdown is signalled or an error occurs.
///
/// Iterations are separated by `settings.search_interval`. Shutdown is only
/// observed at pause points, never between recording an author and retweeting.
///
/// # Returns
///
/// - `Ok(())`: After a graceful shutdown
/// - `Err(BotError)`: The first error from any iteration
pub async fn run_bot<A>(
    api: &A,
    db: &UserDb,
    settings: &BotSettings,
    mut shutdown: watch::Receiver<bool>,
) -> BotResult<()>
where
    A: TwitterApi + ?Sized,
{
    let mut iteration = 0u64;
    loop {
        if *shutdown.borrow() {
            break;
        }

        iteration += 1;
        info!("Starting search iteration {}", iteration);
        let summary = run_iteration(api, db, settings, &mut shutdown).await?;
        info!(
            "Iteration {} done: {} found, {} retweeted, {} with links, {} already processed",
            iteration,
            summary.found,
            summary.retweeted,
            summary.skipped_links,
            summary.skipped_known
        );

        if summary.interrupted || pause(settings.search_interval, &mut shutdown).await {
            break;
        }
    }

    info!("Shutdown requested, bot stopped after {} iterations", iteration);
    Ok(())
}

/// Sleeps for `duration` unless shutdown is signalled first.
///
/// Returns `true` if shutdown was requested.
async fn pause(duration: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    if *shutdown.borrow() {
        return true;
    }

    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);

    let changed = tokio::select! {
        _ = &mut sleep => None,
        res = shutdown.changed() => Some(res.is_ok()),
    };

    match changed {
        None => false,
        Some(true) => *shutdown.borrow(),
        // Sender gone, nobody can ask us to stop any more; finish the same pause
        Some(false) => {
            sleep.await;
            false
        }
    }
}
