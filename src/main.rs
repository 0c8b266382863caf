//! # Watchlist Bot
//!
//! Searches Twitter/X for watchlist queries on a fixed interval and retweets
//! link-free tweets, once per author.
//!
//! ## Files
//!
//! - `twitter_conf.json`: OAuth 1.0a credentials (`consumer_key`,
//!   `consumer_secret`, `access_token`, `access_token_secret`)
//! - `users.db`: SQLite store of authors already retweeted
//!
//! ## Environment Variables
//!
//! - `TWITTER_CONF`, `USERS_DB`: override the file paths above
//! - `RETWEET_DELAY_SECS`, `SEARCH_INTERVAL_SECS`, `PERSIST_ORDER`, `HTTP_TIMEOUT_SECS`
//! - `RUST_LOG`: log level (e.g. `info`, `debug`)

use log::{error, info};
use std::process::ExitCode;
use tokio::sync::watch;

use watchlist_bot::config::get_http_timeout;
use watchlist_bot::{
    get_config_path, get_users_db_path, run_bot, BotResult, BotSettings, TwitterClient,
    TwitterConfig, UserDb,
};

/// Main entry point for the watchlist bot.
///
/// Loads configuration, opens the users store, builds the Twitter client and
/// runs the bot until Ctrl+C. Any error is fatal: it is logged and the
/// process exits with status 1.
///
/// # Example Usage
///
/// ```bash
/// RUST_LOG=info cargo run --bin watchlist-bot
///
/// # Search every minute instead of every five
/// SEARCH_INTERVAL_SECS=60 cargo run --bin watchlist-bot
/// ```
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Watchlist bot stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> BotResult<()> {
    let config = TwitterConfig::from_file(get_config_path())?;
    let settings = BotSettings::from_env()?;
    let client = TwitterClient::new(config, get_http_timeout()?)?;

    let db = UserDb::open(get_users_db_path()).await?;
    info!(
        "Users database ready with {} users already processed",
        db.get_users().await?.len()
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal, stopping after the current step");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
                // keep the sender alive so the bot keeps running
                std::future::pending::<()>().await;
            }
        }
    });

    info!("Starting watchlist bot");
    let result = run_bot(&client, &db, &settings, shutdown_rx).await;
    db.close().await;
    result
}
