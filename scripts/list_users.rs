//! Processed Users Listing Utility
//!
//! This script prints every username recorded in the users database, one per
//! line, in storage order. The path comes from USERS_DB (default `users.db`).

use std::path::Path;

use watchlist_bot::{get_users_db_path, UserDb};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let path = get_users_db_path();

    // Opening would create an empty database, which is not what we want here
    if !Path::new(&path).exists() {
        eprintln!("❌ Error: users database '{}' does not exist", path);
        eprintln!("Set USERS_DB to point at the bot's database file.");
        std::process::exit(1);
    }

    let db = UserDb::open(&path).await?;
    let users = db.get_users().await?;

    for user in &users {
        println!("{}", user);
    }
    eprintln!("{} users in {}", users.len(), path);

    db.close().await;
    Ok(())
}
