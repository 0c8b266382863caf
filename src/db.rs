//! Database module for the processed-users store.
//!
//! This module keeps the set of Twitter users the bot has already retweeted
//! in a single-table SQLite file (`Users`, one `Name TEXT` column). All queries
//! bind their parameters.

use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use crate::error::BotResult;

/// A persistent set of usernames backed by a SQLite file.
pub struct UserDb {
    pool: SqlitePool,
}

impl UserDb {
    /// Opens the users database at `path`, creating it if it doesn't exist.
    ///
    /// A new file gets the `Users` table. An existing file is used as-is with
    /// no schema validation: if it lacks the table, later operations fail.
    ///
    /// # Returns
    ///
    /// - `Ok(UserDb)`: A handle holding one connection for its lifetime
    /// - `Err(BotError::Storage)`: If the file cannot be created or opened
    pub async fn open<P: AsRef<Path>>(path: P) -> BotResult<Self> {
        let path = path.as_ref();
        let existed = path.exists();

        info!("Opening users database at {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        if !existed {
            info!("Creating Users table in new database {}", path.display());
            sqlx::query("CREATE TABLE Users (Name TEXT)")
                .execute(&pool)
                .await?;
        }

        Ok(Self { pool })
    }

    /// Returns every recorded username, in storage order.
    pub async fn get_users(&self) -> BotResult<Vec<String>> {
        let users: Vec<String> = sqlx::query_scalar("SELECT Name FROM Users")
            .fetch_all(&self.pool)
            .await?;
        debug!("Found {} users in database", users.len());
        Ok(users)
    }

    /// Adds a user to the database.
    ///
    /// Inserts unconditionally; callers check `has_user` first when they want
    /// each name stored once. The row is committed before this returns.
    pub async fn add_user(&self, name: &str) -> BotResult<()> {
        sqlx::query("INSERT INTO Users (Name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        debug!("Stored user @{}", name);
        Ok(())
    }

    /// Does a user exist in the database? Exact, case-sensitive match.
    pub async fn has_user(&self, name: &str) -> BotResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Users WHERE Name = ?1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Closes the underlying connection.
    pub async fn close(self) {
        self.pool.close().await;
    }
}
