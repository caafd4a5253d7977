// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the SQLite connection pool and bring the schema up to date

use crate::config::Config;
use crate::db::apply_migrations;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use std::time::Duration;

/// How long a statement waits on another connection's write lock
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize SQLite connection pool
/// Called once during application startup in main.rs
/// The database file is created when missing and foreign keys are enforced
/// WAL lets readers proceed while one connection writes
pub async fn init_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    log::info!("Initializing database pool: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    apply_migrations(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// In-memory pool for tests
/// A single connection that never expires keeps the in-memory database alive
#[cfg(test)]
pub async fn init_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    apply_migrations(&pool).await.unwrap();
    pool
}

/// Config pointing at a fresh database file in the temp directory
#[cfg(test)]
pub fn temp_file_config(max_connections: u32) -> Config {
    use std::sync::atomic::{AtomicU32, Ordering};
    static NEXT: AtomicU32 = AtomicU32::new(0);

    let path = std::env::temp_dir().join(format!(
        "doctor-reviews-{}-{}.sqlite3",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = std::fs::remove_file(&path);

    Config {
        database_url: format!("sqlite://{}", path.display()),
        server_address: "127.0.0.1".to_string(),
        server_port: 5000,
        environment: "test".to_string(),
        log_level: "info".to_string(),
        db_max_connections: max_connections,
        db_connection_timeout: 30,
    }
}

/// Remove a temp database together with its WAL side files
#[cfg(test)]
pub fn remove_db_files(config: &Config) {
    let path = config.database_url.trim_start_matches("sqlite://");
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path, suffix));
    }
}
