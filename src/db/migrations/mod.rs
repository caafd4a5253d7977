// src/db/migrations/mod.rs
// DOCUMENTATION: Schema migration registry
// PURPOSE: Create and upgrade the doctor/review tables at startup

use sqlx::{Executor, SqlitePool};

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: i64,
    sql: &'static str,
}

/// Registered migrations, strictly increasing by version
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Latest schema version known by this binary
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Apply all pending migrations in one transaction
/// The applied version is mirrored to `PRAGMA user_version`
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (current,): (i64,) = sqlx::query_as("PRAGMA user_version")
        .fetch_one(&mut *tx)
        .await?;
    let latest = latest_version();

    if current > latest {
        return Err(sqlx::Error::Configuration(
            format!(
                "database schema version {} is newer than supported version {}",
                current, latest
            )
            .into(),
        ));
    }

    if current == latest {
        log::debug!("Schema up to date at version {}", current);
        return Ok(());
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        log::info!("Applying schema migration {}", migration.version);
        (&mut *tx).execute(migration.sql).await?;
    }

    (&mut *tx)
        .execute(format!("PRAGMA user_version = {}", latest).as_str())
        .await?;
    tx.commit().await?;

    log::info!("Schema migrated from version {} to {}", current, latest);
    Ok(())
}
