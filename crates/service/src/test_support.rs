#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and migrate. Callers treat an `Err` as "no database around"
/// and skip the test, so unreachable-database failures surface here and
/// nowhere else.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        anyhow::bail!("SKIP_DB_TESTS is set");
    }
    let cfg = DatabaseConfig::from_env();
    let db = connect_with_config(&cfg).await?;
    MIGRATED
        .get_or_try_init(|| async {
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    Ok(db)
}
