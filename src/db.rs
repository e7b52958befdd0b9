use sea_orm::{
    ConnectOptions, Database, DatabaseConnection,
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};
use sea_orm_migration::MigratorTrait;

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false).map_sqlx_sqlite_opts(|o| {
        o.journal_mode(SqliteJournalMode::Wal).synchronous(SqliteSynchronous::Normal)
    });
    // Every pooled connection to `:memory:` would open its own empty database.
    if database_url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opts).await?;

    migration::Migrator::up(&db, None).await?;
    tracing::debug!("database migrations applied");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Statement};

    use super::*;

    #[tokio::test]
    async fn connections_use_normal_synchronous_mode() {
        let db = connect_and_migrate("sqlite::memory:").await.unwrap();

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "PRAGMA synchronous".to_string(),
            ))
            .await
            .unwrap()
            .unwrap();
        let mode: i32 = row.try_get_by_index(0).unwrap();
        assert_eq!(mode, 1);
    }
}
