use crate::db::schema::{OPTIONAL_COLUMNS, OptionalColumn, SQLITE_INIT};
use crate::error::CmsError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if needed) the single data file behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, CmsError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    if let Some(parent) = connect_opts.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}

/// Create missing tables, then add any missing optional columns.
///
/// Table creation errors are returned. Column introspection or alteration
/// errors are logged and skipped so the process keeps running on the
/// schema it already has.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), CmsError> {
    // sqlx::query runs a single statement, so split the bundled DDL
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }

    for col in OPTIONAL_COLUMNS {
        match ensure_column(pool, col).await {
            Ok(true) => info!(table = col.table, column = col.column, "added column"),
            Ok(false) => {}
            Err(e) => warn!(
                table = col.table,
                column = col.column,
                error = %e,
                "column migration failed; continuing with existing schema"
            ),
        }
    }
    Ok(())
}

/// Returns `true` when the column had to be added.
async fn ensure_column(pool: &SqlitePool, col: &OptionalColumn) -> Result<bool, CmsError> {
    let columns = table_columns(pool, col.table).await?;
    if columns.iter().any(|name| name == col.column) {
        return Ok(false);
    }
    sqlx::query(&col.alter_statement()).execute(pool).await?;
    Ok(true)
}

/// Column names of `table` in declaration order.
pub async fn table_columns(pool: &SqlitePool, table: &str) -> Result<Vec<String>, CmsError> {
    let names: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM pragma_table_info(?) ORDER BY cid")
            .bind(table)
            .fetch_all(pool)
            .await?;
    Ok(names.into_iter().map(|(name,)| name).collect())
}
