use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Tables and indexes of the catalog, created when missing.
///
/// SKU and manufacturer code are unique among live rows only, so a
/// soft-deleted record does not block reusing its value.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS a001_product (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        sku TEXT NOT NULL,
        description TEXT,
        price REAL NOT NULL DEFAULT 0,
        compare_at_price REAL,
        stock INTEGER NOT NULL DEFAULT 0,
        low_stock_threshold INTEGER,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a001_product_sku ON a001_product(sku) WHERE is_deleted = 0;",
    r#"
    CREATE TABLE IF NOT EXISTS a002_category (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        display_order INTEGER NOT NULL DEFAULT 0,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS a003_manufacturer (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        code TEXT NOT NULL,
        contact_info TEXT,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 0
    );
    "#,
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a003_manufacturer_code ON a003_manufacturer(code) WHERE is_deleted = 0;",
];

/// SQLite URL for a database file, creating the parent directory.
fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in SCHEMA {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

/// In-memory database shared by the service tests.
///
/// The pool lives on one runtime for the whole test binary, so tests run
/// their futures through [`testing::run`] instead of `#[tokio::test]`.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use once_cell::sync::Lazy;
    use sea_orm::ConnectOptions;
    use std::future::Future;
    use tokio::runtime::{Builder, Runtime};

    static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
        let rt = Builder::new_multi_thread().enable_all().build().unwrap();
        rt.block_on(async {
            // one connection: every connection to :memory: is its own database
            let mut options = ConnectOptions::new("sqlite::memory:");
            options.max_connections(1).min_connections(1).sqlx_logging(false);
            let conn = Database::connect(options).await.unwrap();
            create_schema(&conn).await.unwrap();
            DB_CONN.set(conn).unwrap();
        });
        rt
    });

    pub fn run<F: Future>(future: F) -> F::Output {
        RUNTIME.block_on(future)
    }
}
