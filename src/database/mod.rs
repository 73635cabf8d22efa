pub mod appointments;

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

use anyhow::Context;
use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection},
    SqliteConnection,
};
use log::info;
use r2d2::PooledConnection;

use crate::DbPool;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MEMORY_URL: &str = ":memory:";

static MEMORY_DB_SEQ: AtomicUsize = AtomicUsize::new(0);

const CREATE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS appointment (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_name TEXT,
    doctor_name TEXT,
    date TEXT
);";

/// Per-connection pragmas applied whenever the pool opens a new connection.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout: BUSY_TIMEOUT,
        }
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the connection pool for `database_url`.
///
/// `:memory:` is opened as a process-local `memdb` database named per pool, so
/// every pooled connection sees the same tables and rows. The database lives
/// as long as one connection is open, hence those connections never expire.
pub fn build_pool(database_url: &str, max_size: u32) -> anyhow::Result<DbPool> {
    let in_memory = database_url == MEMORY_URL;
    let url = if in_memory {
        let seq = MEMORY_DB_SEQ.fetch_add(1, Ordering::Relaxed);
        format!("file:/appointments-{}-{}?vfs=memdb", std::process::id(), seq)
    } else {
        database_url.to_string()
    };

    let mut builder = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions::default()));
    if in_memory {
        builder = builder.max_lifetime(None).idle_timeout(None);
    }

    builder
        .build(ConnectionManager::<SqliteConnection>::new(url))
        .with_context(|| format!("Failed to create pool for `{}`", database_url))
}

pub fn get_db_conn(
    pool: &DbPool,
) -> anyhow::Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    pool.get().context("DB connection")
}

/// Creates the `appointment` table when it does not exist yet.
///
/// Existing tables are left untouched, so a database written by an earlier
/// deployment keeps its rows.
pub fn init_schema(pool: &DbPool) -> anyhow::Result<()> {
    let started_at = Instant::now();
    let mut conn = get_db_conn(pool)?;
    conn.batch_execute(CREATE_SCHEMA).context("Failed to create schema")?;

    info!(
        "event=schema_init module=database status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(())
}
