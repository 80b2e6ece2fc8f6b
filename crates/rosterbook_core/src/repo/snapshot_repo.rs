//! Snapshot persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save the full roster as one serialized snapshot.
//! - Keep SQL and payload-codec details inside the persistence boundary.
//!
//! # Invariants
//! - The whole roster lives under the single [`ROSTER_SLOT`] key.
//! - `save` replaces the slot payload atomically (single upsert).
//! - A missing slot row loads as an empty roster, never as an error.

use crate::db::{migrations::latest_version, DbError};
use crate::model::student::Student;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key under which the roster snapshot is stored.
pub const ROSTER_SLOT: &str = "students";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persistence-layer error for snapshot load/save operations.
#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
    /// Payload could not be encoded or decoded as a student list.
    Codec(serde_json::Error),
    /// Connection has not run migrations up to the supported version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "invalid snapshot payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Durable storage contract consumed by the record store.
///
/// `load` is called once at store construction; `save` after every
/// successful mutation, with the full current roster.
pub trait SnapshotRepository {
    fn load(&self) -> SnapshotResult<Vec<Student>>;
    fn save(&self, students: &[Student]) -> SnapshotResult<()>;
}

/// SQLite-backed snapshot repository over the `roster_snapshots` slot table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections whose schema version, table or columns do not
    /// match what this binary expects, instead of failing later mid-write.
    pub fn try_new(conn: &'conn Connection) -> SnapshotResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self) -> SnapshotResult<Vec<Student>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM roster_snapshots WHERE slot = ?1;",
                [ROSTER_SLOT],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, students: &[Student]) -> SnapshotResult<()> {
        let payload = serde_json::to_string(students)?;
        self.conn.execute(
            "INSERT INTO roster_snapshots (slot, payload, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![ROSTER_SLOT, payload],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> SnapshotResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(SnapshotError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "roster_snapshots")? {
        return Err(SnapshotError::MissingRequiredTable("roster_snapshots"));
    }

    for column in ["slot", "payload", "updated_at"] {
        if !column_exists(conn, "roster_snapshots", column)? {
            return Err(SnapshotError::MissingRequiredColumn {
                table: "roster_snapshots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> SnapshotResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> SnapshotResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get("name")?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
