//! Board persistence contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Load/save the whole todo list as one JSON array under one storage key.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - Saves replace the stored value atomically (whole-list replace only).
//! - A missing key reads as an empty board, not an error.
//! - Corrupt persisted JSON surfaces as a typed error instead of a panic.

use crate::db::DbError;
use crate::model::todo::Todo;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key the original app used for its board state.
pub const DEFAULT_BOARD_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for board load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Stored value exists but is not a valid todo array.
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    /// The list to be saved cannot be serialized.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { key, source } => {
                write!(f, "corrupt board state under key `{key}`: {source}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize board state: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the board store.
///
/// A plain capability contract: any implementation satisfying these three
/// signatures can back a [`crate::store::TodoStore`].
pub trait BoardRepository {
    /// Loads the persisted todo list; empty when nothing was saved yet.
    fn load_todos(&self) -> RepoResult<Vec<Todo>>;
    /// Persists the full todo list, replacing any previous value.
    fn save_todos(&self, todos: &[Todo]) -> RepoResult<()>;
    /// Removes the persisted board state entirely.
    fn clear_todos(&self) -> RepoResult<()>;
}

/// SQLite-backed board repository storing one JSON array per key.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteBoardRepository<'conn> {
    /// Creates a repository over the default board key.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, DEFAULT_BOARD_KEY)
    }

    /// Creates a repository over a caller-chosen storage key.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Storage key this repository reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn load_todos(&self) -> RepoResult<Vec<Todo>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        match stored {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| RepoError::Corrupt {
                key: self.key.clone(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn save_todos(&self, todos: &[Todo]) -> RepoResult<()> {
        let raw = serde_json::to_string(todos).map_err(RepoError::Serialize)?;

        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), raw],
        )?;

        Ok(())
    }

    fn clear_todos(&self) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [self.key.as_str()])?;
        Ok(())
    }
}
