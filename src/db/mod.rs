//! Read-only access to the ridership dataset.
//!
//! Every query goes through [`Dataset::query`] or [`Dataset::query_one`],
//! which take bound parameters. User input is never spliced into SQL text.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, Params, Row};
use tracing::{debug, info};

use crate::error::CtaError;

#[cfg(test)]
pub(crate) mod fixtures;

/// A live, read-only connection to the stations/stops/lines/ridership dataset.
pub struct Dataset {
    conn: Connection,
}

impl Dataset {
    /// Open the dataset at `path` read-only.
    ///
    /// Fails with [`CtaError::DatasetNotFound`] if the file does not exist.
    pub fn open(path: &Path) -> Result<Self, CtaError> {
        if !path.is_file() {
            return Err(CtaError::DatasetNotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!(path = %path.display(), "opened ridership dataset");
        Ok(Self { conn })
    }

    /// Wrap an already-open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run a parameterized query and map every row.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>, CtaError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!(sql = sql.trim(), "query");
        let mut stmt = self.conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params, map)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Run a parameterized query that yields exactly one row.
    pub fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<T, CtaError>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!(sql = sql.trim(), "query_one");
        Ok(self.conn.query_row(sql, params, map)?)
    }
}
