//! SQLite output backend (feature `sqlite`).
//!
//! One `plan_days` table, one row per day.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::PlanWriter;
use crate::{DayRow, OutputResult};

/// Writes plan days to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    ///
    /// Rows from an earlier plan in the same file are replaced.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS plan_days (
                 day      INTEGER PRIMARY KEY,
                 date     TEXT    NOT NULL,
                 reading  TEXT    NOT NULL,
                 chapters INTEGER NOT NULL
             );
             DELETE FROM plan_days;",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl PlanWriter for SqliteWriter {
    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO plan_days (day, date, reading, chapters) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.day, row.date, row.reading, row.chapters])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
