//! # kura-db
//!
//! libSQL storage for the Kura curriculum content tree.
//!
//! Holds all relational state: topics, unit plans, lessons, age groups,
//! learning outcomes, curriculum areas, programming challenges, glossary
//! terms, and printable resources, plus the join tables connecting them.
//!
//! Repository methods live in [`repos`], implemented as `impl KuraDb`
//! blocks, one module per entity. Batch loads bracket their work with
//! [`KuraDb::begin`]/[`KuraDb::commit`] so a failed load leaves the
//! database untouched.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Kura content.
///
/// Wraps a libSQL database and connection.
pub struct KuraDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl KuraDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let kura_db = Self { db, conn };
        kura_db.run_migrations().await?;
        Ok(kura_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Start a batch transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the statement fails (e.g. a transaction is
    /// already open on this connection).
    pub async fn begin(&self) -> Result<(), DatabaseError> {
        self.conn.execute("BEGIN", ()).await?;
        Ok(())
    }

    /// Commit the open batch transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the commit fails.
    pub async fn commit(&self) -> Result<(), DatabaseError> {
        self.conn.execute("COMMIT", ()).await?;
        Ok(())
    }

    /// Roll back the open batch transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the rollback fails.
    pub async fn rollback(&self) -> Result<(), DatabaseError> {
        self.conn.execute("ROLLBACK", ()).await?;
        Ok(())
    }

    /// Run an INSERT carrying a `RETURNING id` clause and read the id back.
    pub(crate) async fn insert_returning_id(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<i64, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}
