//! RAII-based transaction support for SQLite.

use crate::index::{StoreError, StoreResult};
use rusqlite::{Connection, Params};

/// A database transaction with RAII-based automatic rollback.
///
/// The transaction will automatically rollback when dropped unless
/// `commit()` or `rollback()` is called explicitly.
pub struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    /// Begins a new transaction on the connection.
    pub(crate) fn begin(conn: &'a Connection) -> StoreResult<Self> {
        conn.execute_batch("BEGIN")?;
        Ok(Self {
            conn,
            finished: false,
        })
    }

    /// Returns a reference to the underlying connection.
    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Executes a SQL statement within the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Commits the transaction.
    ///
    /// Consumes the transaction, preventing automatic rollback on drop.
    pub fn commit(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        Ok(())
    }

    /// Rolls back the transaction explicitly.
    ///
    /// Consumes the transaction. This is equivalent to dropping without commit,
    /// but makes the intent explicit and reports rollback failures.
    pub fn rollback(mut self) -> StoreResult<()> {
        self.finished = true;
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Attempt rollback, but ignore errors since we're in drop
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}

/// Runs `body` inside a transaction.
///
/// Commits if `body` returns `Ok`. If `body` or the commit fails, the
/// transaction is rolled back, the failure is logged and returned as
/// [`StoreError::Transaction`]. A rolled back write is never reported as
/// success.
pub fn with_transaction<T, F>(conn: &Connection, body: F) -> StoreResult<T>
where
    F: FnOnce(&Transaction<'_>) -> StoreResult<T>,
{
    let tx = Transaction::begin(conn)?;

    let err = match body(&tx) {
        Ok(value) => match tx.commit() {
            Ok(()) => return Ok(value),
            // The guard already rolled back when `commit` returned.
            Err(err) => {
                log::error!("commit failed, transaction rolled back: {err}");
                return Err(StoreError::transaction(err));
            }
        },
        Err(err) => err,
    };

    log::error!("write failed, rolling back transaction: {err}");
    if let Err(rollback_err) = tx.rollback() {
        log::error!("rollback failed: {rollback_err}");
    }
    Err(StoreError::transaction(err))
}
