use rusqlite::{Connection, OpenFlags, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use crate::errors::ReportError;

/// Handle to the operational store.
///
/// Writes go through one shared connection. Report reads go through
/// [`Database::read_snapshot`], which for file-backed stores opens its own
/// read-only connection so a long report never holds the writer lock.
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a store, creating the file and schema when they do not exist yet.
    pub fn new(path: &str) -> Result<Self, ReportError> {
        if is_memory_path(path) {
            let conn = Connection::open(path)
                .map_err(|e| ReportError::DataAccess(format!("Failed to open in-memory db: {}", e)))?;
            return Self::from_memory_connection(conn);
        }

        // Ensure parent directory exists
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| ReportError::DataAccess(format!("Failed to open database: {}", e)))?;
        let db = Self::from_file_connection(conn, path)?;
        db.initialize()?;
        Ok(db)
    }

    /// Open a store that must already exist with the report schema.
    ///
    /// Nothing is created on disk: a missing file, or one without the
    /// expected tables, is a [`ReportError::DataAccess`] rather than an
    /// empty store.
    pub fn open_existing(path: &str) -> Result<Self, ReportError> {
        if is_memory_path(path) {
            return Self::new(path);
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| ReportError::DataAccess(format!("Failed to open database {}: {}", path, e)))?;

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN (?1, ?2, ?3, ?4)",
                rusqlite::params_from_iter(super::schema::TABLES),
                |row| row.get(0),
            )
            .map_err(|e| ReportError::DataAccess(format!("Failed to read database {}: {}", path, e)))?;
        if tables != super::schema::TABLES.len() as i64 {
            return Err(ReportError::DataAccess(format!(
                "Database {} does not contain the report schema",
                path
            )));
        }

        Self::from_file_connection(conn, path)
    }

    pub fn in_memory() -> Result<Self, ReportError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ReportError::DataAccess(format!("Failed to open in-memory db: {}", e)))?;
        Self::from_memory_connection(conn)
    }

    fn from_file_connection(conn: Connection, path: &str) -> Result<Self, ReportError> {
        // WAL lets snapshot readers run alongside writers
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .map_err(|e| ReportError::DataAccess(format!("Failed to set pragmas: {}", e)))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(PathBuf::from(path)),
        })
    }

    /// In-memory databases are private to their connection, so snapshots
    /// must reuse it instead of opening a reader by path.
    fn from_memory_connection(conn: Connection) -> Result<Self, ReportError> {
        conn.execute_batch("PRAGMA foreign_keys=ON;")
            .map_err(|e| ReportError::DataAccess(format!("Failed to set pragmas: {}", e)))?;
        let db = Self { conn: Arc::new(Mutex::new(conn)), path: None };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> Result<(), ReportError> {
        let conn = self.lock()?;
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| ReportError::DataAccess(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>, ReportError> {
        self.conn
            .lock()
            .map_err(|_| ReportError::DataAccess("Database connection lock poisoned".into()))
    }

    /// Run `f` inside a single deferred read transaction.
    ///
    /// Every query issued through the connection handed to `f` observes the
    /// same committed state of the store. The transaction is always rolled
    /// back; nothing read here is ever written.
    pub fn read_snapshot<T, F>(&self, f: F) -> Result<T, ReportError>
    where
        F: FnOnce(&Connection) -> Result<T, ReportError>,
    {
        match &self.path {
            Some(path) => {
                let mut conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| ReportError::DataAccess(format!("Failed to open read connection: {}", e)))?;
                run_snapshot(&mut conn, f)
            }
            None => {
                let mut conn = self.lock()?;
                run_snapshot(&mut conn, f)
            }
        }
    }
}

fn is_memory_path(path: &str) -> bool {
    path == ":memory:" || path.starts_with("file::memory:") || (path.starts_with("file:") && path.contains("mode=memory"))
}

fn run_snapshot<T, F>(conn: &mut Connection, f: F) -> Result<T, ReportError>
where
    F: FnOnce(&Connection) -> Result<T, ReportError>,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Deferred)
        .map_err(|e| ReportError::DataAccess(format!("Failed to begin read transaction: {}", e)))?;
    let result = f(&tx)?;
    tx.rollback()
        .map_err(|e| ReportError::DataAccess(format!("Failed to end read transaction: {}", e)))?;
    Ok(result)
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
            path: self.path.clone(),
        }
    }
}
