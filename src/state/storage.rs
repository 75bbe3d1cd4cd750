use rusqlite::{Connection, OptionalExtension, Result as SqlResult};
use std::path::PathBuf;

/// Storage key for the serialized favorites ledger
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key for the last-entered search term
pub const SEARCH_TERM_KEY: &str = "search_term";

/// Storage manages the SQLite settings database.
/// It holds the small key-value entries that survive across sessions:
/// the favorites ledger and the last search term.
pub struct Storage {
    conn: Connection,
    db_path: PathBuf,
}

impl Storage {
    /// Create a new Storage instance and initialize the database.
    ///
    /// The database file is created in the user's data directory:
    /// - Linux: ~/.local/share/character-catalog/catalog.db
    /// - macOS: ~/Library/Application Support/character-catalog/catalog.db
    /// - Windows: %APPDATA%\character-catalog\catalog.db
    pub fn new() -> SqlResult<Self> {
        Self::open_at(Self::get_db_path())
    }

    /// Open (or create) the database at an explicit path
    pub fn open_at(db_path: PathBuf) -> SqlResult<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;

        println!("📁 Database initialized at: {}", db_path.display());

        let storage = Storage { conn, db_path };
        storage.init_schema()?;

        Ok(storage)
    }

    /// Get the path where the database should be stored
    fn get_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user data directory");

        path.push("character-catalog");
        path.push("catalog.db");
        path
    }

    /// Initialize the database schema.
    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Read the value stored under `key`, if any
    pub fn get(&self, key: &str) -> SqlResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    /// Write `value` under `key`, replacing any previous entry
    pub fn set(&self, key: &str, value: &str) -> SqlResult<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path().join("catalog.db")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let (_dir, storage) = temp_storage();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (_dir, storage) = temp_storage();

        storage.set(SEARCH_TERM_KEY, "rick").unwrap();
        assert_eq!(
            storage.get(SEARCH_TERM_KEY).unwrap(),
            Some("rick".to_string())
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let (_dir, storage) = temp_storage();

        storage.set(FAVORITES_KEY, "[1,2]").unwrap();
        storage.set(FAVORITES_KEY, "[3]").unwrap();

        assert_eq!(storage.get(FAVORITES_KEY).unwrap(), Some("[3]".to_string()));
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");

        {
            let storage = Storage::open_at(path.clone()).unwrap();
            storage.set(SEARCH_TERM_KEY, "morty").unwrap();
        }

        let reopened = Storage::open_at(path).unwrap();
        assert_eq!(
            reopened.get(SEARCH_TERM_KEY).unwrap(),
            Some("morty".to_string())
        );
    }
}
