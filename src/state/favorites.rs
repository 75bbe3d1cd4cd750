/// Persisted favorites ledger
///
/// The ledger is the set of character ids currently marked favorite. It is
/// rewritten in full after every membership change, synchronously, so the
/// stored set never lags behind what the user last saw on screen.

use std::collections::HashSet;

use super::storage::{Storage, FAVORITES_KEY};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesLedger {
    ids: HashSet<i64>,
}

impl FavoritesLedger {
    /// Load the ledger from storage.
    ///
    /// A missing entry yields an empty ledger. Malformed JSON is logged and
    /// also yields an empty ledger; stale favorites are recoverable by
    /// clicking again, a crash on startup is not.
    pub fn load(storage: &Storage) -> Self {
        let raw = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                eprintln!("⚠️  Error reading favorites from storage: {e}");
                return Self::default();
            }
        };

        match serde_json::from_str::<Vec<i64>>(&raw) {
            Ok(ids) => Self {
                ids: ids.into_iter().collect(),
            },
            Err(e) => {
                eprintln!("⚠️  Error parsing stored favorites, starting empty: {e}");
                Self::default()
            }
        }
    }

    /// Serialize the full ledger into storage.
    ///
    /// Write failures are logged and swallowed; the in-memory set stays the
    /// source of truth for this session.
    pub fn save(&self, storage: &Storage) {
        let serialized = serde_json::to_string(&self.snapshot())
            .expect("a list of integers always serializes");

        if let Err(e) = storage.set(FAVORITES_KEY, &serialized) {
            eprintln!("⚠️  Error saving favorites to storage: {e}");
        }
    }

    pub fn add(&mut self, id: i64) {
        self.ids.insert(id);
    }

    pub fn remove(&mut self, id: i64) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// The ledger contents as a sorted id list
    pub fn snapshot(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::Storage;

    fn temp_storage() -> (tempfile::TempDir, Storage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open_at(dir.path().join("catalog.db")).unwrap();
        (dir, storage)
    }

    #[test]
    fn test_add_remove_contains() {
        let mut ledger = FavoritesLedger::default();

        ledger.add(7);
        assert!(ledger.contains(7));

        ledger.remove(7);
        assert!(!ledger.contains(7));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_dir, storage) = temp_storage();

        let mut ledger = FavoritesLedger::default();
        ledger.add(1);
        ledger.add(5);
        ledger.add(9);
        ledger.save(&storage);

        let reloaded = FavoritesLedger::load(&storage);
        assert_eq!(reloaded.snapshot(), vec![1, 5, 9]);
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_missing_entry_loads_empty() {
        let (_dir, storage) = temp_storage();

        let ledger = FavoritesLedger::load(&storage);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_malformed_entry_resets_to_empty() {
        let (_dir, storage) = temp_storage();
        storage.set(FAVORITES_KEY, "not json at all").unwrap();

        let ledger = FavoritesLedger::load(&storage);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let mut ledger = FavoritesLedger::default();
        ledger.add(9);
        ledger.add(1);
        ledger.add(5);

        assert_eq!(ledger.snapshot(), vec![1, 5, 9]);
    }
}
