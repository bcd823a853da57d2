use super::Storage;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::NOTES_KEY;

    /// An `InMemoryStore` whose snapshot key already holds `bytes`,
    /// for exercising load paths without going through the note store.
    pub fn seeded(bytes: &[u8]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save(NOTES_KEY, bytes).unwrap();
        store
    }
}
