use super::directory_store::DirectoryStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DirectoryStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DirectoryStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---
