use super::backend::StorageBackend;
use crate::error::{DirectoryError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since phonedir is single-threaded,
/// which lets the `StorageBackend` trait use `&self` for writes too.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<Vec<u8>>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `content` as the persisted document.
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        let backend = Self::new();
        *backend.content.borrow_mut() = Some(content.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The current persisted document, if any, as text.
    pub fn content(&self) -> Option<String> {
        self.content
            .borrow()
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_raw(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.content.borrow().clone())
    }

    fn write_raw(&self, content: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DirectoryError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.content.borrow_mut() = Some(content.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://phone_directory.json")
    }
}
