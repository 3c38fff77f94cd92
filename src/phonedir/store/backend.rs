use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DirectoryStore handles the "what" (decoding, validation, load policy).
pub trait StorageBackend {
    /// Read the whole persisted document.
    /// Returns Ok(None) if it does not exist yet (first run).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_raw(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the whole persisted document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_raw(&self, content: &[u8]) -> Result<()>;

    /// Path of the document. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
