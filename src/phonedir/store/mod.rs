//! # Storage Layer
//!
//! The directory is persisted as one JSON document: a list of flat objects with
//! the six role-named string fields. It is read whole at startup and rewritten
//! whole on every mutation.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw byte I/O, the "how".
//!   - [`fs_backend::FsBackend`]: a file on disk, written via temp file + rename.
//!   - [`mem_backend::MemBackend`]: a buffer in memory, for tests.
//! - [`directory_store::DirectoryStore`]: the "what". Decodes, validates, applies
//!   the [`LoadPolicy`] and reports problems through the
//!   [`EventLog`](crate::logging::EventLog) passed to `load`.
//!
//! ## Load outcomes
//!
//! | Resource state            | Result                          | Logged            |
//! |---------------------------|---------------------------------|-------------------|
//! | missing                   | empty directory                 | nothing           |
//! | not a list of records     | empty directory                 | `CorruptData`     |
//! | not UTF-8                 | empty directory                 | `CorruptData`     |
//! | some records invalid      | depends on [`LoadPolicy`]       | `ValidationError` |
//! | unreadable (permissions)  | `Err(DirectoryError::Io)`       | nothing           |

use crate::error::Result;
use crate::logging::EventLog;
use crate::model::{Directory, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub mod backend;
pub mod directory_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// What to do with a persisted file when some of its records fail validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Treat the whole file as untrustworthy and start from an empty directory.
    #[default]
    AllOrNothing,
    /// Keep every valid record, log and drop the rest.
    SkipInvalid,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPolicy::AllOrNothing => "all-or-nothing",
            LoadPolicy::SkipInvalid => "skip-invalid",
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all-or-nothing" => Ok(LoadPolicy::AllOrNothing),
            "skip-invalid" => Ok(LoadPolicy::SkipInvalid),
            other => Err(format!(
                "unknown load policy '{}' (expected all-or-nothing or skip-invalid)",
                other
            )),
        }
    }
}

/// Abstract interface for directory persistence.
pub trait DataStore {
    /// Read the persisted directory. Missing or unusable data yields an empty
    /// directory and is reported to `log`; only real I/O failures are errors.
    fn load(&self, log: &dyn EventLog) -> Result<Directory>;

    /// Overwrite the persisted directory with `records`.
    fn save(&self, records: &[Record]) -> Result<()>;

    /// Where the data lives, for messages.
    fn location(&self) -> PathBuf;
}
