//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every directory operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Owns** the authoritative in-memory [`Directory`], loaded once on open
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (1-based user indexes become 0-based positions here)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules of its own.
//!
//! ## Generic Over DataStore
//!
//! `DirectoryApi<S: DataStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests.

use crate::commands;
use crate::error::{DirectoryError, Result};
use crate::logging::EventLog;
use crate::model::{Directory, Field, Record, RecordData};
use crate::page::PageRequest;
use crate::store::DataStore;
use std::path::PathBuf;
use std::rc::Rc;

pub struct DirectoryApi<S: DataStore> {
    store: S,
    records: Directory,
    log: Rc<dyn EventLog>,
    config_dir: Option<PathBuf>,
}

impl<S: DataStore> DirectoryApi<S> {
    /// Loads the directory from `store`, reporting unusable data to `log`.
    pub fn open(store: S, log: Rc<dyn EventLog>) -> Result<Self> {
        let records = store.load(log.as_ref())?;
        Ok(Self {
            store,
            records,
            log,
            config_dir: None,
        })
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn display(&self, request: PageRequest) -> Result<commands::CmdResult> {
        commands::display::run(&self.records, request)
    }

    pub fn search(&self, query: &str, request: PageRequest) -> Result<commands::CmdResult> {
        commands::search::run(&self.records, query, request, self.log.as_ref())
    }

    pub fn add_record(&mut self, data: RecordData) -> Result<commands::CmdResult> {
        commands::add::run(&self.store, &mut self.records, data, self.log.as_ref())
    }

    /// The record shown to the user as `index` (1-based).
    pub fn get_record(&self, index: usize) -> Result<&Record> {
        let position = self.position(index)?;
        commands::edit::select(&self.records, position, self.log.as_ref())
    }

    /// Replaces one field of the record shown as `index` (1-based).
    pub fn edit_record(
        &mut self,
        index: usize,
        field: Field,
        value: String,
    ) -> Result<commands::CmdResult> {
        let position = self.position(index)?;
        commands::edit::run(
            &self.store,
            &mut self.records,
            position,
            field,
            value,
            self.log.as_ref(),
        )
    }

    /// Parses a field menu number, logging bad selections.
    pub fn field_selection(&self, selection: &str) -> Result<Field> {
        Field::from_selection(selection).inspect_err(|err| {
            self.log
                .exception("Invalid input. Please enter a valid field number", err);
        })
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        let dir = self
            .config_dir
            .as_ref()
            .ok_or_else(|| DirectoryError::Config("No config directory available".into()))?;
        commands::config::run(dir, action)
    }

    fn position(&self, index: usize) -> Result<usize> {
        index.checked_sub(1).ok_or_else(|| {
            self.log.error("Invalid index.");
            DirectoryError::RecordNotFound {
                index,
                len: self.records.len(),
            }
        })
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
