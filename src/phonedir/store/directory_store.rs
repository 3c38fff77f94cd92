use super::backend::StorageBackend;
use super::{DataStore, LoadPolicy};
use crate::error::{DirectoryError, Result, ValidationErrors};
use crate::logging::EventLog;
use crate::model::{Directory, Record, RecordData};
use std::path::PathBuf;

pub struct DirectoryStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    policy: LoadPolicy,
}

impl<B: StorageBackend> DirectoryStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Bytes that are not UTF-8 are corrupt data, not an I/O failure.
    fn decode(&self, raw: &[u8]) -> std::result::Result<Vec<RecordData>, DirectoryError> {
        serde_json::from_slice(raw).map_err(|err| DirectoryError::CorruptData(err.to_string()))
    }

    fn validate_all(&self, rows: Vec<RecordData>, log: &dyn EventLog) -> Directory {
        let mut records = Vec::with_capacity(rows.len());
        let mut failures: Vec<(usize, ValidationErrors)> = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            match Record::from_data(row) {
                Ok(record) => records.push(record),
                Err(errs) => failures.push((i + 1, errs)),
            }
        }

        if failures.is_empty() {
            return records;
        }

        for (position, errs) in &failures {
            log.exception(
                &format!("Validation error in the data (record {})", position),
                errs,
            );
        }

        match self.policy {
            LoadPolicy::AllOrNothing => {
                log.error(&format!(
                    "Discarding {} loaded records: {} failed validation",
                    records.len() + failures.len(),
                    failures.len()
                ));
                Vec::new()
            }
            LoadPolicy::SkipInvalid => records,
        }
    }
}

impl<B: StorageBackend> DataStore for DirectoryStore<B> {
    fn load(&self, log: &dyn EventLog) -> Result<Directory> {
        let raw = match self.backend.read_raw()? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match self.decode(&raw) {
            Ok(rows) => Ok(self.validate_all(rows, log)),
            Err(err) => {
                log.exception(
                    "Error decoding JSON in the file. Please check the file format",
                    &err,
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let content = serde_json::to_string_pretty(records).map_err(DirectoryError::Serialization)?;
        self.backend.write_raw(content.as_bytes())
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
