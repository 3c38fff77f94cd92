use crate::model::Field;
use std::fmt;
use thiserror::Error;

/// A single field that failed its pattern check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub value: String,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n  {} [input_value='{}']",
            self.field, self.reason, self.value
        )
    }
}

impl std::error::Error for FieldError {}

/// Every field-level failure found while building one record, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.errors.len() == 1 {
            "error"
        } else {
            "errors"
        };
        write!(f, "{} validation {} for Record", self.errors.len(), noun)?;
        for error in &self.errors {
            write!(f, "\n{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid format: {0}")]
    InvalidFormat(FieldError),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Field '{0}' does not exist.")]
    UnknownField(String),

    /// `index` is the 1-based index as entered.
    #[error("Invalid index: {index} (directory has {len} records)")]
    RecordNotFound { index: usize, len: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Domain failures the CLI reports and moves on from, as opposed to
    /// infrastructure failures that end the process with a non-zero status.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DirectoryError::InvalidFormat(_)
                | DirectoryError::Validation(_)
                | DirectoryError::CorruptData(_)
                | DirectoryError::UnknownField(_)
                | DirectoryError::RecordNotFound { .. }
                | DirectoryError::Config(_)
        )
    }
}

impl From<FieldError> for DirectoryError {
    fn from(err: FieldError) -> Self {
        DirectoryError::InvalidFormat(err)
    }
}

impl From<ValidationErrors> for DirectoryError {
    fn from(err: ValidationErrors) -> Self {
        DirectoryError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
