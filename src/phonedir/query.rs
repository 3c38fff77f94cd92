//! Search over the in-memory directory.
//!
//! A query string takes one of two forms:
//!
//! - `field=value`: records whose `field` equals `value`, ignoring case. The
//!   split happens at the first `=`, so `organization=a=b` looks for `a=b`.
//! - anything else: records where the text appears, ignoring case, inside any
//!   of the six fields.
//!
//! Results keep directory order.

use crate::error::{DirectoryError, Result};
use crate::logging::EventLog;
use crate::model::{Field, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Case-insensitive exact match on one field.
    FieldEquals { field: Field, value: String },
    /// Case-insensitive substring match on any field.
    Contains(String),
}

impl Query {
    /// Fails with `UnknownField` when the part before `=` is not a field name.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once('=') {
            Some((name, value)) => {
                let field: Field = name.parse()?;
                Ok(Query::FieldEquals {
                    field,
                    value: value.to_lowercase(),
                })
            }
            None => Ok(Query::Contains(raw.to_lowercase())),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Query::FieldEquals { field, value } => record.get(*field).to_lowercase() == *value,
            Query::Contains(needle) => record
                .fields()
                .any(|(_, v)| v.to_lowercase().contains(needle.as_str())),
        }
    }

    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Runs `raw` against `records`.
///
/// An unknown field name is reported to `log` before the `UnknownField` error
/// is returned, so callers only decide how to show it.
pub fn search<'a>(records: &'a [Record], raw: &str, log: &dyn EventLog) -> Result<Vec<&'a Record>> {
    let query = Query::parse(raw).inspect_err(|err| {
        if let DirectoryError::UnknownField(_) = err {
            log.error(&err.to_string());
        }
    })?;
    Ok(query.filter(records))
}
