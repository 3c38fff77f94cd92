use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::logging::EventLog;
use crate::model::{Directory, Field, Record};
use crate::store::DataStore;

/// Looks up the record at 0-based `index`. A miss reports the 1-based index.
pub fn select<'a>(records: &'a [Record], index: usize, log: &dyn EventLog) -> Result<&'a Record> {
    records.get(index).ok_or_else(|| {
        log.error("Invalid index.");
        DirectoryError::RecordNotFound {
            index: index + 1,
            len: records.len(),
        }
    })
}

/// Replaces one field of the record at 0-based `index` and persists.
///
/// The stored record is swapped for a new, re-validated value; on any failure
/// the directory is left as it was.
pub fn run<S: DataStore>(
    store: &S,
    records: &mut Directory,
    index: usize,
    field: Field,
    value: String,
    log: &dyn EventLog,
) -> Result<CmdResult> {
    let current = select(records, index, log)?;

    let edited = match current.with_field(field, value) {
        Ok(edited) => edited,
        Err(err) => {
            log.exception("Invalid input", &err);
            return Err(DirectoryError::InvalidFormat(err));
        }
    };

    let previous = std::mem::replace(&mut records[index], edited.clone());
    if let Err(err) = store.save(records) {
        records[index] = previous;
        log.exception("Failed to edit entry", &err);
        return Err(err);
    }

    log.info(&format!(
        "event=record_edited index={} field={}",
        index + 1,
        field
    ));

    Ok(CmdResult::default().with_message(CmdMessage::success("Entry edited successfully.")))
}
