use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::logging::EventLog;
use crate::model::{Directory, Record, RecordData};
use crate::store::DataStore;

/// Validates `data`, appends it and persists the whole directory.
///
/// Nothing is added or written when validation fails. If the write fails, the
/// in-memory directory is rolled back so it keeps matching the file.
pub fn run<S: DataStore>(
    store: &S,
    records: &mut Directory,
    data: RecordData,
    log: &dyn EventLog,
) -> Result<CmdResult> {
    let record = match Record::from_data(data) {
        Ok(record) => record,
        Err(errs) => {
            log.exception("Failed to create record", &errs);
            return Err(DirectoryError::Validation(errs));
        }
    };

    records.push(record.clone());
    if let Err(err) = store.save(records) {
        records.pop();
        log.exception("Failed to add entry", &err);
        return Err(err);
    }

    log.info(&format!(
        "event=record_added total={} location={}",
        records.len(),
        store.location().display()
    ));

    Ok(CmdResult::default().with_message(CmdMessage::success("Entry added successfully.")))
}
