use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::logging::EventLog;
use crate::model::Record;
use crate::page::{paginate_records, PageRequest};
use crate::query;

pub const NO_RESULTS: &str = "No results found.";

pub fn run(
    records: &[Record],
    raw: &str,
    request: PageRequest,
    log: &dyn EventLog,
) -> Result<CmdResult> {
    let matches: Vec<Record> = match query::search(records, raw, log) {
        Ok(found) => found.into_iter().cloned().collect(),
        Err(err @ DirectoryError::UnknownField(_)) => {
            return Ok(CmdResult::default().with_message(CmdMessage::error(err.to_string())));
        }
        Err(err) => return Err(err),
    };
    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_RESULTS)));
    }

    let page = paginate_records(&matches, request);
    Ok(CmdResult::default().with_listed(page))
}
