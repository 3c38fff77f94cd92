use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::page::{paginate_records, PageRequest};

pub fn run(records: &[Record], request: PageRequest) -> Result<CmdResult> {
    let page = paginate_records(records, request);
    Ok(CmdResult::default().with_listed(page))
}
