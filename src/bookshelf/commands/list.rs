use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub fn run(records: &[Record]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_records(records.to_vec()))
}
