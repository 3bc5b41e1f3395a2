use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

pub fn run(records: &[Record], query: &str) -> Result<CmdResult> {
    let matches: Vec<Record> = records
        .iter()
        .filter(|r| r.matches(query))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found."));
    }
    Ok(result.with_listed_records(matches))
}
