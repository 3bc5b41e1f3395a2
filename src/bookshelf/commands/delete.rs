use crate::commands::{position_of, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::Record;

/// Removes the first record with `id`. Remaining records keep their ids.
pub fn run(records: &mut Vec<Record>, id: u64) -> Result<CmdResult> {
    let pos = position_of(records, id).ok_or(CatalogError::NotFound(id))?;
    let removed = records.remove(pos);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        removed.id, removed.title
    )));
    Ok(result.with_affected_records(vec![removed]))
}
