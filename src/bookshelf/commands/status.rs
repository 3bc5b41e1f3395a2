use crate::commands::{position_of, CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::{Record, Status};

/// Sets the status of the first record with `id`.
///
/// The status text is validated before the lookup, so an invalid status is
/// reported even when the id does not exist.
pub fn run(records: &mut [Record], id: u64, status_text: &str) -> Result<CmdResult> {
    let status: Status = status_text.parse()?;
    let pos = position_of(records, id).ok_or(CatalogError::NotFound(id))?;

    let record = &mut records[pos];
    record.status = status;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book {} is now {}: {}",
        record.id, record.status, record.title
    )));
    Ok(result.with_affected_records(vec![record.clone()]))
}
