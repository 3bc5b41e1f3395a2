use crate::commands::{next_id, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{IdPolicy, Record};

/// Appends a new, available record. Title and author are taken as given.
pub fn run(
    records: &mut Vec<Record>,
    policy: IdPolicy,
    last_id: Option<u64>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdResult> {
    let id = next_id(records, policy, last_id)?;
    let record = Record::new(id, title, author, year);
    records.push(record.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        record.id, record.title
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn appends_available_record() {
        let mut records = Vec::new();
        run(
            &mut records,
            IdPolicy::Sequential,
            None,
            "Dune".into(),
            "Herbert".into(),
            1965,
        )
        .unwrap();

        assert_eq!(records.len(), 1);
        let last = records.last().unwrap();
        assert_eq!(last.id, 1);
        assert_eq!(last.title, "Dune");
        assert_eq!(last.author, "Herbert");
        assert_eq!(last.year, 1965);
        assert_eq!(last.status, Status::Available);
    }

    #[test]
    fn empty_fields_pass_through() {
        let mut records = Vec::new();
        let result = run(&mut records, IdPolicy::Sequential, None, "".into(), "".into(), -50).unwrap();
        assert_eq!(result.affected_records[0].title, "");
        assert_eq!(result.affected_records[0].year, -50);
    }
}
