use bookshelf::commands::{CmdMessage, MessageLevel};
use bookshelf::model::{Record, Status};
use colored::Colorize;
use std::io::{self, Write};

pub(super) const MENU_ITEMS: &[(&str, &str)] = &[
    ("1", "Add book"),
    ("2", "Delete book"),
    ("3", "Search books"),
    ("4", "List books"),
    ("5", "Update status"),
    ("0", "Exit"),
];

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    for &(key, label) in MENU_ITEMS {
        writeln!(out, "{}. {}", key.bold(), label)?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        print_message(out, message)?;
    }
    Ok(())
}

pub(super) fn print_message<W: Write>(out: &mut W, message: &CmdMessage) -> io::Result<()> {
    match message.level {
        MessageLevel::Info => writeln!(out, "{}", message.content.dimmed()),
        MessageLevel::Success => writeln!(out, "{}", message.content.green()),
        MessageLevel::Warning => writeln!(out, "{}", message.content.yellow()),
        MessageLevel::Error => writeln!(out, "{}", message.content.red()),
    }
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", format_record(record))?;
    }
    Ok(())
}

pub(super) fn format_record(record: &Record) -> String {
    let status = match record.status {
        Status::Available => record.status.as_str().green(),
        Status::Lent => record.status.as_str().yellow(),
    };
    format!(
        "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
        record.id, record.title, record.author, record.year, status
    )
}
