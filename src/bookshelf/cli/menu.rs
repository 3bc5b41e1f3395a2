//! The numbered menu loop.
//!
//! Generic over input and output so the whole loop can be driven from a
//! buffer in tests. Core errors are printed and the loop continues; only
//! terminal I/O failures end it early. End of input behaves like `0`.

use super::print::{format_record, print_menu, print_message, print_messages, print_records};
use bookshelf::catalog::Catalog;
use bookshelf::commands::{CmdMessage, CmdResult};
use bookshelf::error::{CatalogError, Result};
use bookshelf::store::DataStore;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    catalog: &'a mut Catalog<S>,
    input: R,
    output: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(catalog: &'a mut Catalog<S>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };
            debug!(choice = %choice, "menu choice");

            let flow = match choice.trim() {
                "1" => self.handle_add()?,
                "2" => self.handle_delete()?,
                "3" => self.handle_search()?,
                "4" => self.handle_list()?,
                "5" => self.handle_update_status()?,
                "0" => Flow::Exit,
                other => {
                    self.show(CmdMessage::error(format!(
                        "Invalid choice '{}'. Try again.",
                        other
                    )))?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_number::<i32>("Year: ")? else {
            return Ok(Flow::Exit);
        };
        if let Some(year) = year {
            let outcome = self.catalog.add(title, author, year);
            self.report(outcome)?;
        }
        Ok(Flow::Continue)
    }

    fn handle_delete(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_number::<u64>("Book ID: ")? else {
            return Ok(Flow::Exit);
        };
        if let Some(id) = id {
            let outcome = self.catalog.delete(id);
            self.report(outcome)?;
        }
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Title, author or year to search for: ")? else {
            return Ok(Flow::Exit);
        };
        let outcome = self.catalog.search(&query);
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    fn handle_list(&mut self) -> Result<Flow> {
        let outcome = self.catalog.list();
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    fn handle_update_status(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_number::<u64>("Book ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        let Some(status) = self.prompt("New status ('available' or 'lent'): ")? else {
            return Ok(Flow::Exit);
        };
        let outcome = self.catalog.update_status(id, status.trim());
        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    /// Read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Outer `None` is end of input, inner `None` is a rejected number (already reported).
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<Option<Option<T>>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };
        match parse_number(&text) {
            Ok(n) => Ok(Some(Some(n))),
            Err(e) => {
                self.show(CmdMessage::error(e.to_string()))?;
                Ok(Some(None))
            }
        }
    }

    fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                for record in &result.affected_records {
                    debug!(record = %format_record(record), "affected");
                }
                print_records(&mut self.output, &result.listed_records)?;
                print_messages(&mut self.output, &result.messages)?;
            }
            Err(e @ CatalogError::Persistence(_)) => {
                self.show(CmdMessage::warning(format!(
                    "{} (the change is kept in memory but was not saved)",
                    e
                )))?;
            }
            Err(e) => self.show(CmdMessage::error(e.to_string()))?,
        }
        Ok(())
    }

    fn show(&mut self, message: CmdMessage) -> Result<()> {
        print_message(&mut self.output, &message)?;
        Ok(())
    }
}

fn parse_number<T: FromStr>(text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| CatalogError::Input(format!("Invalid number: '{}'", text.trim())))
}
