//! # CLI Layer
//!
//! One possible UI client for the catalog. This is the only place that:
//! - Knows about stdin, stdout, stderr
//! - Parses command-line flags
//! - Formats records and messages for people
//!
//! ## Structure
//!
//! - `setup`: flags, logging, configuration resolution
//! - `menu`: the interactive numbered menu
//! - `print`: rendering of records and messages

mod menu;
mod print;
mod setup;

use bookshelf::catalog::Catalog;
use bookshelf::error::Result;
use bookshelf::store::fs::FileStore;
use clap::Parser;
use menu::Menu;
use setup::{init_logging, resolve_config, Cli};
use std::io;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli);
    tracing::debug!(file = %config.file.display(), id_policy = ?config.id_policy, "starting");

    let store = FileStore::new(config.file);
    let mut catalog = Catalog::open_with_policy(store, config.id_policy)?;

    let mut menu = Menu::new(&mut catalog, io::stdin().lock(), io::stdout().lock());
    menu.run()
}
