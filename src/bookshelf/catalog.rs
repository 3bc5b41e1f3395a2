//! # Catalog Facade
//!
//! [`Catalog`] is the single entry point for every operation, whatever the UI.
//! It owns the authoritative record sequence and the store behind it:
//!
//! - **Loads** the whole sequence once, when opened
//! - **Dispatches** to the command modules, which only see the in-memory records
//! - **Saves** the whole sequence after every successful mutation
//!
//! Reads (`list`, `search`) never touch the store.
//!
//! A failed save does not roll back: the in-memory change stays and the next
//! successful save writes it out.
//!
//! ## Generic Over DataStore
//!
//! - Production: `Catalog<FileStore>`
//! - Testing: `Catalog<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{IdPolicy, Record};
use crate::store::DataStore;
use tracing::{debug, info, warn};

pub struct Catalog<S: DataStore> {
    store: S,
    records: Vec<Record>,
    id_policy: IdPolicy,
    last_id: Option<u64>,
}

impl<S: DataStore> Catalog<S> {
    /// Open the catalog with the default (sequential) id policy.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_policy(store, IdPolicy::default())
    }

    pub fn open_with_policy(store: S, id_policy: IdPolicy) -> Result<Self> {
        let records = store.load()?;
        // Includes existing ids, so the first save of any kind writes a mark.
        let last_id = match id_policy {
            IdPolicy::Monotonic => {
                let highest = records.iter().map(|r| r.id).max();
                store.load_last_id()?.max(highest)
            }
            IdPolicy::Sequential => None,
        };
        debug!(
            location = %store.location(),
            count = records.len(),
            ?id_policy,
            "catalog loaded"
        );

        Ok(Self {
            store,
            records,
            id_policy,
            last_id,
        })
    }

    pub fn add(&mut self, title: String, author: String, year: i32) -> Result<CmdResult> {
        let result = commands::add::run(
            &mut self.records,
            self.id_policy,
            self.last_id,
            title,
            author,
            year,
        )?;
        if let Some(record) = result.affected_records.first() {
            info!(id = record.id, title = %record.title, "book added");
            if self.id_policy == IdPolicy::Monotonic {
                self.last_id = Some(record.id);
            }
        }
        self.save()?;
        Ok(result)
    }

    pub fn delete(&mut self, id: u64) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.records, id)?;
        info!(id, "book deleted");
        self.save()?;
        Ok(result)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.records, query)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.records)
    }

    pub fn update_status(&mut self, id: u64, status: &str) -> Result<CmdResult> {
        let result = commands::status::run(&mut self.records, id, status)?;
        info!(id, status, "status updated");
        self.save()?;
        Ok(result)
    }

    /// Write the full record sequence, replacing whatever the store held.
    pub fn save(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.records) {
            warn!(location = %self.store.location(), error = %e, "failed to save catalog");
            return Err(e);
        }
        if let (IdPolicy::Monotonic, Some(last_id)) = (self.id_policy, self.last_id) {
            self.store.save_last_id(last_id)?;
        }
        debug!(
            location = %self.store.location(),
            count = self.records.len(),
            "catalog saved"
        );
        Ok(())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }
}
