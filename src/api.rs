//! # API Facade
//!
//! The single entry point for all catalog operations, generic over the
//! storage backend: `ShelfApi<FileStore>` in production,
//! `ShelfApi<InMemoryStore>` in tests. The facade owns the in-memory
//! [`Library`] for the life of the process and dispatches to the command
//! layer; it holds no business logic and does no terminal I/O.

use crate::commands::{self, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::{Book, Loan, Member, Snapshot};
use crate::store::SnapshotStore;
use chrono::{Local, NaiveDate};

pub struct ShelfApi<S: SnapshotStore> {
    store: S,
    library: Library,
    load_warning: Option<String>,
}

impl<S: SnapshotStore> ShelfApi<S> {
    /// Open the catalog from the store. A corrupted data file is not fatal:
    /// the catalog starts empty and the warning is kept for the UI to show.
    pub fn open(store: S) -> Result<Self> {
        let (library, load_warning) = match store.load() {
            Ok(snapshot) => (Library::from_snapshot(snapshot), None),
            Err(ShelfError::Corrupt(err)) => (
                Library::from_snapshot(Snapshot::default()),
                Some(format!(
                    "Data file corrupted, starting with an empty catalog: {}",
                    err
                )),
            ),
            Err(err) => return Err(err),
        };
        Ok(Self {
            store,
            library,
            load_warning,
        })
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn add_book(&mut self, title: String, author: String, isbn: String) -> Result<CmdResult> {
        commands::books::add(&mut self.library, &mut self.store, title, author, isbn)
    }

    pub fn remove_book(&mut self, id: &str) -> Result<CmdResult> {
        commands::books::remove(&mut self.library, &mut self.store, id)
    }

    pub fn add_member(&mut self, name: String, email: String, phone: String) -> Result<CmdResult> {
        commands::members::add(
            &mut self.library,
            &mut self.store,
            name,
            email,
            phone,
            today(),
        )
    }

    pub fn remove_member(&mut self, id: &str) -> Result<CmdResult> {
        commands::members::remove(&mut self.library, &mut self.store, id)
    }

    pub fn issue_book(&mut self, book_id: &str, member_id: &str) -> Result<CmdResult> {
        commands::circulation::issue(
            &mut self.library,
            &mut self.store,
            book_id,
            member_id,
            today(),
        )
    }

    pub fn return_book(&mut self, book_id: &str) -> Result<CmdResult> {
        commands::circulation::return_book(&mut self.library, &mut self.store, book_id, today())
    }

    pub fn list_books(&self) -> CmdResult {
        commands::books::list(&self.library)
    }

    pub fn list_members(&self) -> CmdResult {
        commands::members::list(&self.library)
    }

    pub fn list_loans(&self) -> CmdResult {
        commands::circulation::list(&self.library)
    }

    pub fn stats(&self) -> CmdResult {
        commands::stats::run(&self.library, today())
    }

    pub fn export(&self, dest: Option<String>) -> Result<CmdResult> {
        commands::export::run(&self.library, dest)
    }

    pub fn books(&self) -> &[Book] {
        self.library.books()
    }

    pub fn members(&self) -> &[Member] {
        self.library.members()
    }

    pub fn loans(&self) -> &[Loan] {
        self.library.loans()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
