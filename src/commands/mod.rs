//! # Command Layer
//!
//! Business logic for each desk operation, one submodule per area. Commands
//! operate on the [`crate::library::Library`] and a
//! [`crate::store::SnapshotStore`], persist the full snapshot after every
//! mutation, and return a structured [`CmdResult`], never strings to a
//! terminal. The UI layer decides how to render it.
//!
//! All checks complete before any mutation, so a failed command leaves the
//! library unchanged.
//!
//! This is where the lion's share of testing lives: each command module
//! carries unit tests running against `InMemoryStore`.

use crate::model::{Book, Loan, Member};
use chrono::NaiveDate;
use serde::Serialize;

pub mod books;
pub mod circulation;
pub mod export;
pub mod members;
pub mod stats;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured command output: the records touched or listed, the derived
/// figures where a command produces them, and display messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub loans: Vec<Loan>,
    pub stats: Option<stats::LibraryStats>,
    pub due_date: Option<NaiveDate>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    pub fn with_loans(mut self, loans: Vec<Loan>) -> Self {
        self.loans = loans;
        self
    }
}
