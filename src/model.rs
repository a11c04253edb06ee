//! Core data types: [`Book`], [`Member`], [`Loan`], and the [`Snapshot`]
//! document that holds all three sequences.
//!
//! The snapshot serializes to a single JSON document:
//!
//! ```text
//! {
//!   "books":        [ {id, title, author, isbn, status}, ... ],
//!   "members":      [ {id, name, email, phone, join_date}, ... ],
//!   "transactions": [ {id, book_id, member_id, issue_date, due_date,
//!                      return_date, status}, ... ]
//! }
//! ```
//!
//! Dates are plain calendar dates (`YYYY-MM-DD`); `return_date` is `null`
//! while a loan is open. Entity ids are strings like `B001` / `M001` /
//! `T001` and are allocated by [`crate::library::Library`].

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed loan period: every issue is due this many days after the issue date.
pub const LOAN_PERIOD_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Issued,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    Issued,
    Returned,
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanStatus::Issued => write!(f, "Issued"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(id: String, title: String, author: String, isbn: String) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
            status: BookStatus::Available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
}

impl Member {
    pub fn new(id: String, name: String, email: String, phone: String, join_date: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            join_date,
        }
    }
}

/// A loan record. Created only by issuing a book, never deleted; closing it
/// (status `Returned`) is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: String,
    pub book_id: String,
    pub member_id: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

impl Loan {
    /// Opens a new loan; the due date is derived from the issue date.
    pub fn open(id: String, book_id: String, member_id: String, issue_date: NaiveDate) -> Self {
        Self {
            id,
            book_id,
            member_id,
            issue_date,
            due_date: issue_date + Duration::days(LOAN_PERIOD_DAYS),
            return_date: None,
            status: LoanStatus::Issued,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == LoanStatus::Issued
    }

    /// Open past its due date. Returned loans are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date < today
    }
}

/// The complete domain state at a point in time. This is the unit of
/// persistence: the whole document is loaded once at startup and rewritten
/// after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub transactions: Vec<Loan>,
}
