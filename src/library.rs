//! Owner of the in-memory [`Snapshot`] plus id allocation and lookups.
//!
//! Id allocation keeps one counter per entity class, seeded at load by
//! scanning the sequence for its highest numeric suffix. Counters only ever
//! increment, so deleting an entity never frees its number within a run.
//! Across a restart the seed scan starts from what survived on disk, so a
//! number can come back if the highest-numbered book or member was deleted
//! before shutdown. Loan ids are immune: loans are never deleted.

use crate::model::{Book, BookStatus, Loan, Member, Snapshot};

fn format_id(prefix: char, number: u32) -> String {
    format!("{}{:03}", prefix, number)
}

/// Numeric suffix of an id like `B001`. Ids that don't parse (hand-edited
/// data files) simply never raise the counter seed.
fn id_number(id: &str) -> Option<u32> {
    id.get(1..)?.parse().ok()
}

fn high_water<'a, I: IntoIterator<Item = &'a str>>(ids: I) -> u32 {
    ids.into_iter().filter_map(id_number).max().unwrap_or(0)
}

#[derive(Debug, Default)]
pub struct Library {
    snapshot: Snapshot,
    book_seq: u32,
    member_seq: u32,
    loan_seq: u32,
}

impl Library {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let book_seq = high_water(snapshot.books.iter().map(|b| b.id.as_str()));
        let member_seq = high_water(snapshot.members.iter().map(|m| m.id.as_str()));
        let loan_seq = high_water(snapshot.transactions.iter().map(|t| t.id.as_str()));
        Self {
            snapshot,
            book_seq,
            member_seq,
            loan_seq,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn books(&self) -> &[Book] {
        &self.snapshot.books
    }

    pub fn members(&self) -> &[Member] {
        &self.snapshot.members
    }

    pub fn loans(&self) -> &[Loan] {
        &self.snapshot.transactions
    }

    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.snapshot.books.iter().find(|b| b.id == id)
    }

    pub fn find_book_mut(&mut self, id: &str) -> Option<&mut Book> {
        self.snapshot.books.iter_mut().find(|b| b.id == id)
    }

    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.snapshot.members.iter().find(|m| m.id == id)
    }

    /// The open loan for a book. There is at most one: issuing flips the
    /// book to `Issued`, which blocks further issues until it is returned.
    pub fn open_loan_for(&self, book_id: &str) -> Option<&Loan> {
        self.snapshot
            .transactions
            .iter()
            .find(|t| t.book_id == book_id && t.is_open())
    }

    pub fn open_loan_for_mut(&mut self, book_id: &str) -> Option<&mut Loan> {
        self.snapshot
            .transactions
            .iter_mut()
            .find(|t| t.book_id == book_id && t.is_open())
    }

    pub fn book_on_loan(&self, book_id: &str) -> bool {
        self.open_loan_for(book_id).is_some()
    }

    pub fn member_has_open_loans(&self, member_id: &str) -> bool {
        self.snapshot
            .transactions
            .iter()
            .any(|t| t.member_id == member_id && t.is_open())
    }

    pub fn next_book_id(&mut self) -> String {
        self.book_seq += 1;
        format_id('B', self.book_seq)
    }

    pub fn next_member_id(&mut self) -> String {
        self.member_seq += 1;
        format_id('M', self.member_seq)
    }

    pub fn next_loan_id(&mut self) -> String {
        self.loan_seq += 1;
        format_id('T', self.loan_seq)
    }

    pub fn insert_book(&mut self, book: Book) {
        self.snapshot.books.push(book);
    }

    pub fn insert_member(&mut self, member: Member) {
        self.snapshot.members.push(member);
    }

    pub fn insert_loan(&mut self, loan: Loan) {
        self.snapshot.transactions.push(loan);
    }

    pub fn remove_book(&mut self, id: &str) -> Option<Book> {
        let pos = self.snapshot.books.iter().position(|b| b.id == id)?;
        Some(self.snapshot.books.remove(pos))
    }

    pub fn remove_member(&mut self, id: &str) -> Option<Member> {
        let pos = self.snapshot.members.iter().position(|m| m.id == id)?;
        Some(self.snapshot.members.remove(pos))
    }

    pub fn issued_count(&self) -> usize {
        self.snapshot
            .books
            .iter()
            .filter(|b| b.status == BookStatus::Issued)
            .count()
    }

    pub fn available_count(&self) -> usize {
        self.snapshot
            .books
            .iter()
            .filter(|b| b.status == BookStatus::Available)
            .count()
    }
}
