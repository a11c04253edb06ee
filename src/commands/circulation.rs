//! The lending workflow. Book states swing `Available ⇄ Issued`; loan states
//! go `Issued → Returned` and never back.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::{BookStatus, Loan, LoanStatus};
use crate::store::SnapshotStore;
use chrono::NaiveDate;

/// Issue a book to a member. This is the only operation that creates a loan.
pub fn issue<S: SnapshotStore>(
    library: &mut Library,
    store: &mut S,
    book_id: &str,
    member_id: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    match library.find_book(book_id) {
        None => return Err(ShelfError::BookNotFound(book_id.to_string())),
        Some(book) if book.status != BookStatus::Available => {
            return Err(ShelfError::BookNotAvailable(book_id.to_string()))
        }
        Some(_) => {}
    }
    if library.find_member(member_id).is_none() {
        return Err(ShelfError::MemberNotFound(member_id.to_string()));
    }

    let loan = Loan::open(
        library.next_loan_id(),
        book_id.to_string(),
        member_id.to_string(),
        today,
    );
    let due_date = loan.due_date;
    if let Some(book) = library.find_book_mut(book_id) {
        book.status = BookStatus::Issued;
    }
    library.insert_loan(loan.clone());
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.due_date = Some(due_date);
    result.add_message(CmdMessage::success(format!(
        "Book issued. Due: {}",
        due_date
    )));
    result.loans.push(loan);
    Ok(result)
}

pub fn return_book<S: SnapshotStore>(
    library: &mut Library,
    store: &mut S,
    book_id: &str,
    today: NaiveDate,
) -> Result<CmdResult> {
    match library.find_book(book_id) {
        None => return Err(ShelfError::BookNotFound(book_id.to_string())),
        Some(book) if book.status != BookStatus::Issued => {
            return Err(ShelfError::BookNotIssued(book_id.to_string()))
        }
        Some(_) => {}
    }

    // Resolve the open loan before touching the book, so an out-of-sync
    // ledger fails without mutating anything.
    let loan_id = {
        let loan = library
            .open_loan_for_mut(book_id)
            .ok_or_else(|| ShelfError::Inconsistency(book_id.to_string()))?;
        loan.status = LoanStatus::Returned;
        loan.return_date = Some(today);
        loan.id.clone()
    };
    if let Some(book) = library.find_book_mut(book_id) {
        book.status = BookStatus::Available;
    }
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book returned: {} ({})",
        book_id, loan_id
    )));
    Ok(result)
}

/// All loans, newest issue first, for the ledger listing.
pub fn list(library: &Library) -> CmdResult {
    let mut loans = library.loans().to_vec();
    loans.sort_by(|a, b| b.issue_date.cmp(&a.issue_date).then(b.id.cmp(&a.id)));
    CmdResult::default().with_loans(loans)
}
