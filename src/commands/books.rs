use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::model::Book;
use crate::store::SnapshotStore;

pub fn add<S: SnapshotStore>(
    library: &mut Library,
    store: &mut S,
    title: String,
    author: String,
    isbn: String,
) -> Result<CmdResult> {
    let book = Book::new(library.next_book_id(), title, author, isbn);
    library.insert_book(book.clone());
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {} ({})",
        book.title, book.id
    )));
    result.books.push(book);
    Ok(result)
}

/// Removing a book fails while it is out on loan. Closed loans keep their
/// book reference; historical records survive the deletion.
pub fn remove<S: SnapshotStore>(library: &mut Library, store: &mut S, id: &str) -> Result<CmdResult> {
    if library.book_on_loan(id) {
        return Err(ShelfError::BookInUse(id.to_string()));
    }
    let book = library
        .remove_book(id)
        .ok_or_else(|| ShelfError::BookNotFound(id.to_string()))?;
    store.save(library.snapshot())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed: {} ({})",
        book.title, book.id
    )));
    result.books.push(book);
    Ok(result)
}

pub fn list(library: &Library) -> CmdResult {
    CmdResult::default().with_books(library.books().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{circulation, members};
    use crate::model::{BookStatus, Snapshot};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn empty() -> (Library, InMemoryStore) {
        (Library::from_snapshot(Snapshot::default()), InMemoryStore::new())
    }

    #[test]
    fn consecutive_adds_number_sequentially() {
        let (mut library, mut store) = empty();
        for expected in ["B001", "B002", "B003"] {
            let result = add(
                &mut library,
                &mut store,
                "Title".into(),
                "Author".into(),
                "isbn".into(),
            )
            .unwrap();
            assert_eq!(result.books[0].id, expected);
            assert_eq!(result.books[0].status, BookStatus::Available);
        }
    }

    #[test]
    fn add_persists_the_snapshot() {
        let (mut library, mut store) = empty();
        add(&mut library, &mut store, "Dune".into(), "Herbert".into(), "111".into()).unwrap();

        let saved = store.saved().unwrap();
        assert_eq!(saved.books.len(), 1);
        assert_eq!(saved.books[0].title, "Dune");
    }

    #[test]
    fn remove_never_loaned_book_succeeds() {
        let (mut library, mut store) = empty();
        add(&mut library, &mut store, "Dune".into(), "Herbert".into(), "111".into()).unwrap();

        remove(&mut library, &mut store, "B001").unwrap();
        assert!(library.books().is_empty());
        assert!(store.saved().unwrap().books.is_empty());
    }

    #[test]
    fn remove_unknown_book_is_an_error() {
        let (mut library, mut store) = empty();
        match remove(&mut library, &mut store, "B042") {
            Err(ShelfError::BookNotFound(id)) => assert_eq!(id, "B042"),
            other => panic!("Expected BookNotFound, got {:?}", other),
        }
    }

    #[test]
    fn remove_book_on_loan_fails_and_leaves_catalog_unchanged() {
        let (mut library, mut store) = empty();
        add(&mut library, &mut store, "Dune".into(), "Herbert".into(), "111".into()).unwrap();
        members::add(
            &mut library,
            &mut store,
            "Alice".into(),
            "a@x.com".into(),
            "555".into(),
            date(2024, 3, 1),
        )
        .unwrap();
        circulation::issue(&mut library, &mut store, "B001", "M001", date(2024, 3, 1)).unwrap();

        match remove(&mut library, &mut store, "B001") {
            Err(ShelfError::BookInUse(id)) => assert_eq!(id, "B001"),
            other => panic!("Expected BookInUse, got {:?}", other),
        }
        assert_eq!(library.books().len(), 1);
        assert_eq!(library.books()[0].status, BookStatus::Issued);
    }

    #[test]
    fn remove_book_with_only_closed_loans_succeeds() {
        let (mut library, mut store) = empty();
        add(&mut library, &mut store, "Dune".into(), "Herbert".into(), "111".into()).unwrap();
        members::add(
            &mut library,
            &mut store,
            "Alice".into(),
            "a@x.com".into(),
            "555".into(),
            date(2024, 3, 1),
        )
        .unwrap();
        circulation::issue(&mut library, &mut store, "B001", "M001", date(2024, 3, 1)).unwrap();
        circulation::return_book(&mut library, &mut store, "B001", date(2024, 3, 5)).unwrap();

        remove(&mut library, &mut store, "B001").unwrap();
        assert!(library.books().is_empty());
        // The closed loan still references the removed book.
        assert_eq!(library.loans().len(), 1);
        assert_eq!(library.loans()[0].book_id, "B001");
    }

    #[test]
    fn list_returns_the_full_catalog() {
        let (mut library, mut store) = empty();
        add(&mut library, &mut store, "Dune".into(), "Herbert".into(), "111".into()).unwrap();
        add(&mut library, &mut store, "Emma".into(), "Austen".into(), "222".into()).unwrap();

        let result = list(&library);
        assert_eq!(result.books.len(), 2);
        assert_eq!(result.books[1].id, "B002");
    }
}
