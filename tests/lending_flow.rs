//! Lending flows against a real file-backed store: state must survive
//! closing and reopening the catalog.

use shelf::api::ShelfApi;
use shelf::model::{BookStatus, LoanStatus};
use shelf::store::fs::FileStore;
use tempfile::TempDir;

fn open(dir: &TempDir) -> ShelfApi<FileStore> {
    ShelfApi::open(FileStore::new(dir.path().join("data.json"))).unwrap()
}

#[test]
fn issue_survives_a_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = open(&dir);
        api.add_book("Dune".into(), "Herbert".into(), "111".into())
            .unwrap();
        api.add_member("Alice".into(), "a@x.com".into(), "555".into())
            .unwrap();
        api.issue_book("B001", "M001").unwrap();
    }

    let api = open(&dir);
    assert_eq!(api.books()[0].status, BookStatus::Issued);
    assert_eq!(api.loans().len(), 1);
    assert_eq!(api.loans()[0].status, LoanStatus::Issued);
    assert_eq!(
        api.loans()[0].due_date,
        api.loans()[0].issue_date + chrono::Duration::days(14)
    );
}

#[test]
fn return_after_reopen_closes_the_loan() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = open(&dir);
        api.add_book("Dune".into(), "Herbert".into(), "111".into())
            .unwrap();
        api.add_member("Alice".into(), "a@x.com".into(), "555".into())
            .unwrap();
        api.issue_book("B001", "M001").unwrap();
    }

    {
        let mut api = open(&dir);
        api.return_book("B001").unwrap();
    }

    let api = open(&dir);
    assert_eq!(api.books()[0].status, BookStatus::Available);
    assert_eq!(api.loans()[0].status, LoanStatus::Returned);
    assert!(api.loans()[0].return_date.is_some());
}

#[test]
fn id_numbering_continues_across_reopens() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = open(&dir);
        api.add_book("One".into(), "A".into(), "1".into()).unwrap();
        api.add_book("Two".into(), "B".into(), "2".into()).unwrap();
    }

    let mut api = open(&dir);
    let result = api.add_book("Three".into(), "C".into(), "3".into()).unwrap();
    assert_eq!(result.books[0].id, "B003");
}

#[test]
fn removal_is_durable() {
    let dir = TempDir::new().unwrap();

    {
        let mut api = open(&dir);
        api.add_book("Dune".into(), "Herbert".into(), "111".into())
            .unwrap();
        api.remove_book("B001").unwrap();
    }

    let api = open(&dir);
    assert!(api.books().is_empty());
}
