use crate::commands::CmdResult;
use crate::library::Library;
use chrono::NaiveDate;
use serde::Serialize;

/// Derived figures, recomputed from the snapshot on demand. Never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub total_books: usize,
    pub total_members: usize,
    pub books_issued: usize,
    pub books_available: usize,
    pub overdue: usize,
}

pub fn run(library: &Library, today: NaiveDate) -> CmdResult {
    let stats = LibraryStats {
        total_books: library.books().len(),
        total_members: library.members().len(),
        books_issued: library.issued_count(),
        books_available: library.available_count(),
        overdue: library
            .loans()
            .iter()
            .filter(|t| t.is_overdue(today))
            .count(),
    };

    let mut result = CmdResult::default();
    result.stats = Some(stats);
    result
}
