use super::SnapshotStore;
use crate::error::Result;
use crate::model::Snapshot;

/// In-memory store for tests. Nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Snapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last snapshot handed to `save`, if any.
    pub fn saved(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, Member};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let mut snapshot = self.store.load().unwrap();
            for _ in 0..count {
                let n = snapshot.books.len() + 1;
                snapshot.books.push(Book::new(
                    format!("B{:03}", n),
                    format!("Test Book {}", n),
                    "Test Author".into(),
                    format!("isbn-{}", n),
                ));
            }
            self.store.save(&snapshot).unwrap();
            self
        }

        pub fn with_member(mut self, name: &str) -> Self {
            let mut snapshot = self.store.load().unwrap();
            let n = snapshot.members.len() + 1;
            snapshot.members.push(Member::new(
                format!("M{:03}", n),
                name.to_string(),
                format!("{}@example.com", name.to_lowercase()),
                "555-0100".into(),
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            ));
            self.store.save(&snapshot).unwrap();
            self
        }
    }
}
