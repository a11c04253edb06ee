use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Book {0} is not available for issue")]
    BookNotAvailable(String),

    #[error("Book {0} is not currently issued")]
    BookNotIssued(String),

    #[error("Book {0} is currently issued and cannot be deleted")]
    BookInUse(String),

    #[error("Member {0} has books on loan and cannot be deleted")]
    MemberInUse(String),

    // A book marked issued must have exactly one open loan. Hitting this
    // variant means the ledger was mutated outside the command layer.
    #[error("Ledger out of sync: book {0} is marked issued but has no open loan")]
    Inconsistency(String),

    #[error("Data file corrupted: {0}")]
    Corrupt(serde_json::Error),

    #[error("Username already exists: {0}")]
    UserExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
