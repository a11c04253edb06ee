use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Small-library catalog and lending tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the data files (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog
    Books,

    /// Add a book to the catalog
    AddBook {
        title: String,
        author: String,
        isbn: String,
    },

    /// Remove a book by id (fails while the book is on loan)
    RemoveBook {
        /// Book id, e.g. B001
        id: String,
    },

    /// List the member roster
    Members,

    /// Add a member to the roster
    AddMember {
        name: String,
        email: String,
        phone: String,
    },

    /// Remove a member by id (fails while the member has books out)
    RemoveMember {
        /// Member id, e.g. M001
        id: String,
    },

    /// Issue a book to a member
    Issue {
        /// Book id, e.g. B001
        book_id: String,
        /// Member id, e.g. M001
        member_id: String,
    },

    /// Return an issued book
    Return {
        /// Book id, e.g. B001
        book_id: String,
    },

    /// List the loan ledger, newest issue first
    Loans,

    /// Show catalog statistics
    Stats,

    /// Write a tar.gz backup of the data file
    Export {
        /// Destination path (defaults to a timestamped name in the cwd)
        dest: Option<String>,
    },

    /// Create a staff account
    Register { username: String, password: String },

    /// Check staff credentials
    Login { username: String, password: String },
}
