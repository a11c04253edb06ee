//! # Shelf Architecture
//!
//! Shelf is a UI-agnostic library-management core with a CLI client. The
//! layering mirrors that split:
//!
//! ```text
//! CLI (main.rs, args.rs)   argument parsing, tables, colors, exit codes
//!          │
//! API (api.rs)             thin facade owning the in-memory Library
//!          │
//! Commands (commands/)     business rules; persist after every mutation
//!          │
//! Storage (store/)         SnapshotStore trait: FileStore / InMemoryStore
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal. The same core could sit
//! behind any other front end.
//!
//! The domain itself is small: a catalog of books, a member roster, and a
//! loan ledger, all held in one [`model::Snapshot`] that is loaded once at
//! startup and atomically rewritten in full after every mutation. Two
//! invariants anchor the lending rules: a book has at most one open loan,
//! and a book's status agrees with the existence of that loan.
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic per desk operation
//! - [`library`]: in-memory collections, lookups, id allocation
//! - [`model`]: core data types and the snapshot document
//! - [`store`]: storage abstraction and implementations
//! - [`auth`]: staff credential store (independent of the catalog)
//! - [`error`]: error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod error;
pub mod library;
pub mod model;
pub mod store;
