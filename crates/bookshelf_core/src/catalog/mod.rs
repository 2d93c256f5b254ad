//! Catalog ownership and query layer.
//!
//! # Responsibility
//! - Hold the session's books and the single editing cursor.
//! - Serve filtered, title-sorted views to presentation callers.
//!
//! # Invariants
//! - All mutation goes through `BookManager`; there is no shared aliasing.
//! - Position is an ephemeral key; `BookId` is the stable one.

pub mod manager;
pub mod query;
