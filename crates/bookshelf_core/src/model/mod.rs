//! Book domain model.
//!
//! # Responsibility
//! - Define the closed set of book variants and their derived attributes.
//! - Keep derived-field rules (age, category, pricing) free of I/O.
//!
//! # Invariants
//! - Every book carries a stable `BookId` in addition to its position.
//! - Variant is fixed at construction.

pub mod book;
pub mod category;
pub mod pricing;
