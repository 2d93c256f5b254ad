//! Caller-facing input services.
//!
//! # Responsibility
//! - Check raw presentation input before it reaches the model.
//! - Keep form text handling out of the catalog core.

pub mod book_form;
