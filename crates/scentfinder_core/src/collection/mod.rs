//! Favorite and collection membership editing.
//!
//! # Responsibility
//! - Pure set operations over fragrance identifiers.
//! - Named collection records and their idempotent member edits.
//!
//! # Invariants
//! - Toggling the same id twice restores the original membership.
//! - Adding a present member or removing an absent one is a no-op.
//! - Collection names are non-blank after trimming.

pub mod editor;
pub mod identifier_set;
