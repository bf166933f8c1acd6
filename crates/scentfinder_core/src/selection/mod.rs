//! Note selection state for the find-by-notes flow.
//!
//! # Responsibility
//! - Track which notes the user has toggled on, regardless of source.
//!
//! # Invariants
//! - Toggling the same name twice restores the original selection.
//! - The tracker does not validate names against the catalog.

pub mod tracker;
