//! Free-text search helpers.
//!
//! # Responsibility
//! - Debounce keystrokes before a search request leaves core.
//! - Sequence suggestion requests so stale responses are dropped.
//! - Local name/brand and note filtering over already-fetched items.

pub mod debounce;
pub mod local;
pub mod suggest;
