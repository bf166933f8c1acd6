//! Guided quiz flow.
//!
//! # Responsibility
//! - Fold a sequence of partial quiz answers into one `Criteria`.
//! - Hold the built-in question bank and per-run answer state.
//!
//! # Invariants
//! - Notes accumulate across answers; gender/family are first-match-wins.
//! - An empty answer list yields a valid, empty `Criteria`.

pub mod aggregate;
pub mod questions;
pub mod session;
