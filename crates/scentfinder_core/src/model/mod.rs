//! Domain model for fragrance discovery.
//!
//! # Responsibility
//! - Define the catalog records (`Fragrance`, `Note`) consumed from the
//!   recommendation surface.
//! - Define the canonical `Criteria` query shape sent back to it.
//!
//! # Invariants
//! - Catalog records are immutable once fetched; core never mutates them.
//! - `Criteria` never carries the `All` sentinel as a concrete filter.

pub mod criteria;
pub mod fragrance;
pub mod note;
