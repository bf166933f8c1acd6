//! Side-by-side fragrance comparison.
//!
//! # Responsibility
//! - Compute shared notes across a small set of loaded fragrances.
//! - Annotate each fragrance's notes as shared or unique.
//! - Manage the fixed compare slots that feed the analyzer.
//!
//! # Invariants
//! - `shared` content is independent of input order; its display order
//!   follows the first fragrance.
//! - Fewer than two fragrances produce no result, never a panic.

pub mod analyzer;
pub mod slots;
