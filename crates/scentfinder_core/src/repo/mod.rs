//! Persistence contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the preference storage surface used by favorites/collections.
//! - Keep SQL and JSON encoding details out of the service layer.
//!
//! # Invariants
//! - Repository APIs distinguish absent values (empty) from corrupt ones (error).

pub mod preference_repo;
