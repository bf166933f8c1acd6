//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate selection, sequencing and the recommendation surface.
//! - Orchestrate preference store calls for favorites and collections.
//! - Keep callers decoupled from storage and transport details.

pub mod catalog;
pub mod collection_service;
pub mod favorites_service;
pub mod note_finder;
pub mod sequencer;
