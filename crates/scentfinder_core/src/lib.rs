//! Core discovery logic for ScentFinder.
//! This crate owns the client-side invariants of the fragrance discovery
//! flows; ranking stays behind [`FragranceCatalog`].

pub mod collection;
pub mod compare;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod quiz;
pub mod repo;
pub mod search;
pub mod selection;
pub mod service;

pub use collection::editor::{create_collection, Collection, CollectionId, InvalidNameError};
pub use collection::identifier_set::{toggle_membership, IdentifierSet};
pub use compare::analyzer::{compare, ComparisonResult, FragranceComparison, TaggedNote};
pub use compare::slots::{CompareSlots, SlotError};
pub use config::DiscoveryConfig;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::criteria::{build_criteria, Criteria};
pub use model::fragrance::{
    FilterOptions, Fragrance, FragranceFilter, FragranceId, Gender, ScoredFragrance,
};
pub use model::note::{Note, NoteRef, NoteType};
pub use quiz::aggregate::{aggregate, QuizAnswer};
pub use quiz::questions::{default_questions, QuizQuestion};
pub use quiz::session::{QuizError, QuizSession, QuizStep};
pub use repo::preference_repo::{PreferenceStore, RepoError, RepoResult, SqlitePreferenceStore};
pub use search::local::{filter_by_name_or_brand, group_notes_by_type, NotesByType};
pub use search::suggest::{SuggestionBox, SuggestionPoll, SuggestionRequest};
pub use selection::tracker::SelectionSet;
pub use service::catalog::{FragranceCatalog, ServiceError, ServiceResult};
pub use service::collection_service::{CollectionService, CollectionServiceError};
pub use service::favorites_service::{filter_favorites, FavoritesService};
pub use service::note_finder::{NoteFinder, QueryPlan};
pub use service::sequencer::{RequestSequencer, RequestTicket, ResolveOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
