//! Recommendation surface contract.
//!
//! # Responsibility
//! - Define the logical operations core issues against the remote
//!   fragrance catalog and ranking service.
//!
//! # Invariants
//! - Ranking and scoring happen behind this trait, never in core.
//! - Transport failures surface as `ServiceError::Transient`.

use crate::model::criteria::Criteria;
use crate::model::fragrance::{
    FilterOptions, Fragrance, FragranceFilter, FragranceId, ScoredFragrance,
};
use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error taxonomy of the recommendation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Request rejected as malformed.
    Validation(String),
    /// Requested fragrance does not exist.
    NotFound(FragranceId),
    /// Network or service failure; retry by re-issuing the user action.
    Transient(String),
}

impl ServiceError {
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "invalid request: {message}"),
            Self::NotFound(id) => write!(f, "fragrance not found: {id}"),
            Self::Transient(message) => write!(f, "recommendation service unavailable: {message}"),
        }
    }
}

impl Error for ServiceError {}

/// Remote fragrance catalog and recommendation operations.
pub trait FragranceCatalog {
    /// Lists fragrances; an unfiltered request returns the full catalog.
    fn list_fragrances(&self, filter: &FragranceFilter) -> ServiceResult<Vec<Fragrance>>;
    /// Fails with [`ServiceError::NotFound`] for unknown ids.
    fn get_fragrance(&self, id: FragranceId) -> ServiceResult<Fragrance>;
    /// Fragrances ranked by similarity to `id`, scores in `[0, 1]`.
    fn get_similar(&self, id: FragranceId, limit: u32) -> ServiceResult<Vec<ScoredFragrance>>;
    /// Fragrances ranked by note match against `criteria`.
    fn recommend_by_criteria(&self, criteria: &Criteria) -> ServiceResult<Vec<ScoredFragrance>>;
    fn list_notes(&self) -> ServiceResult<Vec<Note>>;
    fn get_filter_options(&self) -> ServiceResult<FilterOptions>;
    fn get_random_fragrance(&self) -> ServiceResult<Fragrance>;
}
