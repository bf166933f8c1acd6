//! Find-by-notes orchestration.
//!
//! # Responsibility
//! - Own the note selection and filter state for one finder view.
//! - Turn every state transition into a fresh query plan.
//! - Apply only the response of the latest issued query.
//!
//! # Invariants
//! - Every transition issues a new ticket, superseding in-flight queries.
//! - An empty selection clears results and issues no service call.
//! - Failed queries never roll back selection or filter edits.
//! - Applied scores are clamped to `[0, 1]`.

use crate::config::DiscoveryConfig;
use crate::model::criteria::{build_criteria, normalize_filter_value, Criteria};
use crate::model::fragrance::{Gender, ScoredFragrance};
use crate::selection::tracker::SelectionSet;
use crate::service::catalog::{FragranceCatalog, ServiceError, ServiceResult};
use crate::service::sequencer::{RequestSequencer, RequestTicket, ResolveOutcome};
use log::{debug, info, warn};

/// Query to run after a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub ticket: RequestTicket,
    /// `None` when nothing is selected: do not call the service.
    pub criteria: Option<Criteria>,
}

/// State holder for the find-by-notes view.
#[derive(Debug)]
pub struct NoteFinder {
    selection: SelectionSet,
    gender: Option<Gender>,
    family: Option<String>,
    limit: u32,
    sequencer: RequestSequencer,
    results: Vec<ScoredFragrance>,
    last_error: Option<ServiceError>,
}

impl NoteFinder {
    pub fn new(limit: u32) -> Self {
        Self {
            selection: SelectionSet::new(),
            gender: None,
            family: None,
            limit,
            sequencer: RequestSequencer::new(),
            results: Vec::new(),
            last_error: None,
        }
    }

    pub fn with_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.normalized().criteria_limit)
    }

    /// Toggles one note and plans the re-query.
    pub fn toggle_note(&mut self, note_name: &str) -> QueryPlan {
        let selected = self.selection.toggle(note_name);
        debug!(
            "event=note_toggle module=finder status=ok note={note_name} selected={selected} total={}",
            self.selection.len()
        );
        self.plan()
    }

    /// Clears the selection; the resulting plan never calls the service.
    pub fn clear(&mut self) -> QueryPlan {
        self.selection.clear();
        self.plan()
    }

    /// Sets the gender filter; `Gender::All` or `None` removes it.
    pub fn set_gender(&mut self, gender: Option<Gender>) -> QueryPlan {
        self.gender = gender.and_then(Gender::as_filter);
        self.plan()
    }

    /// Sets the family filter; `"All"`, blank or `None` removes it.
    pub fn set_family(&mut self, family: Option<&str>) -> QueryPlan {
        self.family = normalize_filter_value(family);
        self.plan()
    }

    /// Criteria derived from current state.
    pub fn criteria(&self) -> Criteria {
        build_criteria(
            self.selection.iter(),
            self.gender,
            self.family.as_deref(),
            Some(i64::from(self.limit)),
        )
    }

    /// Issues a ticket for the current state.
    pub fn plan(&mut self) -> QueryPlan {
        let ticket = self.sequencer.issue();
        let criteria = self.criteria();
        if criteria.is_empty_query() {
            self.results.clear();
            self.last_error = None;
            debug!(
                "event=finder_query module=finder status=skipped ticket={} reason=empty_selection",
                ticket.sequence()
            );
            return QueryPlan {
                ticket,
                criteria: None,
            };
        }

        debug!(
            "event=finder_query module=finder status=start ticket={} notes={}",
            ticket.sequence(),
            criteria.notes.len()
        );
        QueryPlan {
            ticket,
            criteria: Some(criteria),
        }
    }

    /// Applies a response if `ticket` is still the latest request.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: ServiceResult<Vec<ScoredFragrance>>,
    ) -> ResolveOutcome {
        if !self.sequencer.is_current(ticket) {
            debug!(
                "event=finder_query module=finder status=superseded ticket={}",
                ticket.sequence()
            );
            return ResolveOutcome::Superseded;
        }

        match result {
            Ok(mut items) => {
                info!(
                    "event=finder_query module=finder status=ok ticket={} results={}",
                    ticket.sequence(),
                    items.len()
                );
                for item in &mut items {
                    item.score = item.normalized_score();
                }
                self.results = items;
                self.last_error = None;
                ResolveOutcome::Applied(self.results.len())
            }
            Err(err) => {
                warn!(
                    "event=finder_query module=finder status=error ticket={} error={err}",
                    ticket.sequence()
                );
                self.last_error = Some(err);
                ResolveOutcome::Failed
            }
        }
    }

    /// Runs `plan` against `catalog` synchronously and applies the response.
    pub fn refresh<C: FragranceCatalog + ?Sized>(
        &mut self,
        plan: QueryPlan,
        catalog: &C,
    ) -> ResolveOutcome {
        let Some(criteria) = plan.criteria else {
            return ResolveOutcome::Cleared;
        };
        let result = catalog.recommend_by_criteria(&criteria);
        self.resolve(plan.ticket, result)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn results(&self) -> &[ScoredFragrance] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&ServiceError> {
        self.last_error.as_ref()
    }
}
