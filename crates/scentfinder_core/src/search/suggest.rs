//! Debounced, sequenced search suggestions.
//!
//! # Responsibility
//! - Turn raw keystrokes into at most one suggestion request per quiet period.
//! - Drop responses that arrive after a newer request was issued.
//!
//! # Invariants
//! - Queries shorter than the minimum length clear suggestions without a request.
//! - Applied suggestions never exceed the configured limit.
//! - A response is applied only if no keystroke followed its request.

use crate::config::DiscoveryConfig;
use crate::model::fragrance::{Fragrance, FragranceFilter};
use crate::search::debounce::Debouncer;
use crate::search::local::normalize_search_text;
use crate::service::catalog::{FragranceCatalog, ServiceResult};
use crate::service::sequencer::{RequestSequencer, RequestTicket, ResolveOutcome};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Request ready to be sent to `listFragrances`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub ticket: RequestTicket,
    pub filter: FragranceFilter,
}

/// Result of polling the suggestion box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPoll {
    /// Nothing due yet.
    Idle,
    /// Query too short; suggestions were cleared.
    Cleared,
    Request(SuggestionRequest),
}

/// Search-as-you-type state.
#[derive(Debug)]
pub struct SuggestionBox {
    debouncer: Debouncer<String>,
    sequencer: RequestSequencer,
    min_chars: usize,
    limit: usize,
    suggestions: Vec<Fragrance>,
}

impl SuggestionBox {
    pub fn new(config: &DiscoveryConfig) -> Self {
        let config = config.normalized();
        Self {
            debouncer: Debouncer::new(Duration::from_millis(config.search_debounce_ms)),
            sequencer: RequestSequencer::new(),
            min_chars: config.suggestion_min_chars,
            limit: config.suggestion_limit,
            suggestions: Vec::new(),
        }
    }

    /// Records a keystroke; resets the debounce timer and supersedes any
    /// request still in flight for older text.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.sequencer.cancel_all();
        self.debouncer.push(normalize_search_text(text), now);
    }

    /// Fires the pending query once the input has been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> SuggestionPoll {
        let Some(query) = self.debouncer.poll(now) else {
            return SuggestionPoll::Idle;
        };

        if query.chars().count() < self.min_chars {
            self.sequencer.cancel_all();
            self.suggestions.clear();
            return SuggestionPoll::Cleared;
        }

        let ticket = self.sequencer.issue();
        debug!(
            "event=suggest_query module=search status=start ticket={} query_len={}",
            ticket.sequence(),
            query.chars().count()
        );
        SuggestionPoll::Request(SuggestionRequest {
            ticket,
            filter: FragranceFilter::search(&query),
        })
    }

    /// Applies a response if its ticket is still current.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: ServiceResult<Vec<Fragrance>>,
    ) -> ResolveOutcome {
        if !self.sequencer.is_current(ticket) {
            debug!(
                "event=suggest_query module=search status=superseded ticket={}",
                ticket.sequence()
            );
            return ResolveOutcome::Superseded;
        }

        match result {
            Ok(mut items) => {
                items.truncate(self.limit);
                self.suggestions = items;
                ResolveOutcome::Applied(self.suggestions.len())
            }
            Err(err) => {
                warn!(
                    "event=suggest_query module=search status=error ticket={} error={err}",
                    ticket.sequence()
                );
                self.suggestions.clear();
                ResolveOutcome::Failed
            }
        }
    }

    /// Sends `request` to `catalog` synchronously and applies the response.
    pub fn fetch<C: FragranceCatalog + ?Sized>(
        &mut self,
        request: SuggestionRequest,
        catalog: &C,
    ) -> ResolveOutcome {
        let result = catalog.list_fragrances(&request.filter);
        self.resolve(request.ticket, result)
    }

    /// Drops pending input and in-flight requests, e.g. on clear button.
    pub fn reset(&mut self) {
        self.debouncer.cancel();
        self.sequencer.cancel_all();
        self.suggestions.clear();
    }

    pub fn suggestions(&self) -> &[Fragrance] {
        &self.suggestions
    }
}
