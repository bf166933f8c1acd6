//! Discovery tuning knobs.
//!
//! # Responsibility
//! - Collect the result-set sizes and timing constants used by the flows.
//! - Allow callers to override them from a serialized config document.
//!
//! # Invariants
//! - `normalized()` never returns a zero limit or slot count.

use crate::compare::slots::COMPARE_SLOT_COUNT;
use crate::model::criteria::DEFAULT_CRITERIA_LIMIT;
use crate::quiz::session::QUIZ_RESULT_LIMIT;
use serde::{Deserialize, Serialize};

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
const DEFAULT_SUGGESTION_MIN_CHARS: usize = 2;
const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Tunables shared by the discovery flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Result-set size for find-by-notes queries.
    pub criteria_limit: u32,
    /// Result-set size for the final quiz view.
    pub quiz_result_limit: u32,
    /// Quiet period before a search keystroke is sent.
    pub search_debounce_ms: u64,
    /// Shorter queries clear suggestions instead of searching.
    pub suggestion_min_chars: usize,
    pub suggestion_limit: usize,
    pub compare_slots: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            criteria_limit: DEFAULT_CRITERIA_LIMIT,
            quiz_result_limit: QUIZ_RESULT_LIMIT,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            suggestion_min_chars: DEFAULT_SUGGESTION_MIN_CHARS,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            compare_slots: COMPARE_SLOT_COUNT,
        }
    }
}

impl DiscoveryConfig {
    /// Replaces zero limits and slot counts with defaults.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        Self {
            criteria_limit: non_zero_or(self.criteria_limit, defaults.criteria_limit),
            quiz_result_limit: non_zero_or(self.quiz_result_limit, defaults.quiz_result_limit),
            search_debounce_ms: self.search_debounce_ms,
            suggestion_min_chars: self.suggestion_min_chars,
            suggestion_limit: non_zero_or(self.suggestion_limit, defaults.suggestion_limit),
            compare_slots: non_zero_or(self.compare_slots, defaults.compare_slots),
        }
    }
}

fn non_zero_or<T: Default + PartialEq>(value: T, fallback: T) -> T {
    if value == T::default() {
        fallback
    } else {
        value
    }
}
