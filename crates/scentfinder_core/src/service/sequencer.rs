//! Last-request-wins sequencing for superseded queries.
//!
//! # Invariants
//! - Tickets are strictly increasing per sequencer.
//! - Only the most recently issued ticket is current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Tag attached to one outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing request tickets.
///
/// Safe to share across threads; issuing a new ticket supersedes every
/// earlier one.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes all previous ones.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns whether `ticket` is the latest issued ticket.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Supersedes every outstanding ticket without starting a request.
    pub fn cancel_all(&self) {
        self.issue();
    }
}

/// Outcome of handing a response back to its issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Response applied; carries the number of items now shown.
    Applied(usize),
    /// A newer request was issued; the response was discarded.
    Superseded,
    /// Current request failed; local selection state is kept.
    Failed,
    /// No request was needed; results were cleared.
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::RequestSequencer;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn newer_ticket_supersedes_older() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn cancel_all_supersedes_outstanding_ticket() {
        let sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();
        sequencer.cancel_all();
        assert!(!sequencer.is_current(ticket));
    }

    #[test]
    fn tickets_stay_unique_across_threads() {
        let sequencer = Arc::new(RequestSequencer::new());
        let handles = (0..4)
            .map(|_| {
                let sequencer = Arc::clone(&sequencer);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| sequencer.issue().sequence())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        let mut all = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
