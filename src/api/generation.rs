//! Response Generations
//!
//! List views take a ticket before each fetch and apply the response only if
//! no newer fetch has started since.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; every earlier ticket becomes stale
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let generation = Generation::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.clone().begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let generation = Generation::new();
        let page_one = generation.begin();
        let page_two = generation.begin();
        // page two lands first, then the slower page one
        let mut applied = Vec::new();
        for (ticket, label) in [(page_two, "two"), (page_one, "one")] {
            if generation.is_current(ticket) {
                applied.push(label);
            }
        }
        assert_eq!(applied, vec!["two"]);
    }

    #[test]
    fn test_clearing_retires_inflight_ticket() {
        let generation = Generation::new();
        let inflight = generation.begin();
        // results cleared without a new fetch
        generation.begin();
        assert!(!generation.is_current(inflight));
    }
}
