//! Sequence generator tests
//!
//! Tests for shipment-number issuance:
//! - Fixed 9-character SEV-XXXXX format
//! - Monotonic, gap-free numbering under interleaved commits and rollbacks

use proptest::prelude::*;
use std::collections::HashSet;

use shared::calc::format_sequence;
use shared::types::SHIPMENT_NUMBER_PREFIX;

/// Mirror of the counter semantics: the increment only sticks when the
/// surrounding operation commits
struct CounterSim {
    committed: i64,
}

impl CounterSim {
    fn new() -> Self {
        Self { committed: 0 }
    }

    /// Draw the next number and commit the operation
    fn draw_committed(&mut self) -> String {
        self.committed += 1;
        format_sequence(SHIPMENT_NUMBER_PREFIX, self.committed)
    }

    /// Draw the next number, then roll the operation back
    fn draw_rolled_back(&self) -> String {
        format_sequence(SHIPMENT_NUMBER_PREFIX, self.committed + 1)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_first_number() {
        let mut counter = CounterSim::new();
        assert_eq!(counter.draw_committed(), "SEV-00001");
    }

    #[test]
    fn test_numbers_are_sequential() {
        let mut counter = CounterSim::new();
        assert_eq!(counter.draw_committed(), "SEV-00001");
        assert_eq!(counter.draw_committed(), "SEV-00002");
        assert_eq!(counter.draw_committed(), "SEV-00003");
    }

    /// A rolled-back draw releases its number for the next caller
    #[test]
    fn test_rollback_leaves_no_gap() {
        let mut counter = CounterSim::new();
        counter.draw_committed();

        let abandoned = counter.draw_rolled_back();
        assert_eq!(abandoned, "SEV-00002");

        // The next committed draw reuses the released number
        assert_eq!(counter.draw_committed(), "SEV-00002");
    }

    #[test]
    fn test_format_is_nine_characters() {
        assert_eq!(format_sequence(SHIPMENT_NUMBER_PREFIX, 1).len(), 9);
        assert_eq!(format_sequence(SHIPMENT_NUMBER_PREFIX, 99999).len(), 9);
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_sequence(SHIPMENT_NUMBER_PREFIX, 7), "SEV-00007");
        assert_eq!(format_sequence(SHIPMENT_NUMBER_PREFIX, 12345), "SEV-12345");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Every committed draw yields a distinct number
        #[test]
        fn prop_committed_draws_unique(count in 1usize..500) {
            let mut counter = CounterSim::new();
            let mut seen = HashSet::new();

            for _ in 0..count {
                prop_assert!(seen.insert(counter.draw_committed()));
            }
        }

        /// Committed numbers are dense: no gaps regardless of interleaved
        /// rollbacks
        #[test]
        fn prop_no_gaps_with_rollbacks(
            outcomes in prop::collection::vec(any::<bool>(), 1..200)
        ) {
            let mut counter = CounterSim::new();
            let mut issued = Vec::new();

            for commit in outcomes {
                if commit {
                    issued.push(counter.draw_committed());
                } else {
                    counter.draw_rolled_back();
                }
            }

            // The committed run is exactly SEV-00001..SEV-{n}
            for (i, number) in issued.iter().enumerate() {
                prop_assert_eq!(
                    number,
                    &format_sequence(SHIPMENT_NUMBER_PREFIX, (i + 1) as i64)
                );
            }
        }

        /// Numbers sort lexicographically in issue order within the padded range
        #[test]
        fn prop_issue_order_is_sort_order(count in 2usize..200) {
            let mut counter = CounterSim::new();
            let issued: Vec<String> = (0..count).map(|_| counter.draw_committed()).collect();

            let mut sorted = issued.clone();
            sorted.sort();
            prop_assert_eq!(issued, sorted);
        }
    }
}
