//! # Review-queue filter
//!
//! Partitions a bill collection by status for the admin review panel,
//! excluding authors a reviewer must never see: the designated test accounts
//! and the reviewer's own address. The exclusion predicate is always the
//! same; execution mode only decides how the set is populated.

use std::collections::HashSet;

use shared::{Bill, BillStatus};

/// Accounts used by QA fixtures; their bills never reach a real reviewer.
pub const TEST_ACCOUNTS: [&str; 3] = [
    "qa.fixtures@billdesk.io",
    "demo.employee@billdesk.io",
    "smoke.test@billdesk.io",
];

/// Set of author emails excluded from the review queue.
#[derive(Debug, Clone, Default)]
pub struct ReviewerExclusions {
    excluded: HashSet<String>,
}

impl ReviewerExclusions {
    /// Empty set: every author is visible. This is the test-mode default.
    pub fn none() -> Self {
        Self::default()
    }

    /// Caller-populated set, for callers that want exclusions without a
    /// signed-in reviewer.
    pub fn with_accounts<I>(emails: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            excluded: emails.into_iter().collect(),
        }
    }

    /// Production-mode set: the configured test accounts plus the reviewer
    /// themselves (reviewers do not review their own submissions).
    pub fn for_reviewer(reviewer_email: &str) -> Self {
        let mut excluded: HashSet<String> =
            TEST_ACCOUNTS.iter().map(|account| account.to_string()).collect();
        excluded.insert(reviewer_email.to_string());
        Self { excluded }
    }

    pub fn is_excluded(&self, email: &str) -> bool {
        self.excluded.contains(email)
    }
}

/// Bills with the requested status, in original relative order, minus
/// excluded authors. `None` or empty input yields an empty list.
pub fn filtered_bills(
    bills: Option<&[Bill]>,
    status: BillStatus,
    exclusions: &ReviewerExclusions,
) -> Vec<Bill> {
    match bills {
        Some(bills) if !bills.is_empty() => bills
            .iter()
            .filter(|bill| bill.status == status && !exclusions.is_excluded(&bill.email))
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{bill, fixture_bills};

    #[test]
    fn missing_or_empty_input_yields_an_empty_list() {
        for status in BillStatus::all() {
            assert!(filtered_bills(None, status, &ReviewerExclusions::none()).is_empty());
            assert!(filtered_bills(Some(&[]), status, &ReviewerExclusions::none()).is_empty());
        }
    }

    #[test]
    fn partitions_by_status() {
        let bills = fixture_bills();
        let none = ReviewerExclusions::none();
        assert_eq!(filtered_bills(Some(&bills), BillStatus::Pending, &none).len(), 1);
        assert_eq!(filtered_bills(Some(&bills), BillStatus::Accepted, &none).len(), 1);
        assert_eq!(filtered_bills(Some(&bills), BillStatus::Refused, &none).len(), 2);
    }

    #[test]
    fn preserves_original_relative_order() {
        let bills = fixture_bills();
        let refused = filtered_bills(Some(&bills), BillStatus::Refused, &ReviewerExclusions::none());
        let expected: Vec<&Bill> = bills
            .iter()
            .filter(|b| b.status == BillStatus::Refused)
            .collect();
        assert_eq!(refused.len(), expected.len());
        for (got, want) in refused.iter().zip(expected) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn excludes_test_accounts_and_the_reviewer() {
        let mut bills = fixture_bills();
        bills.push(bill("fx-1", TEST_ACCOUNTS[0], BillStatus::Pending, "2023-01-10"));
        bills.push(bill("self-1", "admin@billdesk.io", BillStatus::Pending, "2023-01-11"));

        let exclusions = ReviewerExclusions::for_reviewer("admin@billdesk.io");
        let pending = filtered_bills(Some(&bills), BillStatus::Pending, &exclusions);
        assert!(pending.iter().all(|b| b.id.as_deref() != Some("fx-1")));
        assert!(pending.iter().all(|b| b.id.as_deref() != Some("self-1")));
        assert_eq!(pending.len(), 1);
    }

    #[test]
    fn empty_exclusion_set_keeps_everyone() {
        let mut bills = fixture_bills();
        bills.push(bill("fx-1", TEST_ACCOUNTS[0], BillStatus::Pending, "2023-01-10"));
        let pending = filtered_bills(Some(&bills), BillStatus::Pending, &ReviewerExclusions::none());
        assert_eq!(pending.len(), 2);
    }
}
