//! # Domain
//!
//! The bill lifecycle logic: display formatting, the status filter feeding
//! the review queue, and the three pipelines (employee list, new-bill
//! submission, admin decision).

pub mod bills_list;
pub mod decision;
pub mod filter;
pub mod format;
pub mod new_bill;

/// What happened to a fire-and-forget persistence call.
///
/// The legacy client dropped these failures on the floor after logging them;
/// the outcome is carried back to the caller instead so it stays observable,
/// but navigation is still never gated on it.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistOutcome {
    /// The store accepted the record.
    Saved(shared::Bill),
    /// The store rejected the record; the message was also logged.
    Failed(String),
    /// No store configured, or no identifier to key the update by.
    Skipped,
}

impl PersistOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistOutcome::Saved(_))
    }
}
