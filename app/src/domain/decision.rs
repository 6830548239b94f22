//! # Decision pipeline
//!
//! Applies an admin's verdict to a bill: builds the updated record, hands it
//! to the store, and navigates back to the review panel root. Persistence is
//! deliberately not awaited-on by the navigation step: the UI assumes
//! eventual consistency, and a store failure only shows up in the log and in
//! the returned outcome.

use std::sync::Arc;

use log::{error, warn};

use shared::{Bill, UpdatePayload, Verdict};

use crate::domain::PersistOutcome;
use crate::navigation::{Navigator, Route};
use crate::storage::BillStore;

/// Result of one decision: where we navigated, and what the store said.
#[derive(Debug)]
pub struct DecisionOutcome {
    pub persistence: PersistOutcome,
    pub route: Route,
}

/// Accept/refuse submission handler for the review panel.
pub struct DecisionPipeline {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
}

impl DecisionPipeline {
    pub fn new(store: Option<Arc<dyn BillStore>>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Apply `verdict` to `bill` with the reviewer's comment (may be empty).
    ///
    /// Navigation back to the dashboard is unconditional; a missing store
    /// skips the update entirely.
    pub async fn decide(&self, bill: &Bill, verdict: Verdict, comment: &str) -> DecisionOutcome {
        let record = Bill {
            status: verdict.terminal_status(),
            comment_admin: Some(comment.to_string()),
            ..bill.clone()
        };

        let persistence = self.persist(record).await;
        self.navigator.navigate(Route::Dashboard);

        DecisionOutcome {
            persistence,
            route: Route::Dashboard,
        }
    }

    async fn persist(&self, record: Bill) -> PersistOutcome {
        let store = match &self.store {
            Some(store) => store,
            None => return PersistOutcome::Skipped,
        };
        let selector = match &record.id {
            Some(id) => id.clone(),
            None => {
                warn!("decision on a bill without an id, skipping update");
                return PersistOutcome::Skipped;
            }
        };
        let data = match serde_json::to_string(&record) {
            Ok(data) => data,
            Err(e) => return PersistOutcome::Failed(e.to_string()),
        };

        match store.update(UpdatePayload { data, selector }).await {
            Ok(updated) => PersistOutcome::Saved(updated),
            Err(e) => {
                error!("failed to persist verdict for bill {:?}: {:#}", record.id, e);
                PersistOutcome::Failed(e.to_string())
            }
        }
    }
}
