//! # Employee bill list
//!
//! Fetches the signed-in employee's bills, formats each record for display
//! with per-record error isolation, and exposes the "new bill" and "view
//! proof" actions.

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

use shared::Bill;

use crate::domain::format::{format_date, format_status};
use crate::navigation::{Navigator, Route};
use crate::storage::BillStore;
use crate::ui::ProofView;

/// One formatted row of the employee list.
#[derive(Debug, Clone, PartialEq)]
pub struct BillSummary {
    pub id: Option<String>,
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    /// Formatted display date; falls back to the raw stored value when
    /// formatting fails.
    pub date: String,
    pub status_label: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

/// Employee-side list view over the bill store.
pub struct BillsList {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
}

impl BillsList {
    pub fn new(store: Option<Arc<dyn BillStore>>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Fetch and format the bill collection.
    ///
    /// Returns `None` when no store is configured, which callers must treat
    /// as a distinct case from an empty result. Ordering follows the store.
    pub async fn get_bills(&self) -> Option<Result<Vec<BillSummary>>> {
        let store = match &self.store {
            Some(store) => store,
            None => {
                error!("no bill store configured, cannot fetch bills");
                return None;
            }
        };

        let result = store.list().await.map(|bills| {
            let summaries: Vec<BillSummary> = bills.into_iter().map(summarize).collect();
            info!("fetched {} bills", summaries.len());
            summaries
        });
        if let Err(error) = &result {
            error!("failed to fetch bills: {:#}", error);
        }
        Some(result)
    }

    /// Open the new-bill form.
    pub fn open_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// Image-viewer description for a row's proof file, if it has one.
    pub fn view_proof(&self, summary: &BillSummary) -> Option<ProofView> {
        summary.file_url.as_ref().map(|url| ProofView {
            file_url: url.clone(),
        })
    }
}

/// Format one record, isolating date-formatting failures: a record with a
/// malformed date keeps its raw date and is still included.
fn summarize(bill: Bill) -> BillSummary {
    let date = match format_date(&bill.date) {
        Ok(formatted) => formatted,
        Err(e) => {
            error!("{} for bill {:?}, keeping raw date", e, bill.id);
            bill.date.clone()
        }
    };
    BillSummary {
        id: bill.id,
        bill_type: bill.bill_type,
        name: bill.name,
        amount: bill.amount,
        date,
        status_label: format_status(bill.status.as_str()),
        file_url: bill.file_url,
        file_name: bill.file_name,
    }
}
