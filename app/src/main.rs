//! Demo binary: wires the pipelines against the CSV store and walks one
//! bill through the full lifecycle. Run with `RUST_LOG=info` to watch the
//! pipelines log.

use std::sync::Arc;

use anyhow::Result;
use log::info;

use shared::{BillForm, BillStatus, SessionUser, UserType, Verdict};

use billdesk_app::domain::bills_list::BillsList;
use billdesk_app::domain::decision::DecisionPipeline;
use billdesk_app::domain::new_bill::NewBillPipeline;
use billdesk_app::navigation::{LoggingNavigator, Navigator};
use billdesk_app::session::{reviewer_exclusions, MemorySession};
use billdesk_app::storage::csv::CsvBillStore;
use billdesk_app::storage::BillStore;
use billdesk_app::ui::review_panel::ReviewPanel;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("starting billdesk demo");

    let data_dir = std::env::temp_dir().join("billdesk-demo");
    let store: Arc<dyn BillStore> = Arc::new(CsvBillStore::new(&data_dir)?);
    let navigator: Arc<dyn Navigator> = Arc::new(LoggingNavigator);
    let session = Arc::new(MemorySession::new());

    // An employee submits a bill with its proof file.
    session.set_user(SessionUser {
        email: "jane.doe@billdesk.io".to_string(),
        user_type: UserType::Employee,
    });
    let mut new_bill =
        NewBillPipeline::new(Some(store.clone()), navigator.clone(), session.clone());
    new_bill
        .handle_file_selected("taxi.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0])
        .await?;
    new_bill
        .submit(BillForm {
            bill_type: "Transports".to_string(),
            name: "Taxi aéroport".to_string(),
            amount: 42.0,
            date: "2023-06-13".to_string(),
            vat: "20".to_string(),
            pct: 20.0,
            commentary: "retour de mission".to_string(),
        })
        .await;

    // The employee checks their list.
    let list = BillsList::new(Some(store.clone()), navigator.clone());
    if let Some(rows) = list.get_bills().await {
        for row in rows? {
            println!(
                "{:<20} {:<12} {:>8} € {}",
                row.name, row.date, row.amount, row.status_label
            );
        }
    }

    // An admin opens the review panel and accepts the pending bill.
    session.set_user(SessionUser {
        email: "admin@billdesk.io".to_string(),
        user_type: UserType::Admin,
    });
    let bills = store.list().await?;
    let mut panel = ReviewPanel::new(bills.clone(), reviewer_exclusions(session.as_ref()));
    let tickets = panel.toggle_status(BillStatus::Pending);
    println!("{} pending ticket(s) to review", tickets.len());

    let decision = DecisionPipeline::new(Some(store.clone()), navigator.clone());
    for pending in bills.iter().filter(|b| b.status == BillStatus::Pending) {
        let outcome = decision.decide(pending, Verdict::Accepted, "ok").await;
        println!("decided {:?}: saved={}", pending.id, outcome.persistence.is_saved());
    }

    Ok(())
}
