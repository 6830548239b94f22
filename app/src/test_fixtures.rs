//! Bill fixtures shared by the unit tests.

use shared::{Bill, BillStatus};

/// Minimal bill with the fields the filter and panel logic care about.
pub fn bill(id: &str, email: &str, status: BillStatus, date: &str) -> Bill {
    Bill {
        id: Some(id.to_string()),
        email: email.to_string(),
        bill_type: "Transports".to_string(),
        name: format!("expense {}", id),
        amount: 100.0,
        date: date.to_string(),
        vat: "20".to_string(),
        pct: 20.0,
        commentary: String::new(),
        file_url: Some(format!("https://example.com/{}.jpg", id)),
        file_name: Some(format!("{}.jpg", id)),
        status,
        comment_admin: None,
    }
}

/// Four bills mirroring the legacy dashboard fixtures: one pending, one
/// accepted, two refused.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        bill("p-1", "jane.doe@billdesk.io", BillStatus::Pending, "2004-04-04"),
        bill("a-1", "marc.petit@billdesk.io", BillStatus::Accepted, "2003-03-03"),
        bill("r-1", "jane.doe@billdesk.io", BillStatus::Refused, "2002-02-02"),
        bill("r-2", "lea.martin@billdesk.io", BillStatus::Refused, "2001-01-01"),
    ]
}
