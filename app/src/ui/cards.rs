//! # Ticket cards
//!
//! Pure render functions producing the card descriptions shown in the
//! review panel's per-status lists. External view collaborators may call
//! them with any bill collection, including an empty one.

use shared::Bill;

use crate::domain::format::format_date;

/// Renderable description of one bill ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCard {
    pub id: String,
    /// Employee name derived from the email local part.
    pub display_name: String,
    /// Expense title
    pub title: String,
    pub amount_label: String,
    /// Formatted date; raw stored value when formatting fails.
    pub date_label: String,
    pub type_label: String,
    pub proof_url: Option<String>,
    /// True for the ticket whose decision form is currently open.
    pub highlighted: bool,
}

/// Derive the displayed employee name from an email address: a
/// `first.last@...` local part splits into first and last name, anything
/// else is shown as a bare last name.
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    match local.split_once('.') {
        Some((first, last)) => format!("{} {}", first, last),
        None => local.to_string(),
    }
}

/// Render one bill as a ticket card.
pub fn card(bill: &Bill) -> TicketCard {
    let date_label = format_date(&bill.date).unwrap_or_else(|_| bill.date.clone());
    TicketCard {
        id: bill.id.clone().unwrap_or_default(),
        display_name: display_name(&bill.email),
        title: bill.name.clone(),
        amount_label: format!("{} €", bill.amount),
        date_label,
        type_label: bill.bill_type.clone(),
        proof_url: bill.file_url.clone(),
        highlighted: false,
    }
}

/// Render a bill collection as ticket cards; empty input renders nothing.
pub fn cards(bills: &[Bill]) -> Vec<TicketCard> {
    bills.iter().map(card).collect()
}
