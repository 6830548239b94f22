//! # Review panel state machine
//!
//! Owns the admin dashboard's ephemeral view state: one expand/collapse flag
//! per status category, and a per-bill edit toggle keyed by bill id. The
//! legacy client tracked the edit toggle with a single shared counter; here
//! each bill id maps to an explicit state and transitions are a pure
//! function, with the tracked id deciding when a bill's sequence restarts.
//!
//! Nothing here mutates a bill: accepting or refusing goes through the
//! decision pipeline.

use std::collections::HashMap;

use shared::{Bill, BillStatus};

use crate::domain::filter::{filtered_bills, ReviewerExclusions};
use crate::ui::cards::{card, TicketCard};
use crate::ui::ProofView;

/// Per-bill edit toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketFocus {
    /// No selection yet
    Neutral,
    /// Decision form open for this bill
    EditingForm,
    /// Form collapsed back to the reviewed placeholder
    Finalized,
}

/// Pure transition applied when the tracked bill is selected. Selections
/// alternate between the open form and the collapsed placeholder; a
/// tracked-id change resets the state to `Neutral` before this runs, so a
/// freshly selected bill always lands on `EditingForm`.
pub fn next_focus(current: TicketFocus) -> TicketFocus {
    match current {
        TicketFocus::Neutral | TicketFocus::Finalized => TicketFocus::EditingForm,
        TicketFocus::EditingForm => TicketFocus::Finalized,
    }
}

/// Decision form scoped to one bill.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionForm {
    pub bill: Bill,
}

/// What the right-hand detail pane shows. `Finalized` renders the same
/// neutral placeholder as "no selection", so both map to `Neutral` here.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane {
    Neutral,
    EditForm(DecisionForm),
}

/// One status category's disclosure section.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSection {
    pub status: BillStatus,
    pub expanded: bool,
    /// Ticket list; empty while collapsed.
    pub tickets: Vec<TicketCard>,
}

/// Complete renderable description of the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub sections: Vec<StatusSection>,
    pub detail: DetailPane,
    pub proof: Option<ProofView>,
}

/// Admin review panel over a bill collection.
pub struct ReviewPanel {
    bills: Vec<Bill>,
    exclusions: ReviewerExclusions,
    expanded: HashMap<BillStatus, bool>,
    focus: HashMap<String, TicketFocus>,
    tracked_id: Option<String>,
    proof: Option<ProofView>,
}

impl ReviewPanel {
    pub fn new(bills: Vec<Bill>, exclusions: ReviewerExclusions) -> Self {
        Self {
            bills,
            exclusions,
            expanded: HashMap::new(),
            focus: HashMap::new(),
            tracked_id: None,
            proof: None,
        }
    }

    /// Toggle a status category's disclosure. Expanding returns the rendered
    /// ticket list; collapsing clears it and returns an empty list.
    pub fn toggle_status(&mut self, status: BillStatus) -> Vec<TicketCard> {
        if self.is_expanded(status) {
            self.collapse(status);
            return Vec::new();
        }
        self.expanded.insert(status, true);
        self.tickets_for(status)
    }

    /// Collapse a category. Collapsing an already-collapsed (or never
    /// expanded) category is a no-op.
    pub fn collapse(&mut self, status: BillStatus) {
        self.expanded.insert(status, false);
    }

    pub fn is_expanded(&self, status: BillStatus) -> bool {
        self.expanded.get(&status).copied().unwrap_or(false)
    }

    /// Handle a ticket selection, returning the bill's new focus state.
    ///
    /// The focus map is read and written within this single call; switching
    /// the tracked bill resets the newly tracked bill's sequence so it
    /// starts from the open form.
    pub fn select_ticket(&mut self, bill_id: &str) -> TicketFocus {
        if self.tracked_id.as_deref() != Some(bill_id) {
            self.tracked_id = Some(bill_id.to_string());
            self.focus.insert(bill_id.to_string(), TicketFocus::Neutral);
        }
        let current = self
            .focus
            .get(bill_id)
            .copied()
            .unwrap_or(TicketFocus::Neutral);
        let next = next_focus(current);
        self.focus.insert(bill_id.to_string(), next);
        next
    }

    /// Open the proof viewer for a ticket's file, if it has one. Only the
    /// currently displayed URL is retained.
    pub fn view_proof(&mut self, bill_id: &str) -> Option<ProofView> {
        let proof = self
            .bills
            .iter()
            .find(|bill| bill.id.as_deref() == Some(bill_id))
            .and_then(|bill| bill.file_url.as_ref())
            .map(|url| ProofView {
                file_url: url.clone(),
            });
        self.proof = proof.clone();
        proof
    }

    /// Render the whole panel from the current state.
    pub fn render(&self) -> PanelView {
        let sections = BillStatus::all()
            .into_iter()
            .map(|status| {
                let expanded = self.is_expanded(status);
                StatusSection {
                    status,
                    expanded,
                    tickets: if expanded {
                        self.tickets_for(status)
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        PanelView {
            sections,
            detail: self.detail_pane(),
            proof: self.proof.clone(),
        }
    }

    /// Filtered, date-descending ticket list for one category, with the
    /// ticket under edit highlighted and its siblings reset.
    fn tickets_for(&self, status: BillStatus) -> Vec<TicketCard> {
        let mut bills = filtered_bills(Some(&self.bills), status, &self.exclusions);
        // ISO dates compare lexicographically
        bills.sort_by(|a, b| b.date.cmp(&a.date));
        bills
            .iter()
            .map(|bill| {
                let mut ticket = card(bill);
                ticket.highlighted = self.is_editing(&ticket.id);
                ticket
            })
            .collect()
    }

    fn is_editing(&self, bill_id: &str) -> bool {
        self.tracked_id.as_deref() == Some(bill_id)
            && self.focus.get(bill_id) == Some(&TicketFocus::EditingForm)
    }

    fn detail_pane(&self) -> DetailPane {
        let tracked = match &self.tracked_id {
            Some(id) => id,
            None => return DetailPane::Neutral,
        };
        if self.focus.get(tracked) != Some(&TicketFocus::EditingForm) {
            return DetailPane::Neutral;
        }
        match self
            .bills
            .iter()
            .find(|bill| bill.id.as_deref() == Some(tracked.as_str()))
        {
            Some(bill) => DetailPane::EditForm(DecisionForm { bill: bill.clone() }),
            None => DetailPane::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{bill, fixture_bills};

    fn panel() -> ReviewPanel {
        ReviewPanel::new(fixture_bills(), ReviewerExclusions::none())
    }

    #[test]
    fn expanding_renders_only_that_status() {
        let mut panel = panel();
        let tickets = panel.toggle_status(BillStatus::Refused);
        assert_eq!(tickets.len(), 2);

        let view = panel.render();
        assert!(view.sections[2].expanded);
        assert_eq!(view.sections[2].tickets.len(), 2);
        assert!(view.sections[0].tickets.is_empty());
        assert!(view.sections[1].tickets.is_empty());
    }

    #[test]
    fn tickets_are_sorted_most_recent_first() {
        let mut panel = ReviewPanel::new(
            vec![
                bill("old", "a.b@billdesk.io", BillStatus::Pending, "2001-01-01"),
                bill("new", "a.b@billdesk.io", BillStatus::Pending, "2004-04-04"),
                bill("mid", "a.b@billdesk.io", BillStatus::Pending, "2002-02-02"),
            ],
            ReviewerExclusions::none(),
        );
        let tickets = panel.toggle_status(BillStatus::Pending);
        let ids: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }

    #[test]
    fn toggling_twice_returns_to_the_collapsed_render() {
        let mut panel = panel();
        let before = panel.render();

        panel.toggle_status(BillStatus::Pending);
        let collapsed = panel.toggle_status(BillStatus::Pending);
        assert!(collapsed.is_empty());
        assert_eq!(panel.render(), before);
    }

    #[test]
    fn collapsing_an_already_collapsed_category_is_a_no_op() {
        let mut panel = panel();
        let before = panel.render();
        panel.collapse(BillStatus::Accepted);
        panel.collapse(BillStatus::Accepted);
        assert_eq!(panel.render(), before);
    }

    #[test]
    fn excluded_authors_never_reach_the_ticket_list() {
        let mut bills = fixture_bills();
        bills.push(bill("self", "admin@billdesk.io", BillStatus::Pending, "2005-05-05"));
        let mut panel =
            ReviewPanel::new(bills, ReviewerExclusions::for_reviewer("admin@billdesk.io"));
        let tickets = panel.toggle_status(BillStatus::Pending);
        assert!(tickets.iter().all(|t| t.id != "self"));
    }

    #[test]
    fn selecting_a_ticket_opens_its_decision_form() {
        let mut panel = panel();
        panel.toggle_status(BillStatus::Pending);
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::EditingForm);

        match panel.render().detail {
            DetailPane::EditForm(form) => assert_eq!(form.bill.id.as_deref(), Some("p-1")),
            DetailPane::Neutral => panic!("expected the decision form"),
        }
    }

    #[test]
    fn two_selections_of_the_same_ticket_restore_the_starting_render() {
        let mut panel = panel();
        panel.toggle_status(BillStatus::Pending);
        let before = panel.render();

        panel.select_ticket("p-1");
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::Finalized);
        assert_eq!(panel.render(), before);
    }

    #[test]
    fn parity_continues_per_bill() {
        let mut panel = panel();
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::EditingForm);
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::Finalized);
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::EditingForm);
    }

    #[test]
    fn switching_bills_always_opens_the_new_form() {
        let mut panel = panel();
        panel.select_ticket("p-1");
        panel.select_ticket("p-1");
        // p-1 is parked on Finalized; a different bill still starts editing
        assert_eq!(panel.select_ticket("a-1"), TicketFocus::EditingForm);
        // and coming back to p-1 restarts its sequence from the form
        assert_eq!(panel.select_ticket("p-1"), TicketFocus::EditingForm);
    }

    #[test]
    fn selected_ticket_is_highlighted_and_siblings_are_not() {
        let mut panel = ReviewPanel::new(
            vec![
                bill("r-1", "a.b@billdesk.io", BillStatus::Refused, "2002-02-02"),
                bill("r-2", "c.d@billdesk.io", BillStatus::Refused, "2001-01-01"),
            ],
            ReviewerExclusions::none(),
        );
        panel.toggle_status(BillStatus::Refused);
        panel.select_ticket("r-1");

        let view = panel.render();
        let tickets = &view.sections[2].tickets;
        assert!(tickets.iter().find(|t| t.id == "r-1").unwrap().highlighted);
        assert!(!tickets.iter().find(|t| t.id == "r-2").unwrap().highlighted);

        // collapsing the form un-highlights the ticket
        panel.select_ticket("r-1");
        let view = panel.render();
        assert!(view.sections[2].tickets.iter().all(|t| !t.highlighted));
    }

    #[test]
    fn proof_viewer_holds_only_the_displayed_url() {
        let mut panel = panel();
        let proof = panel.view_proof("p-1").unwrap();
        assert_eq!(proof.file_url, "https://example.com/p-1.jpg");
        assert_eq!(panel.render().proof, Some(proof));

        let mut no_file = bill("n-1", "a.b@billdesk.io", BillStatus::Pending, "2004-04-04");
        no_file.file_url = None;
        let mut panel = ReviewPanel::new(vec![no_file], ReviewerExclusions::none());
        assert!(panel.view_proof("n-1").is_none());
    }
}
