//! # Billdesk application core
//!
//! Drives the lifecycle of an employee expense report ("bill") from
//! submission through administrative review to a terminal accepted/refused
//! state, and the view state that exposes that lifecycle to the two user
//! roles.
//!
//! ## Layout:
//! - `storage`: the persistence gateway trait and its CSV-backed repository
//! - `domain`: formatter, status filter, and the list/decision/upload
//!   pipelines
//! - `ui`: the review-panel state machine and the card view-models handed to
//!   the rendering surface
//! - `session` / `navigation`: seams for the client session store and the
//!   routing collaborator

pub mod domain;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_fixtures;
