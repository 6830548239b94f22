//! # UI state and view-models
//!
//! The core never touches a rendering surface directly: it produces pure
//! renderable descriptions (ticket cards, the decision form, the proof
//! viewer) and the excluded view collaborator binds them to actual widgets.

pub mod cards;
pub mod review_panel;

/// Image-viewer description for a bill's proof file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofView {
    pub file_url: String,
}
