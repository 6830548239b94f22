//! # New-bill pipeline
//!
//! Two-phase submission of a new bill. The storage backend only hands out a
//! record identifier and a stored file URL once the proof upload completes,
//! while the textual fields arrive with a separate form submission, so the
//! pipeline keeps the provisional triple (id, file URL, file name) between
//! the two phases.
//!
//! Phase 2 requires a completed phase 1: a submission that arrives before
//! the upload resolved has no identifier to key the update by, and the
//! legacy behavior of skipping the update (rather than blocking or queuing)
//! is kept.

use std::sync::Arc;

use log::{error, info, warn};
use thiserror::Error;

use shared::{
    Bill, BillForm, BillStatus, CreatePayload, MultipartForm, UpdatePayload, UploadHeaders,
};

use crate::domain::PersistOutcome;
use crate::navigation::{Navigator, Route};
use crate::session::SessionStore;
use crate::storage::BillStore;

/// Warning shown when a selected proof file is not an accepted image format.
pub const SUPPORTED_FORMATS_WARNING: &str =
    "Seuls les justificatifs au format jpg, jpeg ou png sont acceptés.";

const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Why a selected file was not accepted.
#[derive(Debug, Error, PartialEq)]
pub enum FileSelectError {
    /// Validation failure, surfaced to the user; no pipeline state mutated.
    #[error("{}", SUPPORTED_FORMATS_WARNING)]
    UnsupportedFormat,
    /// The store rejected the upload; re-selecting the file retries.
    #[error("file upload failed: {0}")]
    Store(String),
}

/// Result of the final form submission.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub persistence: PersistOutcome,
    pub route: Route,
}

/// Employee-side new-bill submission pipeline.
pub struct NewBillPipeline {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    session: Arc<dyn SessionStore>,
    bill_id: Option<String>,
    file_url: Option<String>,
    file_name: Option<String>,
}

impl NewBillPipeline {
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: Arc<dyn Navigator>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            bill_id: None,
            file_url: None,
            file_name: None,
        }
    }

    /// Provisional record identifier captured by a successful phase 1.
    pub fn bill_id(&self) -> Option<&str> {
        self.bill_id.as_deref()
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Phase 1: validate the selected file and upload it.
    ///
    /// A wrong extension leaves any previously accepted file untouched. A
    /// store failure leaves the provisional state unset so a re-selection
    /// can retry.
    pub async fn handle_file_selected(
        &mut self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<(), FileSelectError> {
        if !has_supported_extension(file_name) {
            warn!("rejected proof file '{}': unsupported format", file_name);
            return Err(FileSelectError::UnsupportedFormat);
        }

        let store = match &self.store {
            Some(store) => store,
            None => {
                error!("no bill store configured, proof file '{}' not uploaded", file_name);
                return Ok(());
            }
        };

        let email = self
            .session
            .get_user()
            .map(|user| user.email)
            .unwrap_or_default();
        let payload = CreatePayload {
            data: MultipartForm::new()
                .with_file("file", file_name, content)
                .with_text("email", &email),
            headers: UploadHeaders::default(),
        };

        match store.create(payload).await {
            Ok(response) => {
                info!("stored proof file '{}' under key {}", file_name, response.key);
                self.bill_id = Some(response.key);
                self.file_url = Some(response.file_url);
                self.file_name = Some(file_name.to_string());
                Ok(())
            }
            Err(e) => {
                error!("failed to upload proof file '{}': {:#}", file_name, e);
                Err(FileSelectError::Store(e.to_string()))
            }
        }
    }

    /// Phase 2: finalize the bill record from the form fields plus the
    /// provisional triple, then navigate to the employee bill list.
    ///
    /// Navigation is unconditional. Without a store, or without a phase-1
    /// identifier, the update is skipped.
    pub async fn submit(&mut self, form: BillForm) -> SubmitOutcome {
        let record = self.build_record(&form);
        let persistence = self.persist(record).await;
        self.navigator.navigate(Route::Bills);

        SubmitOutcome {
            persistence,
            route: Route::Bills,
        }
    }

    fn build_record(&self, form: &BillForm) -> Bill {
        let email = self
            .session
            .get_user()
            .map(|user| user.email)
            .unwrap_or_default();
        Bill {
            id: self.bill_id.clone(),
            email,
            bill_type: form.bill_type.clone(),
            name: form.name.clone(),
            amount: form.amount,
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: form.pct,
            commentary: form.commentary.clone(),
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    async fn persist(&self, record: Bill) -> PersistOutcome {
        let store = match &self.store {
            Some(store) => store,
            None => return PersistOutcome::Skipped,
        };
        let selector = match &self.bill_id {
            Some(id) => id.clone(),
            None => {
                warn!("bill submitted before its proof upload completed, skipping update");
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
                error!("failed to finalize bill {:?}: {:#}", record.id, e);
                PersistOutcome::Failed(e.to_string())
            }
        }
    }
}

fn has_supported_extension(file_name: &str) -> bool {
    let extension = match file_name.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => return false,
    };
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|supported| extension.eq_ignore_ascii_case(supported))
}
