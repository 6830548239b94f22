//! In-memory recording bill store used by pipeline tests.
//!
//! Records every `create`/`update` payload it receives so tests can assert
//! on call counts and wire contents, and can be flipped to fail any of the
//! three operations.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use shared::{Bill, CreatePayload, FileUploadResponse, UpdatePayload};

use crate::storage::BillStore;

#[derive(Default)]
pub(crate) struct FakeBillStore {
    pub bills: Mutex<Vec<Bill>>,
    pub created: Mutex<Vec<CreatePayload>>,
    pub updated: Mutex<Vec<UpdatePayload>>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    /// Response handed out by `create`; defaults to the canonical upload
    /// fixture when unset.
    pub create_response: Option<FileUploadResponse>,
}

impl FakeBillStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
            ..Self::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn update_calls(&self) -> usize {
        self.updated.lock().unwrap().len()
    }

    pub fn last_update(&self) -> Option<UpdatePayload> {
        self.updated.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl BillStore for FakeBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        if self.fail_list {
            return Err(anyhow!("list failed"));
        }
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(&self, payload: CreatePayload) -> Result<FileUploadResponse> {
        self.created.lock().unwrap().push(payload);
        if self.fail_create {
            return Err(anyhow!("create failed"));
        }
        Ok(self.create_response.clone().unwrap_or(FileUploadResponse {
            file_url: "https://example.com/test.jpg".to_string(),
            key: "1234".to_string(),
        }))
    }

    async fn update(&self, payload: UpdatePayload) -> Result<Bill> {
        self.updated.lock().unwrap().push(payload.clone());
        if self.fail_update {
            return Err(anyhow!("update failed"));
        }
        let bill: Bill = serde_json::from_str(&payload.data)?;
        Ok(bill)
    }
}
