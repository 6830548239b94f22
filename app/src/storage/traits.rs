//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! persistence backends to be used interchangeably by the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Bill, CreatePayload, FileUploadResponse, UpdatePayload};

/// Trait defining the interface for bill persistence operations
///
/// This trait abstracts away the specific storage implementation details,
/// allowing the pipelines to work with different backends (CSV files, HTTP
/// gateways, ...) without modification. The three operations mirror the
/// legacy gateway contract exactly.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// List all stored bills, in storage order
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Store an uploaded proof file and open a provisional bill record
    ///
    /// Returns the stored file URL together with the provisional key the
    /// final submission must be keyed by.
    async fn create(&self, payload: CreatePayload) -> Result<FileUploadResponse>;

    /// Replace the record matching `payload.selector` with the JSON-encoded
    /// record carried in `payload.data`, returning the stored result
    async fn update(&self, payload: UpdatePayload) -> Result<Bill>;
}
