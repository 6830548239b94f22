//! # Storage
//!
//! Persistence gateway for bill records. The domain layer only sees the
//! [`BillStore`] trait; the CSV repository is the concrete backend used by
//! the desktop build and the tests.

pub mod csv;
pub mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use traits::BillStore;
