//! CSV-backed implementation of the bill store.

mod bill_repository;

pub use bill_repository::CsvBillStore;
