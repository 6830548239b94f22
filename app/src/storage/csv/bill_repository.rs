//! # CSV Bill Repository
//!
//! Stores bill records in a single `bills.csv` file under a base directory,
//! with uploaded proof files written next to it under `attachments/`. Every
//! mutation rewrites the whole file, which is fine at the record counts an
//! expense desk sees.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use csv::{Reader, Writer};
use log::{debug, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use shared::{Bill, BillStatus, CreatePayload, FileUploadResponse, UpdatePayload};

use crate::storage::BillStore;

const BILLS_FILE: &str = "bills.csv";
const ATTACHMENTS_DIR: &str = "attachments";

const HEADER: [&str; 13] = [
    "id",
    "email",
    "type",
    "name",
    "amount",
    "date",
    "vat",
    "pct",
    "commentary",
    "status",
    "comment_admin",
    "file_url",
    "file_name",
];

/// CSV-based bill repository
#[derive(Clone)]
pub struct CsvBillStore {
    base_dir: PathBuf,
}

impl CsvBillStore {
    /// Create a repository rooted at `base_dir`, creating the directory
    /// layout if it does not exist yet.
    pub fn new(base_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(base_dir.join(ATTACHMENTS_DIR))?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
        })
    }

    fn bills_file_path(&self) -> PathBuf {
        self.base_dir.join(BILLS_FILE)
    }

    fn attachments_dir(&self) -> PathBuf {
        self.base_dir.join(ATTACHMENTS_DIR)
    }

    fn ensure_bills_file_exists(&self) -> Result<()> {
        let path = self.bills_file_path();
        if !path.exists() {
            self.write_bills(&[])?;
        }
        Ok(())
    }

    /// Read all bills from the CSV file, in file order
    fn read_bills(&self) -> Result<Vec<Bill>> {
        self.ensure_bills_file_exists()?;

        let file = File::open(self.bills_file_path())?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut bills = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            bills.push(Bill {
                id: non_empty(record.get(0)),
                email: record.get(1).unwrap_or("").to_string(),
                bill_type: record.get(2).unwrap_or("").to_string(),
                name: record.get(3).unwrap_or("").to_string(),
                amount: record.get(4).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                date: record.get(5).unwrap_or("").to_string(),
                vat: record.get(6).unwrap_or("").to_string(),
                pct: record.get(7).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                commentary: record.get(8).unwrap_or("").to_string(),
                status: parse_status(record.get(9).unwrap_or("")),
                comment_admin: non_empty(record.get(10)),
                file_url: non_empty(record.get(11)),
                file_name: non_empty(record.get(12)),
            });
        }

        Ok(bills)
    }

    /// Write all bills to the CSV file, replacing its previous content
    fn write_bills(&self, bills: &[Bill]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.bills_file_path())?;
        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(HEADER)?;
        for bill in bills {
            csv_writer.write_record(&[
                bill.id.as_deref().unwrap_or(""),
                &bill.email,
                &bill.bill_type,
                &bill.name,
                &bill.amount.to_string(),
                &bill.date,
                &bill.vat,
                &bill.pct.to_string(),
                &bill.commentary,
                bill.status.as_str(),
                bill.comment_admin.as_deref().unwrap_or(""),
                bill.file_url.as_deref().unwrap_or(""),
                bill.file_name.as_deref().unwrap_or(""),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    fn create_sync(&self, payload: CreatePayload) -> Result<FileUploadResponse> {
        debug!(
            "storing upload payload (noContentType={})",
            payload.headers.no_content_type
        );

        let (file_name, content) = payload
            .data
            .file_part()
            .ok_or_else(|| anyhow!("create payload carries no file part"))?;

        let key = uuid::Uuid::new_v4().to_string();
        let attachment_path = self.attachments_dir().join(format!("{}_{}", key, file_name));
        std::fs::write(&attachment_path, content)?;
        let file_url = format!("file://{}", attachment_path.display());

        // Open a provisional record so the final submission has a row to
        // update; everything but the file fields is filled in later.
        let mut bills = self.read_bills()?;
        bills.push(Bill {
            id: Some(key.clone()),
            email: payload
                .data
                .text_value("email")
                .unwrap_or_default()
                .to_string(),
            bill_type: String::new(),
            name: String::new(),
            amount: 0.0,
            date: String::new(),
            vat: String::new(),
            pct: 0.0,
            commentary: String::new(),
            file_url: Some(file_url.clone()),
            file_name: Some(file_name.to_string()),
            status: BillStatus::Pending,
            comment_admin: None,
        });
        self.write_bills(&bills)?;

        Ok(FileUploadResponse { file_url, key })
    }

    fn update_sync(&self, payload: UpdatePayload) -> Result<Bill> {
        let mut record: Bill = serde_json::from_str(&payload.data)?;
        record.id = Some(payload.selector.clone());

        let mut bills = self.read_bills()?;
        let position = bills
            .iter()
            .position(|bill| bill.id.as_deref() == Some(payload.selector.as_str()))
            .ok_or_else(|| anyhow!("no bill matching selector '{}'", payload.selector))?;
        bills[position] = record.clone();
        self.write_bills(&bills)?;

        Ok(record)
    }
}

#[async_trait]
impl BillStore for CsvBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.read_bills()
    }

    async fn create(&self, payload: CreatePayload) -> Result<FileUploadResponse> {
        self.create_sync(payload)
    }

    async fn update(&self, payload: UpdatePayload) -> Result<Bill> {
        self.update_sync(payload)
    }
}

fn non_empty(field: Option<&str>) -> Option<String> {
    match field {
        Some("") | None => None,
        Some(value) => Some(value.to_string()),
    }
}

fn parse_status(raw: &str) -> BillStatus {
    match raw {
        "pending" => BillStatus::Pending,
        "accepted" => BillStatus::Accepted,
        "refused" => BillStatus::Refused,
        other => {
            warn!("unknown bill status '{}' in storage, treating as pending", other);
            BillStatus::Pending
        }
    }
}
