use serde::{Deserialize, Serialize};
use std::fmt;

/// An employee expense report ("bill") with its lifecycle status.
///
/// Field names follow the legacy JSON wire format (camelCase), which is what
/// the persistence gateway stores and returns. `id` is assigned by the store
/// on the first successful `create` and is absent before that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Option<String>,
    /// Owning employee identifier, also used for display-name derivation
    /// and reviewer self-exclusion.
    pub email: String,
    /// Expense category ("Transports", "Restaurants et bars", ...)
    #[serde(rename = "type")]
    pub bill_type: String,
    /// Expense title as entered by the employee
    pub name: String,
    pub amount: f64,
    /// Raw stored date, ISO-like string (YYYY-MM-DD)
    pub date: String,
    pub vat: String,
    pub pct: f64,
    pub commentary: String,
    /// Null until the proof file upload succeeds.
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
    /// Set only during an accept/refuse decision, from reviewer input.
    pub comment_admin: Option<String>,
}

/// Lifecycle status of a bill.
///
/// New bills are created `Pending`; only the decision pipeline moves a bill
/// to a terminal state, and transitions are one-way (no un-accept/un-refuse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Canonical wire value, as stored by the gateway.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// The three review categories in dashboard display order.
    pub fn all() -> [BillStatus; 3] {
        [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused]
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The admin's terminal decision on a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Refused,
}

impl Verdict {
    /// Status a bill ends up in once this verdict is applied.
    pub fn terminal_status(self) -> BillStatus {
        match self {
            Verdict::Accepted => BillStatus::Accepted,
            Verdict::Refused => BillStatus::Refused,
        }
    }
}

/// Textual submission fields collected by the new-bill form.
///
/// The proof file and the submitting employee's identity are supplied by the
/// upload pipeline itself (provisional upload state and session lookup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillForm {
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: f64,
    pub commentary: String,
}

/// Authenticated user as kept in the client key-value session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// One part of a multipart upload form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content: Vec<u8>,
    },
}

/// Multipart form data submitted to the gateway's `create` operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn with_text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Append the binary file field.
    pub fn with_file(mut self, name: &str, file_name: &str, content: Vec<u8>) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_string(),
            file_name: file_name.to_string(),
            content,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Value of the first text field with the given name.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// First file part, as (file_name, content).
    pub fn file_part(&self) -> Option<(&str, &[u8])> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File {
                file_name, content, ..
            } => Some((file_name.as_str(), content.as_slice())),
            _ => None,
        })
    }
}

/// Headers attached to a `create` call.
///
/// The legacy gateway requires `noContentType: true` so the transport picks
/// the multipart boundary itself instead of a fixed content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadHeaders {
    pub no_content_type: bool,
}

impl Default for UploadHeaders {
    fn default() -> Self {
        Self {
            no_content_type: true,
        }
    }
}

/// Payload of the gateway's `create` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayload {
    pub data: MultipartForm,
    pub headers: UploadHeaders,
}

/// Payload of the gateway's `update` operation: the full bill record as a
/// JSON string, keyed by the record id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub data: String,
    pub selector: String,
}

/// Gateway response to a successful `create`: the stored file URL and the
/// provisional record key the final submission must be keyed by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub file_url: String,
    pub key: String,
}
