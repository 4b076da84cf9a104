/// Payload types for client-server communication
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::decode::FieldDescriptor;
use crate::store::PageView;

/// Query parameters accepted by the records endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    /// 1-based page to show.
    pub page: Option<usize>,
    /// Filter text; replaces the active filter when it differs.
    pub filter: Option<String>,
}

/// Query parameters accepted by the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub name: Option<String>,
}

/// One derived page, sent in response to a records query.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub records: Vec<JsonValue>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl PageResponse {
    pub fn from_view(view: &PageView<'_>) -> Self {
        PageResponse {
            records: view
                .records
                .iter()
                .map(|record| serde_json::to_value(record).unwrap_or(JsonValue::Null))
                .collect(),
            current_page: view.current_page,
            total_pages: view.total_pages,
            filtered_count: view.filtered_count,
            start_index: view.start_index,
            end_index: view.end_index,
        }
    }
}

/// Summary of a freshly loaded file, sent in response to an upload.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub file_name: String,
    pub byte_size: u64,
    pub record_count: usize,
    pub declared_count: Option<u64>,
    pub codec: Option<String>,
    pub schema: Vec<FieldDescriptor>,
}

/// Error payload for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
