//! Support-inquiry types. These endpoints live under the secondary base URL
//! rather than the shared API prefix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    Pending,
    Answered,
    Closed,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InquiryCreate {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InquiryReply {
    pub admin_reply: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InquiryResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub admin_reply: Option<String>,
    #[serde(default)]
    pub replied_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InquiryListResponse {
    pub inquiries: Vec<InquiryResponse>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Query parameters for `GET /api/inquiry`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct InquiryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
}

/// Per-status counts from `GET /api/inquiry/stats/summary`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct InquiryStatsResponse {
    pub total: u64,
    pub pending: u64,
    pub answered: u64,
    pub closed: u64,
}
