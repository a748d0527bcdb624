//! Account-page types for the `/me` endpoint family: profile, bookmarks
//! and notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Partial profile update for `PUT /me/profile`; absent fields are left
/// unchanged by the server.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_or_org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sigungu: Option<String>,
}

/// What a bookmark points at.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Program,
    Facility,
    Coach,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct BookmarkCreate {
    pub target_type: TargetType,
    pub target_id: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub target_type: TargetType,
    pub target_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub target_name: Option<String>,
    #[serde(default)]
    pub target_detail: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookmarkListResponse {
    pub items: Vec<BookmarkResponse>,
    pub total: u64,
}

/// Query parameters for `GET /me/bookmarks`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BookmarkFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NotificationResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<NotificationResponse>,
    pub total: u64,
    pub unread_count: u64,
}

/// Query parameters for `GET /me/notifications`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NotificationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Account-page overview. The backend assembles each section as a free-form
/// object, so the sections stay untyped.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MyOverviewResponse {
    pub user: Value,
    pub talent_tests: Value,
    pub bookmarks: Value,
    pub notifications: Value,
}
