//! Facility statistics types for the `/facilities` endpoint family.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /facilities`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FacilityFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sigungu: Option<String>,
    /// Reference year-month, e.g. `"202507"`. Latest when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_ym: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityStatsResponse {
    pub id: i64,
    pub base_ym: String,
    #[serde(default)]
    pub region_sido: Option<String>,
    #[serde(default)]
    pub region_sigungu: Option<String>,
    #[serde(default)]
    pub facility_count: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub facility_per_person: Option<f64>,
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityStatsListResponse {
    pub items: Vec<FacilityStatsResponse>,
    pub total: u64,
}
