//! Talent diagnosis types for the `/talent` endpoint family.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Gender {
    M,
    F,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisabilityType {
    Physical,
    Visual,
    Hearing,
    Intellectual,
}

/// Relative performance band for one measured sport.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeLevel {
    Excellent,
    High,
    AboveAverage,
    Average,
    BelowAverage,
}

/// Submission payload for `POST /talent/score`.
///
/// Demographics plus the seven standard fitness measurements; every
/// measurement is optional and the backend scores whatever is present.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TalentTestRequest {
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sigungu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disability_type: Option<DisabilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grip_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sit_ups: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standing_long_jump: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuttle_run_20m: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sit_and_reach: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TalentScoreItem {
    pub sport: String,
    pub score: f64,
    pub percentile: f64,
    pub grade_level: GradeLevel,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Scoring result, returned by submission and by detail lookup.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TalentScoreResponse {
    pub test_id: i64,
    pub scores: Vec<TalentScoreItem>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TalentTestListItem {
    pub id: i64,
    pub age: u32,
    #[serde(default)]
    pub grade: Option<String>,
    pub gender: String,
    #[serde(default)]
    pub region_sido: Option<String>,
    #[serde(default)]
    pub region_sigungu: Option<String>,
    pub created_at: DateTime<Utc>,
    pub top_scores: Vec<TalentScoreItem>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TalentTestListResponse {
    pub items: Vec<TalentTestListItem>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn grade_levels_use_snake_case_wire_values() {
        assert_eq!(
            serde_json::from_value::<GradeLevel>(json!("above_average")).unwrap(),
            GradeLevel::AboveAverage
        );
        assert_eq!(
            serde_json::to_value(GradeLevel::BelowAverage).unwrap(),
            json!("below_average")
        );
    }

    #[test]
    fn genders_serialize_as_single_letters() {
        assert_eq!(serde_json::to_value(Gender::M).unwrap(), json!("M"));
        assert_eq!(serde_json::to_value(Gender::F).unwrap(), json!("F"));
    }
}
