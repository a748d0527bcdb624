//! Account and session types for the `/auth` endpoint family.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role attached to an account at signup.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Parent,
    Coach,
    Official,
    Admin,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_or_org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sido: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_sigungu: Option<String>,
}

impl SignupRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: UserRole::default(),
            school_or_org: None,
            region_sido: None,
            region_sigungu: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmailCheckRequest {
    pub email: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmailCheckResponse {
    pub available: bool,
    pub message: String,
}

/// Profile as returned by `GET /auth/me` and `PUT /me/profile`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub school_or_org: Option<String>,
    #[serde(default)]
    pub region_sido: Option<String>,
    #[serde(default)]
    pub region_sigungu: Option<String>,
}

/// Issued on successful signup or login.
///
/// The `user` snapshot is kept untyped: it is cached verbatim in the session
/// store, where profile updates later merge into it field by field.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: Value,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

#[cfg(test)]
mod tests {
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn signup_request_omits_absent_optional_fields() {
        let request = SignupRequest::new("Kim", "kim@b.com", "Passw0rd!");
        assert_json_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Kim",
                "email": "kim@b.com",
                "password": "Passw0rd!",
                "role": "student",
            })
        );
    }

    #[test]
    fn roles_use_lowercase_wire_values() {
        assert_eq!(serde_json::to_value(UserRole::Official).unwrap(), json!("official"));
        assert_eq!(
            serde_json::from_value::<UserRole>(json!("admin")).unwrap(),
            UserRole::Admin
        );
    }

    #[test]
    fn token_type_defaults_to_bearer() {
        let response: TokenResponse =
            serde_json::from_value(json!({"access_token": "T", "user": {"id": 1}})).unwrap();
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user, json!({"id": 1}));
    }
}
