//! API operations for the TalentHub backend.
//!
//! Each method is one descriptor-to-endpoint mapping over the shared
//! [`Connection`]; the only client-side logic beyond that is the session
//! side effect on signup/login/logout and the profile-cache merge on
//! profile update.

use eyre::Result;
use serde_json::Value;
use talenthub_primitives::auth::{
    EmailCheckRequest, EmailCheckResponse, LoginRequest, SignupRequest, TokenResponse,
    UserResponse,
};
use talenthub_primitives::facility::{FacilityFilter, FacilityStatsListResponse};
use talenthub_primitives::inquiry::{
    InquiryCreate, InquiryFilter, InquiryListResponse, InquiryReply, InquiryResponse,
    InquiryStatsResponse,
};
use talenthub_primitives::me::{
    BookmarkCreate, BookmarkFilter, BookmarkListResponse, BookmarkResponse, MyOverviewResponse,
    NotificationFilter, NotificationListResponse, ProfileUpdateRequest, TargetType,
};
use talenthub_primitives::program::{ProgramFilter, ProgramListResponse, ProgramResponse, RegionMap};
use talenthub_primitives::talent::{
    TalentScoreResponse, TalentTestListResponse, TalentTestRequest,
};

use crate::connection::{ApiBase, Connection};
use crate::session::SessionStore;

/// High-level client over one backend connection.
///
/// Construct once at startup with the resolved [`crate::ClientConfig`] and a
/// session store; [`Self::logout`] is the only teardown.
#[derive(Clone, Debug)]
pub struct ApiClient<S>
where
    S: SessionStore + Clone,
{
    connection: Connection<S>,
}

impl<S> ApiClient<S>
where
    S: SessionStore + Clone,
{
    pub const fn new(connection: Connection<S>) -> Self {
        Self { connection }
    }

    pub const fn connection(&self) -> &Connection<S> {
        &self.connection
    }

    pub const fn store(&self) -> &S {
        &self.connection.store
    }

    // ---------------------------------------------------------------- auth

    /// Create an account. On success the issued token and the returned user
    /// snapshot are written to the session store.
    pub async fn signup(&self, request: &SignupRequest) -> Result<TokenResponse> {
        let response: TokenResponse = self
            .connection
            .post(ApiBase::Main, "/auth/signup", request)
            .await?;
        self.store_session(&response).await?;
        Ok(response)
    }

    /// Authenticate with email and password; same session side effect as
    /// [`Self::signup`].
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse> {
        let request = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response: TokenResponse = self
            .connection
            .post(ApiBase::Main, "/auth/login", &request)
            .await?;
        self.store_session(&response).await?;
        Ok(response)
    }

    /// Clear the stored session. No network call is made; the server-side
    /// token simply ages out.
    pub async fn logout(&self) -> Result<()> {
        self.store().clear().await
    }

    /// Profile of the authenticated account. Pure read, no session mutation.
    pub async fn me(&self) -> Result<UserResponse> {
        self.connection.get(ApiBase::Main, "/auth/me").await
    }

    pub async fn check_email(&self, email: &str) -> Result<EmailCheckResponse> {
        let request = EmailCheckRequest {
            email: email.to_owned(),
        };
        self.connection
            .post(ApiBase::Main, "/auth/check-email", &request)
            .await
    }

    async fn store_session(&self, response: &TokenResponse) -> Result<()> {
        if response.access_token.is_empty() {
            return Ok(());
        }
        self.store().save_token(&response.access_token).await?;
        self.store().save_user(&response.user).await?;
        Ok(())
    }

    // -------------------------------------------------------------- talent

    pub async fn submit_talent_test(
        &self,
        request: &TalentTestRequest,
    ) -> Result<TalentScoreResponse> {
        self.connection
            .post(ApiBase::Main, "/talent/score", request)
            .await
    }

    pub async fn talent_history(&self) -> Result<TalentTestListResponse> {
        self.connection.get(ApiBase::Main, "/talent/tests").await
    }

    pub async fn talent_test_detail(&self, test_id: i64) -> Result<TalentScoreResponse> {
        self.connection
            .get(ApiBase::Main, &format!("/talent/tests/{test_id}"))
            .await
    }

    // ------------------------------------------------------------ programs

    pub async fn programs(&self, filter: &ProgramFilter) -> Result<ProgramListResponse> {
        self.connection
            .get_with_query(ApiBase::Main, "/programs", filter)
            .await
    }

    pub async fn program_detail(&self, program_id: i64) -> Result<ProgramResponse> {
        self.connection
            .get(ApiBase::Main, &format!("/programs/{program_id}"))
            .await
    }

    pub async fn program_regions(&self) -> Result<RegionMap> {
        self.connection
            .get(ApiBase::Main, "/programs/regions/list")
            .await
    }

    pub async fn program_types(&self) -> Result<Vec<String>> {
        self.connection
            .get(ApiBase::Main, "/programs/types/list")
            .await
    }

    // ---------------------------------------------------------- facilities

    pub async fn facilities(&self, filter: &FacilityFilter) -> Result<FacilityStatsListResponse> {
        self.connection
            .get_with_query(ApiBase::Main, "/facilities", filter)
            .await
    }

    pub async fn facility_summary(&self) -> Result<Value> {
        self.connection
            .get(ApiBase::Main, "/facilities/summary")
            .await
    }

    pub async fn facility_regions(&self) -> Result<RegionMap> {
        self.connection
            .get(ApiBase::Main, "/facilities/regions")
            .await
    }

    // ----------------------------------------------------------- dashboard

    pub async fn dashboard_summary(&self) -> Result<Value> {
        self.connection
            .get(ApiBase::Main, "/dashboard/summary")
            .await
    }

    pub async fn dashboard_regions(&self) -> Result<Value> {
        self.connection
            .get(ApiBase::Main, "/dashboard/regions")
            .await
    }

    pub async fn coach_stats(&self) -> Result<Value> {
        self.connection
            .get(ApiBase::Main, "/dashboard/coaches")
            .await
    }

    // -------------------------------------------------------- account page

    pub async fn my_overview(&self) -> Result<MyOverviewResponse> {
        self.connection.get(ApiBase::Main, "/me/overview").await
    }

    /// Update the profile and shallow-merge the server's response into the
    /// cached user snapshot, so fields the server omits survive locally.
    ///
    /// The raw response object is merged, not a re-serialized struct; a
    /// field absent from the response stays untouched in the cache instead
    /// of being nulled out.
    pub async fn update_profile(&self, update: &ProfileUpdateRequest) -> Result<UserResponse> {
        let response: Value = self
            .connection
            .put(ApiBase::Main, "/me/profile", update)
            .await?;

        if let Some(mut cached) = self.store().load_user().await? {
            merge_profile(&mut cached, &response);
            self.store().save_user(&cached).await?;
        }

        serde_json::from_value(response).map_err(Into::into)
    }

    pub async fn bookmarks(&self, filter: &BookmarkFilter) -> Result<BookmarkListResponse> {
        self.connection
            .get_with_query(ApiBase::Main, "/me/bookmarks", filter)
            .await
    }

    pub async fn add_bookmark(
        &self,
        target_type: TargetType,
        target_id: i64,
    ) -> Result<BookmarkResponse> {
        let request = BookmarkCreate {
            target_type,
            target_id,
        };
        self.connection
            .post(ApiBase::Main, "/me/bookmarks", &request)
            .await
    }

    pub async fn delete_bookmark(&self, bookmark_id: i64) -> Result<Value> {
        self.connection
            .delete(ApiBase::Main, &format!("/me/bookmarks/{bookmark_id}"))
            .await
    }

    pub async fn notifications(
        &self,
        filter: &NotificationFilter,
    ) -> Result<NotificationListResponse> {
        self.connection
            .get_with_query(ApiBase::Main, "/me/notifications", filter)
            .await
    }

    pub async fn mark_notification_read(&self, notification_id: i64) -> Result<Value> {
        self.connection
            .post_no_body(
                ApiBase::Main,
                &format!("/me/notifications/{notification_id}/read"),
            )
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<Value> {
        self.connection
            .post_no_body(ApiBase::Main, "/me/notifications/read-all")
            .await
    }

    // ------------------------------------------------------------- inquiry

    pub async fn create_inquiry(&self, request: &InquiryCreate) -> Result<InquiryResponse> {
        self.connection
            .post(ApiBase::Inquiry, "/api/inquiry", request)
            .await
    }

    pub async fn inquiries(&self, filter: &InquiryFilter) -> Result<InquiryListResponse> {
        self.connection
            .get_with_query(ApiBase::Inquiry, "/api/inquiry", filter)
            .await
    }

    pub async fn inquiry_detail(&self, inquiry_id: i64) -> Result<InquiryResponse> {
        self.connection
            .get(ApiBase::Inquiry, &format!("/api/inquiry/{inquiry_id}"))
            .await
    }

    pub async fn reply_inquiry(&self, inquiry_id: i64, admin_reply: &str) -> Result<InquiryResponse> {
        let request = InquiryReply {
            admin_reply: admin_reply.to_owned(),
        };
        self.connection
            .post(
                ApiBase::Inquiry,
                &format!("/api/inquiry/{inquiry_id}/reply"),
                &request,
            )
            .await
    }

    pub async fn inquiry_stats(&self) -> Result<InquiryStatsResponse> {
        self.connection
            .get(ApiBase::Inquiry, "/api/inquiry/stats/summary")
            .await
    }

    pub async fn close_inquiry(&self, inquiry_id: i64) -> Result<InquiryResponse> {
        self.connection
            .patch_no_body(ApiBase::Inquiry, &format!("/api/inquiry/{inquiry_id}/close"))
            .await
    }
}

/// Shallow merge of `update` into `cached`: top-level fields present in the
/// update overwrite, everything else survives. A non-object on either side
/// replaces the cache wholesale.
fn merge_profile(cached: &mut Value, update: &Value) {
    match (cached.as_object_mut(), update.as_object()) {
        (Some(target), Some(source)) => {
            for (key, value) in source {
                drop(target.insert(key.clone(), value.clone()));
            }
        }
        _ => *cached = update.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_overwrites_only_updated_fields() {
        let mut cached = json!({"a": 1, "b": 2});
        merge_profile(&mut cached, &json!({"b": 3}));
        assert_eq!(cached, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn merge_adds_fields_missing_from_the_cache() {
        let mut cached = json!({"id": 1});
        merge_profile(&mut cached, &json!({"name": "Kim"}));
        assert_eq!(cached, json!({"id": 1, "name": "Kim"}));
    }

    #[test]
    fn merge_replaces_a_non_object_cache() {
        let mut cached = json!(null);
        merge_profile(&mut cached, &json!({"id": 1}));
        assert_eq!(cached, json!({"id": 1}));
    }
}
