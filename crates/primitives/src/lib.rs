//! Request and response types for the TalentHub backend API.
//!
//! Field names and enum values mirror the backend's wire format exactly;
//! everything here is plain data with `serde` derives. Endpoints the backend
//! serves as ad-hoc objects are carried as [`serde_json::Value`] by the
//! client instead of being typed here.

pub mod auth;
pub mod facility;
pub mod inquiry;
pub mod me;
pub mod program;
pub mod talent;

pub use auth::{
    EmailCheckRequest, EmailCheckResponse, LoginRequest, SignupRequest, TokenResponse,
    UserResponse, UserRole,
};
pub use facility::{FacilityFilter, FacilityStatsListResponse, FacilityStatsResponse};
pub use inquiry::{
    InquiryCreate, InquiryFilter, InquiryListResponse, InquiryReply, InquiryResponse,
    InquiryStatsResponse, InquiryStatus,
};
pub use me::{
    BookmarkCreate, BookmarkFilter, BookmarkListResponse, BookmarkResponse, MyOverviewResponse,
    NotificationFilter, NotificationListResponse, NotificationResponse, ProfileUpdateRequest,
    TargetType,
};
pub use program::{ProgramFilter, ProgramListResponse, ProgramResponse, RegionMap};
pub use talent::{
    DisabilityType, Gender, GradeLevel, TalentScoreItem, TalentScoreResponse, TalentTestListItem,
    TalentTestListResponse, TalentTestRequest,
};
