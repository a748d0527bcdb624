//! Durable session state: the bearer token and the cached user profile.
//!
//! The two live and die together — login and signup write both, logout
//! clears both — but a token without a cached profile is tolerated and no
//! re-fetch is forced. Stored tokens are plain text; there is no client-side
//! expiry checking.

use async_trait::async_trait;
use eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Everything the client persists between runs.
///
/// The profile snapshot stays untyped so that profile updates can merge
/// server responses into it without dropping fields the client does not
/// model.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Value>,
}

/// Storage backend for the session.
///
/// Implementations must treat unreadable or malformed stored state as an
/// absent session rather than an error; a corrupt session file logs the
/// user out, it does not break the client.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_token(&self) -> Result<Option<String>>;

    async fn save_token(&self, token: &str) -> Result<()>;

    async fn remove_token(&self) -> Result<()>;

    async fn load_user(&self) -> Result<Option<Value>>;

    async fn save_user(&self, user: &Value) -> Result<()>;

    async fn remove_user(&self) -> Result<()>;

    /// Drop both token and profile; the logout path.
    async fn clear(&self) -> Result<()>;
}
