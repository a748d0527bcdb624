//! TalentHub Client Library
//!
//! Client SDK for the TalentHub backend API: configuration, durable session
//! storage, a shared request gateway with bearer-token authentication, and
//! one typed method per backend endpoint.
//!
//! ## Features
//!
//! - **Injected configuration**: both base URLs resolved once at startup
//! - **Abstract session storage**: trait-based token/profile persistence
//!   with file and in-memory backends
//! - **Single request path**: every operation funnels through one gateway
//!   that normalizes failures into message-carrying errors
//! - **Async throughout**: one suspension point per operation
//!
//! ## Quick Start
//!
//! ```no_run
//! use talenthub_client::{ApiClient, ClientConfig, Connection, MemorySessionStore};
//!
//! #[tokio::main]
//! async fn main() -> talenthub_client::Result<()> {
//!     let config = ClientConfig::local();
//!     let client = ApiClient::new(Connection::new(config, MemorySessionStore::new()));
//!
//!     let session = client.login("student@example.com", "Passw0rd!").await?;
//!     println!("logged in as {}", session.user["name"]);
//!
//!     let summary = client.dashboard_summary().await?;
//!     println!("{summary:#}");
//!
//!     client.logout().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod connection;
pub mod errors;
pub mod password;
pub mod session;

// Re-export main types for easy access
pub use client::ApiClient;
pub use config::ClientConfig;
pub use connection::{ApiBase, Connection};
pub use errors::ApiError;
pub use eyre::Result;
pub use password::{validate_password, PasswordValidation};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
// Re-export common types
pub use url::Url;

/// Current version of the client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
