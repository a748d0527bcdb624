use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{Session, SessionStore};

/// In-memory session storage for tests and embedders that manage
/// persistence themselves.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    data: Arc<RwLock<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session snapshot.
    pub async fn session(&self) -> Session {
        self.data.read().await.clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load_token(&self) -> Result<Option<String>> {
        Ok(self.data.read().await.access_token.clone())
    }

    async fn save_token(&self, token: &str) -> Result<()> {
        self.data.write().await.access_token = Some(token.to_owned());
        Ok(())
    }

    async fn remove_token(&self) -> Result<()> {
        self.data.write().await.access_token = None;
        Ok(())
    }

    async fn load_user(&self) -> Result<Option<Value>> {
        Ok(self.data.read().await.user_data.clone())
    }

    async fn save_user(&self, user: &Value) -> Result<()> {
        self.data.write().await.user_data = Some(user.clone());
        Ok(())
    }

    async fn remove_user(&self) -> Result<()> {
        self.data.write().await.user_data = None;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut data = self.data.write().await;
        *data = Session::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn token_round_trip() {
        let store = MemorySessionStore::new();

        store.save_token("tok").await.expect("save failed");
        assert_eq!(store.load_token().await.unwrap(), Some("tok".to_owned()));

        store.remove_token().await.expect("remove failed");
        assert_eq!(store.load_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn user_round_trip() {
        let store = MemorySessionStore::new();
        let user = json!({"id": 1, "name": "Kim", "tags": ["a", "b"]});

        store.save_user(&user).await.expect("save failed");
        assert_eq!(store.load_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn clear_drops_token_and_user() {
        let store = MemorySessionStore::new();

        store.save_token("tok").await.unwrap();
        store.save_user(&json!({"id": 1})).await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load_token().await.unwrap(), None);
        assert_eq!(store.load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn token_survives_without_user() {
        let store = MemorySessionStore::new();

        store.save_token("tok").await.unwrap();
        store.remove_user().await.unwrap();

        assert_eq!(store.load_token().await.unwrap(), Some("tok".to_owned()));
        assert_eq!(store.load_user().await.unwrap(), None);
    }
}
