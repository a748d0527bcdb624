use std::path::PathBuf;

use async_trait::async_trait;
use eyre::{Result, WrapErr};
use serde_json::Value;
use tokio::fs;
use tracing::warn;

use super::{Session, SessionStore};

/// Name of the session file inside the config directory.
const SESSION_FILE: &str = "session.json";

/// File-backed session storage.
///
/// One JSON file under the user's config directory holds the token and the
/// cached profile, surviving process restarts until an explicit logout.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    session_path: PathBuf,
}

impl FileSessionStore {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap().join(".config"))
            .join("talenthub");

        Self {
            session_path: config_dir.join(SESSION_FILE),
        }
    }

    /// Store the session at an explicit path instead of the default
    /// config-directory location.
    pub fn with_path(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.session_path.parent() {
            fs::create_dir_all(parent)
                .await
                .wrap_err("Failed to create session directory")?;
        }
        Ok(())
    }

    async fn load_session(&self) -> Result<Session> {
        match fs::read_to_string(&self.session_path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(session) => Ok(session),
                Err(err) => {
                    warn!(%err, "stored session is not valid JSON, treating as logged out");
                    Ok(Session::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(e).wrap_err("Failed to read session file"),
        }
    }

    async fn save_session(&self, session: &Session) -> Result<()> {
        self.ensure_parent_dir().await?;

        let content =
            serde_json::to_string_pretty(session).wrap_err("Failed to serialize session")?;

        fs::write(&self.session_path, content)
            .await
            .wrap_err("Failed to write session file")?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.session_path, permissions)
                .wrap_err("Failed to set file permissions")?;
        }

        Ok(())
    }
}

impl Default for FileSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load_token(&self) -> Result<Option<String>> {
        Ok(self.load_session().await?.access_token)
    }

    async fn save_token(&self, token: &str) -> Result<()> {
        let mut session = self.load_session().await?;
        session.access_token = Some(token.to_owned());
        self.save_session(&session).await
    }

    async fn remove_token(&self) -> Result<()> {
        let mut session = self.load_session().await?;
        session.access_token = None;
        self.save_session(&session).await
    }

    async fn load_user(&self) -> Result<Option<Value>> {
        Ok(self.load_session().await?.user_data)
    }

    async fn save_user(&self, user: &Value) -> Result<()> {
        let mut session = self.load_session().await?;
        session.user_data = Some(user.clone());
        self.save_session(&session).await
    }

    async fn remove_user(&self) -> Result<()> {
        let mut session = self.load_session().await?;
        session.user_data = None;
        self.save_session(&session).await
    }

    async fn clear(&self) -> Result<()> {
        if let Err(e) = fs::remove_file(&self.session_path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(e).wrap_err("Failed to remove session file");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileSessionStore {
        FileSessionStore::with_path(dir.path().join(SESSION_FILE))
    }

    #[tokio::test]
    async fn missing_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);

        assert_eq!(store.load_token().await.unwrap(), None);
        assert_eq!(store.load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_survives_store_instances() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let user = json!({"id": 7, "name": "Lee"});

        let store = store_in(&dir);
        store.save_token("tok").await.unwrap();
        store.save_user(&user).await.unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.load_token().await.unwrap(), Some("tok".to_owned()));
        assert_eq!(reopened.load_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn malformed_session_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(SESSION_FILE);
        std::fs::write(&path, "not json{").expect("write failed");

        let store = FileSessionStore::with_path(path);
        assert_eq!(store.load_token().await.unwrap(), None);
        assert_eq!(store.load_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_removes_the_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(SESSION_FILE);

        let store = FileSessionStore::with_path(&path);
        store.save_token("tok").await.unwrap();
        assert!(path.exists());

        store.clear().await.unwrap();
        assert!(!path.exists());

        // Clearing an already-cleared session is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn removing_the_token_keeps_the_user() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = store_in(&dir);
        let user = json!({"id": 1});

        store.save_token("tok").await.unwrap();
        store.save_user(&user).await.unwrap();
        store.remove_token().await.unwrap();

        assert_eq!(store.load_token().await.unwrap(), None);
        assert_eq!(store.load_user().await.unwrap(), Some(user));
    }
}
