//! Shared request path for both API bases.
//!
//! Every operation funnels through [`Connection::request`]: resolve the URL
//! against the configured base, attach headers and the bearer token, issue
//! the single network call, then normalize the outcome into parsed JSON or
//! an [`ApiError`].

use eyre::{bail, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ApiError, REQUEST_FAILED};
use crate::session::SessionStore;

/// Which configured base URL a path is resolved against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApiBase {
    /// The shared `/api`-prefixed base.
    Main,
    /// The secondary base the inquiry endpoints are addressed under.
    Inquiry,
}

#[derive(Clone, Copy, Debug)]
enum RequestType {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// One backend connection: the resolved base URLs, a shared HTTP client and
/// the session store consulted for the bearer token on every request.
#[derive(Clone, Debug)]
pub struct Connection<S>
where
    S: SessionStore + Clone,
{
    pub api_url: Url,
    pub inquiry_url: Url,
    pub client: Client,
    pub store: S,
}

impl<S> Connection<S>
where
    S: SessionStore + Clone,
{
    pub fn new(config: ClientConfig, store: S) -> Self {
        Self {
            api_url: config.api_url,
            inquiry_url: config.inquiry_url,
            client: Client::new(),
            store,
        }
    }

    pub async fn get<O>(&self, base: ApiBase, path: &str) -> Result<O>
    where
        O: DeserializeOwned,
    {
        self.request(RequestType::Get, base, path, None::<&()>, None::<()>)
            .await
    }

    pub async fn get_with_query<Q, O>(&self, base: ApiBase, path: &str, query: &Q) -> Result<O>
    where
        Q: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.request(RequestType::Get, base, path, Some(query), None::<()>)
            .await
    }

    pub async fn post<I, O>(&self, base: ApiBase, path: &str, body: I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        self.request(RequestType::Post, base, path, None::<&()>, Some(body))
            .await
    }

    pub async fn post_no_body<O>(&self, base: ApiBase, path: &str) -> Result<O>
    where
        O: DeserializeOwned,
    {
        self.request(RequestType::Post, base, path, None::<&()>, None::<()>)
            .await
    }

    pub async fn put<I, O>(&self, base: ApiBase, path: &str, body: I) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        self.request(RequestType::Put, base, path, None::<&()>, Some(body))
            .await
    }

    pub async fn patch_no_body<O>(&self, base: ApiBase, path: &str) -> Result<O>
    where
        O: DeserializeOwned,
    {
        self.request(RequestType::Patch, base, path, None::<&()>, None::<()>)
            .await
    }

    pub async fn delete<O>(&self, base: ApiBase, path: &str) -> Result<O>
    where
        O: DeserializeOwned,
    {
        self.request(RequestType::Delete, base, path, None::<&()>, None::<()>)
            .await
    }

    /// Resolve `path` against a base, keeping the base's own path prefix.
    fn endpoint(&self, base: ApiBase, path: &str) -> Result<Url> {
        let root = match base {
            ApiBase::Main => &self.api_url,
            ApiBase::Inquiry => &self.inquiry_url,
        };

        let joined = format!("{}{}", root.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(Into::into)
    }

    async fn request<Q, I, O>(
        &self,
        req_type: RequestType,
        base: ApiBase,
        path: &str,
        query: Option<&Q>,
        body: Option<I>,
    ) -> Result<O>
    where
        Q: Serialize + ?Sized,
        I: Serialize,
        O: DeserializeOwned,
    {
        let url = self.endpoint(base, path)?;
        debug!(%url, ?req_type, "dispatching api request");

        let mut builder = match req_type {
            RequestType::Get => self.client.get(url),
            RequestType::Post => self.client.post(url),
            RequestType::Put => self.client.put(url),
            RequestType::Patch => self.client.patch(url),
            RequestType::Delete => self.client.delete(url),
        };

        if let Some(query) = query {
            builder = builder.query(query);
        }

        builder = match body {
            Some(body) => builder.json(&body),
            None => builder.header(CONTENT_TYPE, "application/json"),
        };

        // A store read failure downgrades to "no token": the request is
        // still sent and the server decides whether to reject it.
        if let Ok(Some(token)) = self.store.load_token().await {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let message = match response.text().await {
                Ok(text) => error_message(&text),
                Err(_) => REQUEST_FAILED.to_owned(),
            };
            bail!(ApiError { message });
        }

        response.json::<O>().await.map_err(Into::into)
    }
}

/// Pull the server's `detail` string out of an error body; anything else —
/// non-JSON body, missing or non-string `detail` — yields the fixed
/// fallback message.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(ToOwned::to_owned))
        .unwrap_or_else(|| REQUEST_FAILED.to_owned())
}

#[cfg(test)]
mod tests {
    use crate::session::MemorySessionStore;

    use super::*;

    fn connection() -> Connection<MemorySessionStore> {
        Connection::new(ClientConfig::local(), MemorySessionStore::new())
    }

    #[test]
    fn endpoint_keeps_the_api_prefix() {
        let url = connection().endpoint(ApiBase::Main, "/auth/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/auth/login");
    }

    #[test]
    fn inquiry_endpoint_uses_the_secondary_base() {
        let url = connection().endpoint(ApiBase::Inquiry, "/api/inquiry").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/inquiry");
    }

    #[test]
    fn trailing_slash_on_the_base_is_tolerated() {
        let config = ClientConfig::new(
            Url::parse("http://localhost:8000/api/").unwrap(),
            Url::parse("http://localhost:8000/").unwrap(),
        );
        let conn = Connection::new(config, MemorySessionStore::new());

        let url = conn.endpoint(ApiBase::Main, "/programs").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/programs");
    }

    #[test]
    fn error_message_prefers_the_detail_field() {
        assert_eq!(error_message(r#"{"detail":"no such account"}"#), "no such account");
    }

    #[test]
    fn error_message_falls_back_on_non_json_bodies() {
        assert_eq!(error_message("<html>502</html>"), REQUEST_FAILED);
    }

    #[test]
    fn error_message_falls_back_on_non_string_detail() {
        assert_eq!(error_message(r#"{"detail":[{"loc":"body"}]}"#), REQUEST_FAILED);
    }
}
