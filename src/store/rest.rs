//! REST gateway for the hosted record store.
//!
//! Speaks the PostgREST table API (`/rest/v1/summaries`) and the GoTrue user
//! endpoint (`/auth/v1/user`).

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::{info, warn};
use url::Url;

use super::RecordStore;
use crate::core::config::{STORE_URL_VAR, StoreConfig};
use crate::core::models::{NewSummaryRecord, SummaryRecord, User};
use crate::errors::StoreError;

const SUMMARIES_PATH: &str = "rest/v1/summaries";
const USER_PATH: &str = "auth/v1/user";

pub struct RestStore {
    client: Client,
    base_url: Url,
    api_key: String,
    access_token: Option<String>,
}

impl RestStore {
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the store URL is missing or invalid.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let raw = config
            .url
            .as_deref()
            .ok_or_else(|| StoreError::Backend(format!("{STORE_URL_VAR} is not set")))?;

        let mut base_url = Url::parse(raw)
            .map_err(|e| StoreError::Backend(format!("Invalid store URL {raw}: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone().unwrap_or_default(),
            access_token: config.access_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Backend(format!("Invalid store path {path}: {e}")))
    }

    fn list_url(&self, user_id: &str) -> Result<Url, StoreError> {
        let mut url = self.endpoint(SUMMARIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .append_pair("user_id", &format!("eq.{user_id}"))
            .append_pair("order", "created_at.desc");
        Ok(url)
    }

    fn delete_url(&self, id: &str) -> Result<Url, StoreError> {
        let mut url = self.endpoint(SUMMARIES_PATH)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    async fn fetch_user(&self) -> Result<Option<User>, StoreError> {
        if self.access_token.is_none() {
            return Ok(None);
        }
        let url = self.endpoint(USER_PATH)?;
        let response = check_status(self.request(Method::GET, url).send().await?).await?;
        Ok(Some(response.json::<User>().await?))
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|e| {
        format!("Failed to read error response body (status {status}): {e}")
    });
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl RecordStore for RestStore {
    async fn current_user(&self) -> Option<User> {
        match self.fetch_user().await {
            Ok(user) => user,
            Err(e) => {
                // Auth failures are reported as "signed out".
                warn!("User lookup failed, continuing anonymously: {}", e);
                None
            }
        }
    }

    async fn insert(&self, record: NewSummaryRecord) -> Result<SummaryRecord, StoreError> {
        let url = self.endpoint(SUMMARIES_PATH)?;
        let response = self
            .request(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?;

        let rows: Vec<SummaryRecord> = check_status(response).await?.json().await?;
        let stored = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_string()))?;

        info!("Saved summary {} for user {}", stored.id, stored.user_id);
        Ok(stored)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SummaryRecord>, StoreError> {
        let url = self.list_url(user_id)?;
        let response = self.request(Method::GET, url).send().await?;
        let rows: Vec<SummaryRecord> = check_status(response).await?.json().await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let url = self.delete_url(id)?;
        let response = self.request(Method::DELETE, url).send().await?;
        check_status(response).await?;
        info!("Deleted summary {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{UNREACHABLE_URL, http_response, serve_once};

    fn store(url: &str, token: Option<&str>) -> RestStore {
        RestStore::new(&StoreConfig {
            url: Some(url.to_string()),
            api_key: Some("anon".to_string()),
            access_token: token.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_new_requires_url() {
        let err = RestStore::new(&StoreConfig::default()).err().unwrap();
        assert!(err.to_string().contains(STORE_URL_VAR));

        let err = RestStore::new(&StoreConfig {
            url: Some("not a url".to_string()),
            ..StoreConfig::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let s = store("https://db.example.com/project", None);
        assert_eq!(
            s.endpoint(SUMMARIES_PATH).unwrap().as_str(),
            "https://db.example.com/project/rest/v1/summaries"
        );

        let s = store("https://db.example.com", None);
        assert_eq!(
            s.endpoint(USER_PATH).unwrap().as_str(),
            "https://db.example.com/auth/v1/user"
        );
    }

    #[test]
    fn test_list_url_filters_and_orders() {
        let s = store("https://db.example.com/", None);
        let url = s.list_url("user-42").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("select".to_string(), "*".to_string()),
                ("user_id".to_string(), "eq.user-42".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_delete_url_targets_single_id() {
        let s = store("https://db.example.com/", None);
        let url = s.delete_url("abc-1").unwrap();
        assert_eq!(url.query(), Some("id=eq.abc-1"));
    }

    #[tokio::test]
    async fn test_current_user_with_valid_token() {
        let body = r#"{"id":"user-7","email":"u7@example.com","aud":"authenticated"}"#;
        let (url, server) = serve_once(http_response("200 OK", body)).await;

        let user = store(&url, Some("tok-7")).current_user().await.unwrap();
        assert_eq!(user.id, "user-7");
        assert_eq!(user.email.as_deref(), Some("u7@example.com"));

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /auth/v1/user http/1.1"));
        assert!(request.contains("authorization: bearer tok-7"));
        assert!(request.contains("apikey: anon"));
    }

    #[tokio::test]
    async fn test_current_user_auth_failure_is_anonymous() {
        let (url, _server) =
            serve_once(http_response("401 Unauthorized", r#"{"msg":"JWT expired"}"#)).await;
        assert!(store(&url, Some("expired")).current_user().await.is_none());

        assert!(
            store(UNREACHABLE_URL, Some("tok"))
                .current_user()
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_decodes_rows_from_filtered_query() {
        let body = r#"[{"id":"r2","original_text":"b","summary":"B","user_id":"u1","created_at":"2024-03-02T08:00:00.123456+00:00"},
                      {"id":"r1","original_text":"a","summary":"A","user_id":"u1","created_at":"2024-03-01T08:00:00+00:00"}]"#;
        let (url, server) = serve_once(http_response("200 OK", body)).await;

        let rows = store(&url, Some("tok")).list_by_user("u1").await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "GET /rest/v1/summaries?select=*&user_id=eq.u1&order=created_at.desc HTTP/1.1"
        ));
    }

    #[tokio::test]
    async fn test_error_status_keeps_status_and_body() {
        let (url, _server) =
            serve_once(http_response("500 Internal Server Error", "db down")).await;

        let err = store(&url, Some("tok")).list_by_user("u1").await.unwrap_err();
        match err {
            StoreError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "db down");
            }
            other => panic!("Unexpected error type: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_sends_record_and_returns_first_row() {
        let body = r#"[{"id":"new-1","original_text":"notes","summary":"S","user_id":"u1","created_at":"2024-03-01T08:00:00+00:00"}]"#;
        let (url, server) = serve_once(http_response("201 Created", body)).await;

        let saved = store(&url, Some("tok"))
            .insert(NewSummaryRecord {
                original_text: "notes".to_string(),
                summary: "S".to_string(),
                user_id: "u1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(saved.id, "new-1");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /rest/v1/summaries HTTP/1.1"));
        assert!(request.to_lowercase().contains("prefer: return=representation"));
        assert!(request.ends_with(r#"{"original_text":"notes","summary":"S","user_id":"u1"}"#));
    }

    #[tokio::test]
    async fn test_insert_with_no_rows_is_decode_error() {
        let (url, _server) = serve_once(http_response("201 Created", "[]")).await;

        let err = store(&url, Some("tok"))
            .insert(NewSummaryRecord {
                original_text: "notes".to_string(),
                summary: "S".to_string(),
                user_id: "u1".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_delete_targets_id() {
        let (url, server) = serve_once(http_response("204 No Content", "")).await;

        store(&url, Some("tok")).delete_by_id("r1").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /rest/v1/summaries?id=eq.r1 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_unreachable_store_error_keeps_cause() {
        let err = store(UNREACHABLE_URL, Some("tok"))
            .delete_by_id("r1")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Http(_)));
        assert!(err.to_string().to_lowercase().contains("refused"), "got {err}");
    }

    #[tokio::test]
    async fn test_current_user_without_token_is_anonymous() {
        // Unroutable host: a request would fail, but none should be made.
        let s = store("http://127.0.0.1:9/", None);
        assert!(s.current_user().await.is_none());
    }
}
