use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url, header::AUTHORIZATION};

use crate::{ClientError, Credentials, QueryError, QueryRequest, QueryResponse, Record, RecordSource};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1/";

/// Protocol version pinned through the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";

const BODY_PREVIEW_CHARS: usize = 512;

pub struct NotionClient {
    client: Client,
    query_url: Url,
    credentials: Credentials,
}

impl NotionClient {
    /// `base_url` is normally [`DEFAULT_BASE_URL`]; a trailing slash is
    /// assumed so that `databases/...` joins under it.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or
    /// when the query endpoint cannot be resolved against `base_url`.
    pub fn new(
        base_url: &Url,
        timeout: Duration,
        credentials: Credentials,
    ) -> Result<Self, ClientError> {
        let query_url = query_url(base_url, &credentials)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            query_url,
            credentials,
        })
    }
}

fn query_url(base_url: &Url, credentials: &Credentials) -> Result<Url, url::ParseError> {
    let mut url = base_url.clone();
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url.join(&format!("databases/{}/query", credentials.database_id))
}

#[async_trait]
impl RecordSource for NotionClient {
    async fn query_by_email(&self, email: &str) -> Result<Vec<Record>, QueryError> {
        let response = self
            .client
            .post(self.query_url.clone())
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.credentials.api_key.reveal_ref()),
            )
            .header("Notion-Version", NOTION_VERSION)
            .json(&QueryRequest::email_equals(email))
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "notion query");

        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                body: body_preview(&body),
            });
        }

        let decoded: QueryResponse =
            serde_json::from_slice(&body).map_err(|e| QueryError::Decode(e.to_string()))?;
        Ok(decoded.results)
    }
}

fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}
