//! HTTP access to the chat server and attachment hosts.
//!
//! The backend only talks to the network through [`ChatApi`], so tests can
//! drive the whole backend loop with an in-memory implementation.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ChatError, Result};
use crate::model::DeleteResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote operations the backend performs.
pub trait ChatApi: Send + Sync + 'static {
    /// Soft-delete a message. `Ok(None)` means the server answered with an
    /// empty or falsy body, which callers treat as a failure.
    fn delete_message(
        &self,
        message_id: &str,
        own_id: &str,
    ) -> impl Future<Output = Result<Option<DeleteResponse>>> + Send;

    /// Download a resource in full.
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest<'a> {
    message_id: &'a str,
    own_id: &'a str,
}

/// `reqwest`-backed [`ChatApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    delete_url: String,
}

impl HttpApi {
    pub fn new(delete_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            delete_url: delete_url.into(),
        })
    }
}

impl ChatApi for HttpApi {
    async fn delete_message(
        &self,
        message_id: &str,
        own_id: &str,
    ) -> Result<Option<DeleteResponse>> {
        let response = self
            .client
            .post(&self.delete_url)
            .json(&DeleteRequest { message_id, own_id })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(parse_delete_body(&body))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Interpret a successful delete reply.
///
/// Any non-empty, non-falsy body counts as success; `message` is only read
/// when it is a string. Bodies that are not JSON at all still count.
pub(crate) fn parse_delete_body(body: &[u8]) -> Option<DeleteResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    let value = serde_json::from_slice::<Value>(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));

    let truthy = match &value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };
    if !truthy {
        return None;
    }

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned);
    Some(DeleteResponse { message })
}
