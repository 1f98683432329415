//! # SCP Client
//!
//! Async client for the remote record service that persists patients, professionals and
//! appointments.
//!
//! Each record kind has one endpoint under the configured base URL:
//! - `POST` accepts a JSON record and answers 2xx, or an error payload with an optional
//!   `message`
//! - `GET` returns a JSON array of stored records
//!
//! Forms are validated and assembled by `scp-core` before anything goes on the wire.

mod error;

pub use error::{ClientError, ClientResult};

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use scp_core::listing::filter_records;
use scp_core::{CoreConfig, FormState, Record, RecordKind};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the create/list endpoints of every record kind.
#[derive(Clone, Debug)]
pub struct RecordService {
    client: Client,
    config: CoreConfig,
}

impl RecordService {
    /// Creates a service bound to the base URL of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(config: CoreConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Sends `record` to the create endpoint of its kind and returns the response body.
    ///
    /// An empty success body is returned as `Value::Null`; a non-JSON one as a string.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] if the request cannot be sent.
    /// - [`ClientError::Rejected`] for any non-2xx answer, carrying the service's `message`
    ///   when it sent one.
    pub async fn create(&self, record: &Record) -> ClientResult<Value> {
        let kind = record.kind();
        let url = self.config.endpoint_url(kind);
        debug!("POST {url}");

        let response = self.client.post(&url).json(record).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response, &format!("Erro ao cadastrar {kind}")).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    /// Validates and assembles `form`, then creates the record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Form`] without touching the network when the form is invalid,
    /// otherwise whatever [`RecordService::create`] returns.
    pub async fn submit(&self, form: &FormState) -> ClientResult<Value> {
        let record = form.to_wire_record()?;
        self.create(&record).await
    }

    /// Fetches every stored record of `kind`.
    ///
    /// A body that is not a JSON array is logged and treated as an empty list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] if the request fails or the body is not JSON.
    /// - [`ClientError::Rejected`] for any non-2xx answer.
    pub async fn list(&self, kind: RecordKind) -> ClientResult<Vec<Value>> {
        let url = self.config.endpoint_url(kind);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(rejection(response, &format!("Erro ao carregar {kind}")).await);
        }

        match response.json::<Value>().await? {
            Value::Array(records) => Ok(records),
            other => {
                warn!("expected a JSON array from {url}, got {}", json_type(&other));
                Ok(Vec::new())
            }
        }
    }

    /// Fetches records of `kind` and keeps those matching `query` on the kind's search
    /// fields.
    pub async fn search(&self, kind: RecordKind, query: &str) -> ClientResult<Vec<Value>> {
        let records = self.list(kind).await?;
        Ok(filter_records(kind, &records, query)
            .into_iter()
            .cloned()
            .collect())
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Turns a non-2xx response into [`ClientError::Rejected`].
async fn rejection(response: Response, fallback: &str) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(&body).unwrap_or_else(|| fallback.to_owned());
    warn!("record service answered {status}: {message}");
    ClientError::Rejected { status, message }
}

/// `message` of a JSON error payload, or the raw body when it is plain text.
fn rejection_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_owned),
        Ok(_) => None,
        Err(_) => Some(body.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_json_payload() {
        assert_eq!(
            rejection_message(r#"{"message": "CPF já cadastrado"}"#).as_deref(),
            Some("CPF já cadastrado")
        );
    }

    #[test]
    fn payload_without_message_uses_fallback() {
        assert_eq!(rejection_message(r#"{"error": "x"}"#), None);
        assert_eq!(rejection_message(r#"{"message": ""}"#), None);
        assert_eq!(rejection_message("   "), None);
    }

    #[test]
    fn plain_text_body_is_the_message() {
        assert_eq!(
            rejection_message("Internal Server Error").as_deref(),
            Some("Internal Server Error")
        );
    }
}
