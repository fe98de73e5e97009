//! `reqwest`-backed [`Transport`] implementation for the dossie SDK.
//!
//! Every HTTP status is passed through to the core untranslated; this crate
//! only fails when it cannot produce a response at all (connection errors,
//! undecodable bodies).

use std::time::Duration;

use dossie_core::transport::{Response, Transport};
use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;

// ─── Config ──────────────────────────────────────────────────────────────────

/// Connection settings for the document-management API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub username: String,
  pub password: String,
}

// ─── Error ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum HttpError {
  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("decoding response body (status {status}): {source}")]
  Decode {
    status: u16,
    #[source]
    source: serde_json::Error,
  },
}

// ─── Transport ───────────────────────────────────────────────────────────────

/// Async HTTP transport for the document-management JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpTransport {
  client: Client,
  config: ApiConfig,
}

impl HttpTransport {
  pub fn new(config: ApiConfig) -> Result<Self, HttpError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/{}",
      self.config.base_url.trim_end_matches('/'),
      path.trim_start_matches('/')
    )
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    if self.config.username.is_empty() {
      req
    } else {
      req.basic_auth(&self.config.username, Some(&self.config.password))
    }
  }

  /// Decode a response into the status/body envelope. An empty body decodes
  /// to JSON null.
  async fn decode(resp: reqwest::Response) -> Result<Response, HttpError> {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;

    let body = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes)
        .map_err(|source| HttpError::Decode { status, source })?
    };

    Ok(Response::new(status, body))
  }
}

impl Transport for HttpTransport {
  type Error = HttpError;

  async fn get(
    &self,
    path: &str,
    query: Option<&Map<String, Value>>,
  ) -> Result<Response, HttpError> {
    let mut req = self.auth(self.client.get(self.url(path)));
    if let Some(query) = query {
      req = req.query(query);
    }

    let resp = req.send().await?;
    tracing::debug!(path, status = resp.status().as_u16(), "GET");
    Self::decode(resp).await
  }

  async fn post(
    &self,
    path: &str,
    body: &Value,
  ) -> Result<Response, HttpError> {
    let resp = self
      .auth(self.client.post(self.url(path)))
      .json(body)
      .send()
      .await?;
    tracing::debug!(path, status = resp.status().as_u16(), "POST");
    Self::decode(resp).await
  }

  async fn patch(
    &self,
    path: &str,
    body: &Value,
  ) -> Result<Response, HttpError> {
    let resp = self
      .auth(self.client.patch(self.url(path)))
      .json(body)
      .send()
      .await?;
    tracing::debug!(path, status = resp.status().as_u16(), "PATCH");
    Self::decode(resp).await
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(ApiConfig {
      base_url: base_url.into(),
      username: String::new(),
      password: String::new(),
    })
    .unwrap()
  }

  #[test]
  fn url_joins_base_and_path() {
    let t = transport("https://api.example.com");
    assert_eq!(t.url("pessoa/42"), "https://api.example.com/pessoa/42");
  }

  #[test]
  fn url_tolerates_redundant_slashes() {
    let t = transport("https://api.example.com/");
    assert_eq!(
      t.url("/pessoa/buscar"),
      "https://api.example.com/pessoa/buscar"
    );
  }
}
