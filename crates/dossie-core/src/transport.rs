//! The `Transport` trait and response envelope.
//!
//! The core never speaks HTTP directly. A backend (e.g. `dossie-http`)
//! implements this trait; the resource types consume only the decoded
//! status/body pair and interpret status codes themselves.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Response envelope ───────────────────────────────────────────────────────

/// A decoded API response: the HTTP status code and the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
  pub status: u16,
  pub body:   Value,
}

impl Response {
  pub fn new(status: u16, body: Value) -> Self { Self { status, body } }

  /// Lookup operations treat exactly 200 as "found".
  pub fn is_ok(&self) -> bool { self.status == 200 }

  /// 422 on creation signals a duplicate identity document.
  pub fn is_conflict(&self) -> bool { self.status == 422 }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the HTTP backend.
///
/// Non-2xx statuses are not errors at this level: the backend passes every
/// status through in the [`Response`] and fails only when it cannot produce
/// a response at all.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait Transport: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// `GET {path}`, with optional query parameters.
  fn get<'a>(
    &'a self,
    path: &'a str,
    query: Option<&'a Map<String, Value>>,
  ) -> impl Future<Output = Result<Response, Self::Error>> + Send + 'a;

  /// `POST {path}` with a JSON body.
  fn post<'a>(
    &'a self,
    path: &'a str,
    body: &'a Value,
  ) -> impl Future<Output = Result<Response, Self::Error>> + Send + 'a;

  /// `PATCH {path}` with a JSON body.
  fn patch<'a>(
    &'a self,
    path: &'a str,
    body: &'a Value,
  ) -> impl Future<Output = Result<Response, Self::Error>> + Send + 'a;
}
