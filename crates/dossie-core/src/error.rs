//! Error types for `dossie-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Raised locally, before any network I/O.
  #[error("missing required field: {0}")]
  MissingRequiredField(&'static str),

  /// The API reported 422 on creation: the identity document is taken.
  #[error("resource conflict: {0}")]
  Conflict(String),

  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// The response body was not the JSON shape the operation projects.
  #[error("unexpected payload: {0}")]
  UnexpectedPayload(String),

  /// The transport failed to produce a response at all.
  #[error("transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  /// Box a backend's error so the core stays agnostic of its concrete type.
  pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Transport(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
