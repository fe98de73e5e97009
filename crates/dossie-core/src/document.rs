//! Document — an uploaded identity artifact.
//!
//! A document belongs to exactly one person and one document type. The file
//! itself travels base64-encoded; the client never decodes it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::{
  Error, Result,
  resource::{FromResource, Resource},
  transport::Transport,
};

/// A document record mirrored from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
  resource: Resource,
}

impl FromResource for Document {
  fn from_resource(resource: Resource) -> Self { Self { resource } }
}

impl Document {
  pub fn id(&self) -> Option<i64> { self.resource.get_i64("id") }

  pub fn person_id(&self) -> Option<i64> { self.resource.get_i64("pessoa_id") }

  pub fn document_type_id(&self) -> Option<i64> {
    self.resource.get_i64("tipo_documento_id")
  }

  pub fn get(&self, key: &str) -> Option<&Value> { self.resource.get(key) }

  pub fn fields(&self) -> &Map<String, Value> { self.resource.fields() }

  /// Upload a document through the API and return the created record.
  pub async fn submit<T: Transport>(
    transport: &T,
    person_id: i64,
    document_type_id: i64,
    extension: &str,
    file_base64: &str,
  ) -> Result<Self> {
    let body = json!({
      "pessoa_id":         person_id,
      "tipo_documento_id": document_type_id,
      "extensao":          extension,
      "arquivo":           file_base64
    });

    let response = transport
      .post("documento", &body)
      .await
      .map_err(Error::transport)?;

    Resource::from_value(response.body).map(Self::from_resource)
  }
}
