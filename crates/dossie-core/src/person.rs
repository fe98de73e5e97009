//! Person — the principal identity entity.
//!
//! A person is distinguished by a taxpayer id (`cpf`) or a passport number
//! (`passaporte`). The client declares no fixed schema: the field set is
//! whatever the API returned when the instance was created or fetched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
  Error, Result,
  document::Document,
  resource::{FromResource, Resource, project_many},
  transport::Transport,
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameter for [`Person::find`]: lookup by numeric id, or search by
/// structured criteria (documents, metadata).
#[derive(Debug, Clone, PartialEq)]
pub enum PersonQuery {
  Id(i64),
  Criteria(Map<String, Value>),
}

impl From<i64> for PersonQuery {
  fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<Map<String, Value>> for PersonQuery {
  fn from(criteria: Map<String, Value>) -> Self { Self::Criteria(criteria) }
}

impl TryFrom<Value> for PersonQuery {
  type Error = Error;

  /// Accepts what the API accepts: an integer id or an object of criteria.
  /// Everything else (strings, floats, booleans, arrays, null) is rejected.
  fn try_from(value: Value) -> Result<Self> {
    match value {
      Value::Object(criteria) => Ok(Self::Criteria(criteria)),
      Value::Number(n) => n.as_i64().map(Self::Id).ok_or_else(invalid_query),
      _ => Err(invalid_query()),
    }
  }
}

fn invalid_query() -> Error {
  Error::InvalidArgument("parameter must be an integer or an object".into())
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A person record mirrored from the API.
///
/// `id` and `metas` are server-owned: they are carried in the field set but
/// stripped from every update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person {
  resource: Resource,
}

impl FromResource for Person {
  fn from_resource(resource: Resource) -> Self { Self { resource } }
}

impl Person {
  pub fn id(&self) -> Option<i64> { self.resource.get_i64("id") }

  pub fn cpf(&self) -> Option<&str> { self.resource.get_str("cpf") }

  pub fn passaporte(&self) -> Option<&str> {
    self.resource.get_str("passaporte")
  }

  pub fn get(&self, key: &str) -> Option<&Value> { self.resource.get(key) }

  /// Stage a local field change; nothing is sent until [`Person::save`].
  pub fn set(&mut self, key: impl Into<String>, value: Value) {
    self.resource.set(key, value);
  }

  pub fn fields(&self) -> &Map<String, Value> { self.resource.fields() }

  /// Document operations and `save` need the server-assigned id, which is
  /// only present on instances that came back from the API.
  fn require_id(&self) -> Result<i64> {
    self.id().ok_or(Error::MissingRequiredField("id"))
  }

  // ── Operations ────────────────────────────────────────────────────────

  /// Create the person through the API.
  ///
  /// `fields` must carry `cpf` or `passaporte`; this is checked before any
  /// network call, so a rejected input causes no side effect. A 422 from the
  /// API means a person with the given document(s) already exists.
  pub async fn create<T: Transport>(
    transport: &T,
    fields: Map<String, Value>,
  ) -> Result<Self> {
    if !fields.contains_key("cpf") && !fields.contains_key("passaporte") {
      return Err(Error::MissingRequiredField("cpf or passaporte"));
    }

    let response = transport
      .post("pessoa", &Value::Object(fields))
      .await
      .map_err(Error::transport)?;

    if response.is_conflict() {
      return Err(Error::Conflict(
        "a person with the given document(s) already exists".into(),
      ));
    }

    Resource::from_value(response.body).map(Self::from_resource)
  }

  /// Fetch a person by id (`pessoa/{id}`) or by document/metadata criteria
  /// (`pessoa/buscar`).
  ///
  /// Returns `None` for any non-200 status. This conflates "not found" with
  /// other failure statuses; the API contract treats lookups as a
  /// found/absent signal only.
  pub async fn find<T, Q>(transport: &T, query: Q) -> Result<Option<Self>>
  where
    T: Transport,
    Q: Into<PersonQuery>,
  {
    let response = match query.into() {
      PersonQuery::Id(id) => {
        transport.get(&format!("pessoa/{id}"), None).await
      }
      PersonQuery::Criteria(criteria) => {
        transport.get("pessoa/buscar", Some(&criteria)).await
      }
    }
    .map_err(Error::transport)?;

    if !response.is_ok() {
      return Ok(None);
    }

    Resource::from_value(response.body)
      .map(Self::from_resource)
      .map(Some)
  }

  /// Push the instance's current fields to the API.
  ///
  /// `id` and `metas` are server-owned and stripped from the payload. The
  /// response is discarded: the instance is returned unchanged and a failure
  /// status is not surfaced.
  // TODO: surface non-2xx PATCH statuses once the API contract defines an
  // error shape for updates.
  pub async fn save<T: Transport>(&self, transport: &T) -> Result<&Self> {
    let id = self.require_id()?;

    let mut payload = self.resource.fields().clone();
    payload.remove("id");
    payload.remove("metas");

    transport
      .patch(&format!("pessoa/{id}"), &Value::Object(payload))
      .await
      .map_err(Error::transport)?;

    Ok(self)
  }

  /// Upload a document for this person. Delegates to [`Document::submit`]
  /// with this person's id.
  pub async fn submit_document<T: Transport>(
    &self,
    transport: &T,
    document_type_id: i64,
    extension: &str,
    file_base64: &str,
  ) -> Result<Document> {
    Document::submit(
      transport,
      self.require_id()?,
      document_type_id,
      extension,
      file_base64,
    )
    .await
  }

  /// List this person's documents, in server-returned order.
  pub async fn documents<T: Transport>(
    &self,
    transport: &T,
  ) -> Result<Vec<Document>> {
    let id = self.require_id()?;

    let response = transport
      .get(&format!("documento/pessoa/{id}"), None)
      .await
      .map_err(Error::transport)?;

    project_many(response.body)
  }

  /// Fetch this person's document of a given type. Returns `None` for any
  /// non-200 status, like [`Person::find`].
  pub async fn document_by_type<T: Transport>(
    &self,
    transport: &T,
    document_type_id: i64,
  ) -> Result<Option<Document>> {
    let id = self.require_id()?;

    let mut query = Map::new();
    query.insert("tipo_documento_id".into(), Value::from(document_type_id));

    let response = transport
      .get(&format!("documento/pessoa/{id}"), Some(&query))
      .await
      .map_err(Error::transport)?;

    if !response.is_ok() {
      return Ok(None);
    }

    Resource::from_value(response.body)
      .map(Document::from_resource)
      .map(Some)
  }
}
