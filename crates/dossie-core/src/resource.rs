//! Resource — the schema-less projection container.
//!
//! The API declares no fixed schema on the client side: a resource's fields
//! are exactly the keys of the payload it was built from. The container keeps
//! that open shape but exposes it through typed accessors rather than
//! dynamic attributes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Human-readable name for a JSON value's shape, used in error messages.
fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

// ─── Resource ────────────────────────────────────────────────────────────────

/// An open record mirroring a server-side entity's field set.
///
/// After construction the fields exactly mirror the supplied payload: nothing
/// is defaulted, coerced or dropped. Mutation happens only through an
/// explicit update operation on the owning resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource {
  fields: Map<String, Value>,
}

impl Resource {
  pub fn new(fields: Map<String, Value>) -> Self { Self { fields } }

  /// Project a decoded response body. Only JSON objects are accepted.
  pub fn from_value(value: Value) -> Result<Self> {
    match value {
      Value::Object(fields) => Ok(Self { fields }),
      other => Err(Error::UnexpectedPayload(format!(
        "expected an object, got {}",
        json_kind(&other)
      ))),
    }
  }

  pub fn get(&self, key: &str) -> Option<&Value> { self.fields.get(key) }

  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.fields.get(key).and_then(Value::as_str)
  }

  pub fn get_i64(&self, key: &str) -> Option<i64> {
    self.fields.get(key).and_then(Value::as_i64)
  }

  pub fn contains(&self, key: &str) -> bool { self.fields.contains_key(key) }

  pub fn set(&mut self, key: impl Into<String>, value: Value) {
    self.fields.insert(key.into(), value);
  }

  pub fn fields(&self) -> &Map<String, Value> { &self.fields }

  pub fn into_fields(self) -> Map<String, Value> { self.fields }
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// Constructor reference used by [`project_many`] so the shared projection
/// routine can build the concrete resource type.
pub trait FromResource {
  fn from_resource(resource: Resource) -> Self;
}

impl FromResource for Resource {
  fn from_resource(resource: Resource) -> Self { resource }
}

/// Map a JSON array of payloads into resource instances, preserving the
/// server-returned order. An empty array yields an empty vec; a non-array
/// body is rejected.
pub fn project_many<R: FromResource>(body: Value) -> Result<Vec<R>> {
  match body {
    Value::Array(items) => items
      .into_iter()
      .map(|item| Resource::from_value(item).map(R::from_resource))
      .collect(),
    other => Err(Error::UnexpectedPayload(format!(
      "expected an array, got {}",
      json_kind(&other)
    ))),
  }
}
