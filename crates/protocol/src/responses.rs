//! Responses returned to the engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ProtocolError;
use crate::Result;
use crate::game::Direction;
use crate::{API_VERSION, AUTHOR};

/// Body of `GET /`.
///
/// A free-form JSON object. Snakes usually fill in the customization fields
/// (`color`, `head`, `tail`, `version`); the server stamps `author` and
/// `apiversion` on the way out with [`InfoResponse::stamped`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoResponse(Map<String, Value>);

impl InfoResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept any JSON object as an info response.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ProtocolError::InvalidFormat {
                reason: format!("info response must be a JSON object, got {other}"),
            }),
        }
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        self.with_field("color", Value::String(color.into()))
    }

    pub fn with_head(self, head: impl Into<String>) -> Self {
        self.with_field("head", Value::String(head.into()))
    }

    pub fn with_tail(self, tail: impl Into<String>) -> Self {
        self.with_field("tail", Value::String(tail.into()))
    }

    pub fn with_version(self, version: impl Into<String>) -> Self {
        self.with_field("version", Value::String(version.into()))
    }

    /// Set an arbitrary field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Force the server-owned fields. Values set by the snake are overwritten.
    pub fn stamped(mut self) -> Self {
        self.0.insert("author".to_string(), Value::from(AUTHOR));
        self.0.insert("apiversion".to_string(), Value::from(API_VERSION));
        self
    }
}

impl From<Map<String, Value>> for InfoResponse {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Body of `POST /move`.
///
/// Serialized exactly as the snake built it. [`MoveResponse::new`] produces
/// the usual `{"move": "<direction>"}` shape, but any JSON value is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveResponse(Value);

impl MoveResponse {
    pub fn new(direction: Direction) -> Self {
        let mut body = Map::new();
        body.insert("move".to_string(), Value::from(direction.as_str()));
        Self(Value::Object(body))
    }

    /// Attach a shout. Ignored when the response is not a JSON object.
    pub fn with_shout(mut self, shout: impl Into<String>) -> Self {
        if let Value::Object(body) = &mut self.0 {
            body.insert("shout".to_string(), Value::String(shout.into()));
        }
        self
    }

    /// The direction carried in the `move` field, if it names one.
    pub fn direction(&self) -> Option<Direction> {
        self.0
            .get("move")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// The JSON body sent back to the engine.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Direction> for MoveResponse {
    fn from(direction: Direction) -> Self {
        Self::new(direction)
    }
}

impl From<Value> for MoveResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
