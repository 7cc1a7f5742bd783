//! Data Transfer Objects - request bodies accepted by the content API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure to decode a request body.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Malformed JSON: {0}")]
    Malformed(String),

    #[error("Expected {expected}, found {found}")]
    WrongShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// Desired content attributes, every one optional.
///
/// A missing key and an explicit `null` both mean "leave unchanged"; an
/// absent field is never read as "clear this field". Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Running time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_list: Option<Vec<String>>,
}

impl ContentInput {
    /// Decode a request body. The body must be a JSON object.
    pub fn from_json(body: &[u8]) -> Result<Self, InputError> {
        let value = parse_value(body)?;
        if !value.is_object() {
            return Err(InputError::WrongShape {
                expected: "object",
                found: kind_of(&value),
            });
        }
        serde_json::from_value(value).map_err(|e| InputError::Malformed(e.to_string()))
    }

    /// An input that carries nothing but a genre list.
    pub fn genres_only(genres: Vec<String>) -> Self {
        Self {
            genre_list: Some(genres),
            ..Self::default()
        }
    }
}

/// Ordered list of genre names sent to the `/genre` sub-resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreList(pub Vec<String>);

impl GenreList {
    /// Decode a request body. The body must be a JSON array of strings.
    pub fn from_json(body: &[u8]) -> Result<Self, InputError> {
        let items = match parse_value(body)? {
            Value::Array(items) => items,
            other => {
                return Err(InputError::WrongShape {
                    expected: "array of strings",
                    found: kind_of(&other),
                });
            }
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::String(genre) => Ok(genre),
                other => Err(InputError::WrongShape {
                    expected: "string",
                    found: kind_of(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(GenreList)
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

fn parse_value(body: &[u8]) -> Result<Value, InputError> {
    serde_json::from_slice(body).map_err(|e| InputError::Malformed(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
