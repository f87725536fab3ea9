//! Strict, path-tracking JSON field access for the users payload.
//!
//! Decoding walks a parsed [`serde_json::Value`] so every failure can name the
//! exact field and JSON path involved. Unknown fields are ignored; declared
//! fields are always required.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while decoding a users page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON.
    #[error("users payload is not valid JSON: {message}")]
    Malformed {
        /// Parser diagnostic.
        message: String,
    },
    /// A declared field is absent.
    #[error("missing field `{field}` in {path}")]
    MissingField {
        /// Name of the absent key.
        field: String,
        /// JSON path of the enclosing object.
        path: String,
    },
    /// A field holds a value of the wrong JSON shape.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Shape the decoder required.
        expected: &'static str,
        /// Shape present in the payload.
        found: &'static str,
        /// JSON path of the offending value.
        path: String,
    },
    /// Two records in one page share an identifier.
    #[error("duplicate user id {id} in page")]
    DuplicateId {
        /// The repeated identifier.
        id: u64,
    },
}

impl DecodeError {
    /// Name of the missing field, when this is a [`DecodeError::MissingField`].
    pub fn missing_field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub(crate) const ROOT_PATH: &str = "$";

const WHOLE_NUMBER: &str = "non-negative whole number";

/// Exclusive upper bound of `u64` as a float (2^64).
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Parse raw bytes into a JSON value.
pub(crate) fn parse_document(body: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(body).map_err(|error| DecodeError::Malformed {
        message: error.to_string(),
    })
}

/// Read access to one JSON object, remembering where it sits in the document.
#[derive(Debug, Clone)]
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    path: String,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value, path: impl Into<String>) -> Result<Self, DecodeError> {
        let location = path.into();
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                path: location,
            }),
            other => Err(DecodeError::TypeMismatch {
                expected: "object",
                found: json_kind(other),
                path: location,
            }),
        }
    }

    fn field(&self, name: &str) -> Result<(&'a Value, String), DecodeError> {
        let value = self
            .fields
            .get(name)
            .ok_or_else(|| DecodeError::MissingField {
                field: name.to_owned(),
                path: self.path.clone(),
            })?;
        Ok((value, format!("{}.{name}", self.path)))
    }

    pub(crate) fn string(&self, name: &str) -> Result<String, DecodeError> {
        let (value, path) = self.field(name)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch("string", value, path))
    }

    /// Read a non-negative whole number. Whole floats such as `2.0` are
    /// accepted; negative, fractional and out-of-range values are not.
    pub(crate) fn unsigned<T>(&self, name: &str) -> Result<T, DecodeError>
    where
        T: TryFrom<u64>,
    {
        let (value, path) = self.field(name)?;
        let Some(raw) = whole_number(value) else {
            return Err(mismatch(WHOLE_NUMBER, value, path));
        };
        T::try_from(raw).map_err(|_| DecodeError::TypeMismatch {
            expected: WHOLE_NUMBER,
            found: "out-of-range number",
            path,
        })
    }

    pub(crate) fn number(&self, name: &str) -> Result<f64, DecodeError> {
        let (value, path) = self.field(name)?;
        value
            .as_f64()
            .ok_or_else(|| mismatch("number", value, path))
    }

    pub(crate) fn object(&self, name: &str) -> Result<ObjectReader<'a>, DecodeError> {
        let (value, path) = self.field(name)?;
        ObjectReader::new(value, path)
    }

    /// Read an array of objects, yielding one reader per element.
    pub(crate) fn objects(&self, name: &str) -> Result<Vec<ObjectReader<'a>>, DecodeError> {
        let (value, path) = self.field(name)?;
        let items = value
            .as_array()
            .ok_or_else(|| mismatch("array", value, path.clone()))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ObjectReader::new(item, format!("{path}[{index}]")))
            .collect()
    }
}

fn mismatch(expected: &'static str, found: &Value, path: String) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: json_kind(found),
        path,
    }
}

fn whole_number(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().and_then(whole_float))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "sign, fraction and range are checked before the cast"
)]
fn whole_float(raw: f64) -> Option<u64> {
    (raw.fract() == 0.0 && (0.0..U64_LIMIT).contains(&raw)).then(|| raw as u64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) => {
            if number.as_f64().is_some_and(|raw| raw < 0.0) {
                "negative number"
            } else if number.as_f64().is_some_and(|raw| raw.fract() != 0.0) {
                "fractional number"
            } else if number.as_f64().is_some_and(|raw| raw >= U64_LIMIT) {
                "out-of-range number"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
