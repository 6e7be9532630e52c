//! Decoding JSON into immutable records.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::{ImmutabilityViolationError, SchemaValidationError};
use crate::schema::Schema;

/// A record type backed by a static [`Schema`].
///
/// The schema decides what is accepted; the serde derive on the
/// implementing type only maps the already-validated value onto Rust
/// fields. Undeclared keys land in the type's flattened extra-fields map.
pub trait Model: Serialize + DeserializeOwned {
    fn schema() -> &'static Schema;

    /// Undeclared fields retained from the input.
    fn extra(&self) -> &Map<String, Value>;
}

/// Validates `value` against `T`'s schema and builds a frozen record.
pub fn decode<T: Model>(value: &Value) -> Result<Frozen<T>, SchemaValidationError> {
    let schema = T::schema();
    let normalized = schema.validate(value)?;
    let inner = serde_json::from_value::<T>(normalized).map_err(|e| {
        SchemaValidationError::Incompatible {
            record: schema.name,
            message: e.to_string(),
        }
    })?;
    Ok(Frozen { inner })
}

/// Parses `body` as JSON and decodes it with [`decode`].
pub fn decode_str<T: Model>(body: &str) -> Result<Frozen<T>, SchemaValidationError> {
    let value: Value = serde_json::from_str(body)?;
    decode(&value)
}

/// Read-only view of a decoded record.
///
/// Only the decoder builds these. Field access goes through `Deref`;
/// there is no `DerefMut` and no way to take the inner value out, so a
/// decoded record keeps its fields for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Frozen<T> {
    inner: T,
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Serialize> Serialize for Frozen<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

impl<T: Model> Frozen<T> {
    /// Always fails: decoded records are never assigned in place.
    ///
    /// Use [`Frozen::with_field`] to derive an updated copy.
    pub fn set(&mut self, field: &str, _value: Value) -> Result<(), ImmutabilityViolationError> {
        let record = T::schema().name;
        tracing::debug!("Rejected assignment to {}.{}", record, field);
        Err(ImmutabilityViolationError {
            record,
            field: field.to_string(),
        })
    }

    /// Encodes the record back to JSON.
    ///
    /// Not-provided fields are omitted, null fields are written as `null`
    /// and extra fields are written as received.
    pub fn to_json(&self) -> Value {
        // Records hold only JSON-representable values, so this cannot fail.
        serde_json::to_value(&self.inner).unwrap_or(Value::Null)
    }

    /// Returns a new record with `field` replaced by `value`, validated
    /// like any other input. `self` is left unchanged.
    pub fn with_field(&self, field: &str, value: Value) -> Result<Self, SchemaValidationError> {
        let mut json = self.to_json();
        if let Value::Object(map) = &mut json {
            map.insert(field.to_string(), value);
        }
        decode(&json)
    }

    /// Undeclared fields retained from the input.
    pub fn extra(&self) -> &Map<String, Value> {
        self.inner.extra()
    }
}
