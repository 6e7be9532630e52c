//! Static record schemas and the validator that checks JSON against them.
//!
//! A [`Schema`] is the single source of truth for a record type: which
//! fields exist, which are required, and what kind of value each holds.
//! [`Schema::validate`] walks a JSON value against it and returns a
//! normalized copy (date-times rewritten to RFC 3339, everything else
//! verbatim) or the first violation found. Undeclared keys are copied
//! through untouched.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::{Map, Value};

use crate::errors::SchemaValidationError;

/// Declared shape of one record type.
#[derive(Debug)]
pub struct Schema {
    /// Record type name used in error messages.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// One declared field.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Absent required fields fail validation; absent optional fields
    /// decode as "not provided".
    pub required: bool,
    pub kind: FieldKind,
}

/// Kind of value a field holds.
#[derive(Debug)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// ISO-8601 date-time, offset optional (UTC when missing).
    DateTime,
    /// Any JSON value, passed through as-is.
    Json,
    /// A string restricted to a closed set of values.
    Enum(&'static [&'static str]),
    Object(&'static Schema),
    List(&'static FieldKind),
    /// JSON object with arbitrary keys and values of one kind.
    Map(&'static FieldKind),
}

impl FieldKind {
    fn describe(&self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
            FieldKind::Boolean => "a boolean",
            FieldKind::DateTime => "a date-time string",
            FieldKind::Json => "any JSON value",
            FieldKind::Enum(_) => "an enum string",
            FieldKind::Object(_) => "an object",
            FieldKind::List(_) => "an array",
            FieldKind::Map(_) => "an object",
        }
    }
}

impl Schema {
    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Validates `value` against this schema and returns its normalized form.
    pub fn validate(&self, value: &Value) -> Result<Value, SchemaValidationError> {
        self.validate_at(value, "")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<Value, SchemaValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| SchemaValidationError::NotAnObject {
                record: self.name,
                path: path.to_string(),
                found: json_type(value),
            })?;

        let mut normalized = Map::with_capacity(object.len());
        for field in self.fields {
            let field_path = join_path(path, field.name);
            match object.get(field.name) {
                None if field.required => {
                    return Err(SchemaValidationError::MissingField {
                        record: self.name,
                        field: field_path,
                    });
                }
                None => {}
                // Optional fields keep an explicit null.
                Some(Value::Null) if !field.required => {
                    normalized.insert(field.name.to_string(), Value::Null);
                }
                Some(raw) => {
                    let checked = field.kind.check(self.name, &field_path, raw)?;
                    normalized.insert(field.name.to_string(), checked);
                }
            }
        }

        for (key, raw) in object {
            if self.field(key).is_none() {
                normalized.insert(key.clone(), raw.clone());
            }
        }

        Ok(Value::Object(normalized))
    }
}

impl FieldKind {
    fn check(
        &self,
        record: &'static str,
        path: &str,
        raw: &Value,
    ) -> Result<Value, SchemaValidationError> {
        let mismatch = || SchemaValidationError::TypeMismatch {
            record,
            field: path.to_string(),
            expected: self.describe(),
            found: json_type(raw),
        };

        match self {
            FieldKind::Json => Ok(raw.clone()),
            FieldKind::String => raw.is_string().then(|| raw.clone()).ok_or_else(mismatch),
            FieldKind::Integer => raw.is_i64().then(|| raw.clone()).ok_or_else(mismatch),
            FieldKind::Number => raw.is_number().then(|| raw.clone()).ok_or_else(mismatch),
            FieldKind::Boolean => raw.is_boolean().then(|| raw.clone()).ok_or_else(mismatch),
            FieldKind::DateTime => {
                let text = raw.as_str().ok_or_else(mismatch)?;
                let parsed =
                    parse_date_time(text).ok_or_else(|| SchemaValidationError::InvalidDateTime {
                        record,
                        field: path.to_string(),
                        raw: text.to_string(),
                    })?;
                Ok(Value::String(parsed.to_rfc3339()))
            }
            FieldKind::Enum(allowed) => {
                let text = raw.as_str().ok_or_else(mismatch)?;
                if allowed.iter().any(|value| *value == text) {
                    Ok(raw.clone())
                } else {
                    Err(SchemaValidationError::InvalidEnum {
                        record,
                        field: path.to_string(),
                        raw: text.to_string(),
                        allowed: *allowed,
                    })
                }
            }
            FieldKind::Object(schema) => {
                if !raw.is_object() {
                    return Err(mismatch());
                }
                schema.validate_at(raw, path)
            }
            FieldKind::List(element) => {
                let items = raw.as_array().ok_or_else(mismatch)?;
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| element.check(record, &format!("{}[{}]", path, i), item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array)
            }
            FieldKind::Map(element) => {
                let entries = raw.as_object().ok_or_else(mismatch)?;
                let mut out = Map::with_capacity(entries.len());
                for (key, item) in entries {
                    let checked = element.check(record, &join_path(path, key), item)?;
                    out.insert(key.clone(), checked);
                }
                Ok(Value::Object(out))
            }
        }
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.fraction][Z|±HH:MM]`. A missing offset means UTC.
pub fn parse_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
