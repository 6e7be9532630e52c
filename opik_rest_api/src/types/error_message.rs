use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;
use crate::presence::Presence;
use crate::schema::{FieldKind, FieldSpec, Schema};

pub static ERROR_MESSAGE: Schema = Schema {
    name: "ErrorMessage",
    fields: &[
        FieldSpec {
            name: "message",
            required: true,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "code",
            required: false,
            kind: FieldKind::Integer,
        },
        FieldSpec {
            name: "details",
            required: false,
            kind: FieldKind::Json,
        },
    ],
};

/// Body the server attaches to error responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    pub message: String,

    /// HTTP status echoed by the server.
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub code: Presence<i64>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub details: Presence<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model for ErrorMessage {
    fn schema() -> &'static Schema {
        &ERROR_MESSAGE
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
