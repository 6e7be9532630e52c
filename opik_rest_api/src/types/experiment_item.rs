use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;
use crate::presence::Presence;
use crate::schema::{FieldKind, FieldSpec, Schema};

pub static EXPERIMENT_ITEM_PUBLIC: Schema = Schema {
    name: "ExperimentItemPublic",
    fields: &[
        FieldSpec {
            name: "id",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "experiment_id",
            required: true,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "dataset_item_id",
            required: true,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "trace_id",
            required: true,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "input",
            required: false,
            kind: FieldKind::Json,
        },
        FieldSpec {
            name: "output",
            required: false,
            kind: FieldKind::Json,
        },
        FieldSpec {
            name: "usage",
            required: false,
            kind: FieldKind::Map(&FieldKind::Integer),
        },
        FieldSpec {
            name: "created_at",
            required: false,
            kind: FieldKind::DateTime,
        },
        FieldSpec {
            name: "last_updated_at",
            required: false,
            kind: FieldKind::DateTime,
        },
        FieldSpec {
            name: "created_by",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "last_updated_by",
            required: false,
            kind: FieldKind::String,
        },
    ],
};

/// One experiment run over a dataset item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperimentItemPublic {
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub id: Presence<String>,

    pub experiment_id: String,

    pub dataset_item_id: String,

    pub trace_id: String,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub input: Presence<Value>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub output: Presence<Value>,

    /// Token counts keyed by counter name (`prompt_tokens`, ...).
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub usage: Presence<BTreeMap<String, i64>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_by: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_by: Presence<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExperimentItemPublic {
    /// Value of one usage counter, if reported.
    pub fn usage_count(&self, counter: &str) -> Option<i64> {
        self.usage.value()?.get(counter).copied()
    }
}

impl Model for ExperimentItemPublic {
    fn schema() -> &'static Schema {
        &EXPERIMENT_ITEM_PUBLIC
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
