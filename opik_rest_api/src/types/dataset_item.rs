//! Dataset item records returned by the datasets endpoints.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::experiment_item::{ExperimentItemPublic, EXPERIMENT_ITEM_PUBLIC};
use crate::model::Model;
use crate::presence::Presence;
use crate::schema::{FieldKind, FieldSpec, Schema};

const SOURCES: &[&str] = &["manual", "trace", "span", "sdk"];

static EXPERIMENT_ITEM: FieldKind = FieldKind::Object(&EXPERIMENT_ITEM_PUBLIC);

pub static DATASET_ITEM_PUBLIC: Schema = Schema {
    name: "DatasetItemPublic",
    fields: &[
        FieldSpec {
            name: "id",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "trace_id",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "span_id",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "source",
            required: true,
            kind: FieldKind::Enum(SOURCES),
        },
        FieldSpec {
            name: "data",
            required: true,
            kind: FieldKind::Json,
        },
        FieldSpec {
            name: "experiment_items",
            required: false,
            kind: FieldKind::List(&EXPERIMENT_ITEM),
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

/// A single item of a dataset, as exposed by the public API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatasetItemPublic {
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub id: Presence<String>,

    /// Trace this item was created from, if any.
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub trace_id: Presence<String>,

    /// Span this item was created from, if any.
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub span_id: Presence<String>,

    /// How the item entered the dataset.
    pub source: DatasetItemSource,

    /// The item payload. Arbitrary JSON.
    pub data: Value,

    /// Experiment runs that used this item, in server order.
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub experiment_items: Presence<Vec<ExperimentItemPublic>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_by: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_by: Presence<String>,

    /// Fields the server sent that this type does not declare.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model for DatasetItemPublic {
    fn schema() -> &'static Schema {
        &DATASET_ITEM_PUBLIC
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Origin of a dataset item.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DatasetItemSource {
    Manual,
    Trace,
    Span,
    Sdk,
}
impl std::fmt::Display for DatasetItemSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DatasetItemSource::Manual => "manual",
                DatasetItemSource::Trace => "trace",
                DatasetItemSource::Span => "span",
                DatasetItemSource::Sdk => "sdk",
            }
        )
    }
}
