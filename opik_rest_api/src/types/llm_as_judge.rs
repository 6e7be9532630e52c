use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;
use crate::schema::{FieldKind, FieldSpec, Schema};

pub static LLM_AS_JUDGE_MODEL_PARAMETERS: Schema = Schema {
    name: "LlmAsJudgeModelParameters",
    fields: &[
        FieldSpec {
            name: "name",
            required: true,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "temperature",
            required: true,
            kind: FieldKind::Number,
        },
    ],
};

/// Model settings of an LLM-as-judge evaluator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LlmAsJudgeModelParameters {
    /// Model identifier, e.g. `gpt-4o`.
    pub name: String,

    pub temperature: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model for LlmAsJudgeModelParameters {
    fn schema() -> &'static Schema {
        &LLM_AS_JUDGE_MODEL_PARAMETERS
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}
