//! LLM provider credentials as listed by the provider-key endpoints.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::Model;
use crate::presence::Presence;
use crate::schema::{FieldKind, FieldSpec, Schema};

const PROVIDERS: &[&str] = &["openai", "anthropic", "gemini", "openrouter", "vertex-ai"];

pub static PROVIDER_API_KEY_PUBLIC: Schema = Schema {
    name: "ProviderApiKeyPublic",
    fields: &[
        FieldSpec {
            name: "id",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "provider",
            required: true,
            kind: FieldKind::Enum(PROVIDERS),
        },
        FieldSpec {
            name: "api_key",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "name",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "created_at",
            required: false,
            kind: FieldKind::DateTime,
        },
        FieldSpec {
            name: "created_by",
            required: false,
            kind: FieldKind::String,
        },
        FieldSpec {
            name: "last_updated_at",
            required: false,
            kind: FieldKind::DateTime,
        },
        FieldSpec {
            name: "last_updated_by",
            required: false,
            kind: FieldKind::String,
        },
    ],
};

/// A stored provider key. The server masks `api_key` before returning it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProviderApiKeyPublic {
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub id: Presence<String>,

    pub provider: Provider,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub api_key: Presence<String>,

    /// User-chosen label.
    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub name: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub created_by: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_at: Presence<DateTime<FixedOffset>>,

    #[serde(default, skip_serializing_if = "Presence::is_not_provided")]
    pub last_updated_by: Presence<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Model for ProviderApiKeyPublic {
    fn schema() -> &'static Schema {
        &PROVIDER_API_KEY_PUBLIC
    }

    fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// LLM vendor a key belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "vertex-ai")]
    VertexAi,
}
impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Provider::OpenAi => "openai",
                Provider::Anthropic => "anthropic",
                Provider::Gemini => "gemini",
                Provider::OpenRouter => "openrouter",
                Provider::VertexAi => "vertex-ai",
            }
        )
    }
}
