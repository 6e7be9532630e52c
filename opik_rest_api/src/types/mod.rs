mod dataset_item;
pub use self::dataset_item::{DatasetItemPublic, DatasetItemSource, DATASET_ITEM_PUBLIC};

mod experiment_item;
pub use self::experiment_item::{ExperimentItemPublic, EXPERIMENT_ITEM_PUBLIC};

mod provider_api_key;
pub use self::provider_api_key::{Provider, ProviderApiKeyPublic, PROVIDER_API_KEY_PUBLIC};

mod error_message;
pub use self::error_message::{ErrorMessage, ERROR_MESSAGE};

mod llm_as_judge;
pub use self::llm_as_judge::{LlmAsJudgeModelParameters, LLM_AS_JUDGE_MODEL_PARAMETERS};
