use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskRequestRestDTO {
    #[schema(example = "EXPIRE_ACCESS_LINKS")]
    pub name: String,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskResponseRestDTO {
    /// Task specific summary of the run
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub result: serde_json::Value,
}

impl From<serde_json::Value> for TaskResponseRestDTO {
    fn from(result: serde_json::Value) -> Self {
        Self { result }
    }
}
