use serde::Serialize;
use serde_json::Value;

/// Result of a single fetch that reached the remote server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Failed { error: String },
    Processed(Value),
}

impl FetchOutcome {
    pub fn failed(status: u16) -> Self {
        Self::Failed {
            error: format!("Failed to fetch data: {status}"),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Processed(value) => value,
            Self::Failed { error } => serde_json::json!({ "error": error }),
        }
    }
}
