use serde_json::Value;
use std::fmt;

/// Opaque execution context a host may pass alongside a fetch.
///
/// Held as serialized text. The fetch path never reads it.
#[derive(Clone, PartialEq, Eq)]
pub struct ExecutionParams(String);

impl ExecutionParams {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_value(value: &Value) -> crate::error::Result<Self> {
        Ok(Self(serde_json::to_string(value)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Contents may carry credentials.
impl fmt::Debug for ExecutionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExecutionParams(<{} bytes>)", self.0.len())
    }
}
