//! Entry point for hosts that invoke `fetch_data` with an event envelope
//! instead of calling [`Fetcher`] directly.

use crate::client::Fetcher;
use crate::error::{FetcherError, Result};
use crate::params::ExecutionParams;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

pub const DEFAULT_INPUT_FILE: &str = "/tmp/input.json";

/// Arguments `fetch_data` needs from `tool_params`, in call order.
pub const REQUIRED_ARGS: &[&str] = &["url"];

#[derive(Debug, Default, Deserialize)]
pub struct Invocation {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tool_params: Map<String, Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Invocation {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            FetcherError::Input(format!("Cannot read file {}: {e}", path.display()))
        })?;
        serde_json::from_str(&data)
            .map_err(|e| FetcherError::Input(format!("Invalid JSON in file: {e}")))
    }

    fn missing_args(&self) -> Vec<&'static str> {
        REQUIRED_ARGS
            .iter()
            .copied()
            .filter(|name| !self.tool_params.contains_key(*name))
            .collect()
    }
}

pub async fn handle(fetcher: &Fetcher, invocation: Invocation) -> Result<Value> {
    let missing = invocation.missing_args();
    if !missing.is_empty() {
        info!(?missing, "required tool params absent, echoing params");
        return Ok(echo_params(&invocation.tool_params));
    }

    let url = invocation
        .tool_params
        .get("url")
        .and_then(Value::as_str)
        .ok_or_else(|| FetcherError::Input("tool param 'url' must be a string".into()))?;

    let params = invocation
        .context
        .as_ref()
        .map(ExecutionParams::from_value)
        .transpose()?;

    let outcome = fetcher.fetch_data(params, url).await?;
    Ok(outcome.into_value())
}

pub async fn handle_file(fetcher: &Fetcher, path: impl AsRef<Path>) -> Result<Value> {
    let invocation = Invocation::from_file(path)?;
    handle(fetcher, invocation).await
}

fn echo_params(tool_params: &Map<String, Value>) -> Value {
    Value::String(Value::Object(tool_params.clone()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::Passthrough;
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn invocation(value: Value) -> Invocation {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn missing_url_echoes_params() {
        let fetcher = Fetcher::new(None, Passthrough);
        let inv = invocation(json!({"tool_params": {"limit": 3}}));

        let result = handle(&fetcher, inv).await.unwrap();

        assert_eq!(result, json!(r#"{"limit":3}"#));
    }

    #[tokio::test]
    async fn empty_event_echoes_empty_params() {
        let fetcher = Fetcher::new(None, Passthrough);

        let result = handle(&fetcher, invocation(json!({}))).await.unwrap();

        assert_eq!(result, json!("{}"));
    }

    #[tokio::test]
    async fn null_params_echo_empty_params() {
        let fetcher = Fetcher::new(None, Passthrough);
        let inv = invocation(json!({"tool_params": null, "context": null}));

        let result = handle(&fetcher, inv).await.unwrap();

        assert_eq!(result, json!("{}"));
    }

    #[tokio::test]
    async fn non_string_url_is_rejected() {
        let fetcher = Fetcher::new(None, Passthrough);
        let inv = invocation(json!({"tool_params": {"url": 42}}));

        let result = handle(&fetcher, inv).await;

        assert!(matches!(result, Err(FetcherError::Input(_))));
    }

    #[tokio::test]
    async fn fetches_with_context_supplied() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&server)
            .await;
        let fetcher = Fetcher::new(None, Passthrough);
        let inv = invocation(json!({
            "tool_params": {"url": format!("{}/todos/1", server.uri())},
            "context": {"token": "abc"},
        }));

        let result = handle(&fetcher, inv).await.unwrap();

        assert_eq!(result, json!({"id": 1}));
    }

    #[tokio::test]
    async fn handle_file_reports_status_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({"tool_params": {"url": format!("{}/missing", server.uri())}})
        )
        .unwrap();
        let fetcher = Fetcher::new(None, Passthrough);

        let result = handle_file(&fetcher, file.path()).await.unwrap();

        assert_eq!(result, json!({"error": "Failed to fetch data: 404"}));
    }

    #[tokio::test]
    async fn handle_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let fetcher = Fetcher::new(None, Passthrough);

        let result = handle_file(&fetcher, file.path()).await;

        assert!(matches!(result, Err(FetcherError::Input(_))));
    }
}
