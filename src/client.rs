use crate::error::Result;
use crate::outcome::FetchOutcome;
use crate::params::ExecutionParams;
use crate::processor::Processor;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

pub const DEFAULT_USER_AGENT: &str = concat!("fetcher/", env!("CARGO_PKG_VERSION"));

pub struct Fetcher {
    client: Client,
    user_agent: String,
    processor: Box<dyn Processor>,
}

impl Fetcher {
    pub fn new(user_agent: Option<String>, processor: impl Processor + 'static) -> Self {
        info!("fetch_data module loaded successfully");
        Self {
            client: Client::new(),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            processor: Box::new(processor),
        }
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header(USER_AGENT, &self.user_agent)
    }

    /// Issues one GET to `url`.
    ///
    /// A 200 response is decoded as JSON and handed to the processor. Any
    /// other status becomes [`FetchOutcome::Failed`]. Transport errors, an
    /// undecodable body and processor failures are returned as `Err`.
    /// `execution_params` is accepted for hosts that pass context and is not
    /// consulted.
    pub async fn fetch_data(
        &self,
        execution_params: Option<ExecutionParams>,
        url: &str,
    ) -> Result<FetchOutcome> {
        if let Some(params) = &execution_params {
            debug!(bytes = params.len(), "execution params supplied");
        }

        let resp = self.build_request(url).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = status.as_u16(), "fetch returned non-200 status");
            return Ok(FetchOutcome::failed(status.as_u16()));
        }

        let body: Value = resp.json().await?;
        debug!(url = %url, "decoded response body");
        Ok(FetchOutcome::Processed(self.processor.process(body)?))
    }
}
