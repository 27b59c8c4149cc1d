//! xAI API client
//!
//! HTTP client for the xAI chat completions endpoint. The client is stateless:
//! every call is one independent POST, with no retry, backoff or timeout.

use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::AppResult,
    routes::metrics::record_request,
    xai::{
        models::{ChatCompletionRequest, ChatMessage},
        provider::ChatProvider,
    },
};

/// xAI chat completions client
pub struct XaiClient {
    client: reqwest::Client,
    url: String,
}

impl XaiClient {
    /// Create a new xAI client
    ///
    /// The bearer token and content type are baked into the client's default
    /// headers once, here.
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .default_headers(Self::default_headers(&config.xai_api_key)?)
            .pool_max_idle_per_host(16)
            .build()?;

        Ok(Self {
            client,
            url: config.xai_api_url.clone(),
        })
    }

    /// Endpoint every request is posted to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a message list to the completions endpoint
    ///
    /// `model` defaults to `grok-beta` and `temperature` to 0. Returns the
    /// decoded response body as-is. Transport failures and non-2xx statuses
    /// are logged and handed back as the original `reqwest::Error`.
    pub async fn send_message(
        &self,
        messages: Vec<ChatMessage>,
        model: Option<&str>,
        temperature: Option<f32>,
    ) -> Result<Value, reqwest::Error> {
        let mut request = ChatCompletionRequest::new(messages);
        if let Some(model) = model {
            request = request.with_model(model);
        }
        if let Some(temperature) = temperature {
            request = request.with_temperature(temperature);
        }
        self.send(&request).await
    }

    /// Send a fully built request
    #[instrument(skip(self, request), fields(model = %request.model, messages = request.messages.len()))]
    pub async fn send(&self, request: &ChatCompletionRequest) -> Result<Value, reqwest::Error> {
        let start = Instant::now();
        let result = self.post(request).await;

        let status = match &result {
            Ok(_) => "success".to_string(),
            Err(e) => {
                error!(error = %e, status = ?e.status(), "xAI API error");
                e.status()
                    .map(|s| s.as_u16().to_string())
                    .unwrap_or_else(|| "transport".to_string())
            }
        };
        record_request(&status, &request.model, start.elapsed().as_secs_f64());

        result
    }

    async fn post(&self, request: &ChatCompletionRequest) -> Result<Value, reqwest::Error> {
        debug!(url = %self.url, "Sending chat completion to xAI");

        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        debug!(status = %status, "xAI response status");

        let checked = response.error_for_status_ref().map(|_| ());
        if let Err(e) = checked {
            let text = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %text, "xAI error response body");
            return Err(e);
        }

        response.json::<Value>().await
    }

    /// Build the fixed header set: bearer token and JSON content type
    fn default_headers(api_key: &str) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .context("XAI_API_KEY is not a valid header value")?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl ChatProvider for XaiClient {
    fn name(&self) -> &'static str {
        "xai"
    }

    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<Value, reqwest::Error> {
        self.send(request).await
    }
}
