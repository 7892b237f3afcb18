use crate::core::{ConfigProvider, InvocationResponse, Invoker, Result, ScriptPayload};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

/// The only header the worker expects.
pub fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Sends one JSON POST to the configured endpoint and hands back status and body untouched.
pub struct RequestInvoker<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> RequestInvoker<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Invoker for RequestInvoker<C> {
    async fn invoke(&self, payload: &ScriptPayload) -> Result<InvocationResponse> {
        let body = serde_json::to_vec(payload)?;

        tracing::debug!(
            "Making API request to: {} ({} bytes)",
            self.config.endpoint(),
            body.len()
        );
        let response = self
            .client
            .post(self.config.endpoint())
            .headers(build_headers())
            .body(body)
            .send()
            .await?;

        // 非 2xx 也照樣回傳，不做特別處理
        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        Ok(InvocationResponse { status, body })
    }
}
