pub mod request_body;
pub mod response_buffer;

pub use request_body::{ChatCompletionRequest, ChatMessage, ChatRequestBody};
pub use response_buffer::ResponseBuffer;

use crate::config::FlashConfig;
use crate::error::ChatClientError;

use common::{HttpStatusCode, RedactedApiKey};

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use url::Url;

/// Issues chat-completion requests against one endpoint.
///
/// Owns its transport handle; dropping the client releases it.
#[derive(Clone)]
pub struct ChatClient {
    endpoint: Url,
    model: String,
    credential: RedactedApiKey,
    client: Client,
}

impl ChatClient {
    /// # Errors
    ///
    /// - [`ChatClientError::UrlParse`] if `endpoint_url` is not a URL
    /// - [`ChatClientError::Transport`] if the HTTP client cannot be built
    pub fn new(config: &FlashConfig, credential: RedactedApiKey) -> Result<Self, ChatClientError> {
        let endpoint = Url::parse(&config.endpoint_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint,
            model: config.model.clone(),
            credential,
            client,
        })
    }

    /// Build the request body for `prompt` without sending it.
    pub fn request_body(&self, prompt: &str) -> Result<ChatRequestBody, ChatClientError> {
        ChatRequestBody::build(&self.endpoint, &self.credential, &self.model, prompt)
    }

    /// POST `prompt` and accumulate the response body into `buffer`.
    ///
    /// Any HTTP status counts as success here, including 4xx/5xx: the
    /// status is returned for the caller to interpret.
    ///
    /// # Errors
    ///
    /// Returns [`ChatClientError::Transport`] when the connection, TLS
    /// handshake, DNS lookup or body transfer fails. There is no retry.
    pub async fn send(
        &self,
        prompt: &str,
        buffer: &mut ResponseBuffer,
    ) -> Result<HttpStatusCode, ChatClientError> {
        let body = self.request_body(prompt)?;
        info!(
            "POST {} (model {}, {} byte payload)",
            body.endpoint,
            self.model,
            body.payload.len()
        );

        let mut response = self
            .client
            .post(body.endpoint)
            .headers(body.headers)
            .body(body.payload)
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());

        while let Some(chunk) = response.chunk().await? {
            let written = buffer.write_chunk(&chunk);
            debug!("Received {} byte chunk ({} total)", written, buffer.len());
        }

        info!("Response complete: HTTP {}, {} bytes", status, buffer.len());
        Ok(status)
    }
}
