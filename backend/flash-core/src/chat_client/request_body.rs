use crate::error::ChatClientError;

use common::{ErrorLocation, RedactedApiKey};

use std::panic::Location;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";
const USER_ROLE: &str = "user";

/// Wire shape of the chat-completion request.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Everything needed to issue one POST: target, headers and the already
/// serialized JSON payload. Built once per request and dropped with it.
#[derive(Debug)]
pub struct ChatRequestBody {
    pub endpoint: Url,
    pub headers: HeaderMap,
    pub payload: String,
}

impl ChatRequestBody {
    /// # Errors
    ///
    /// - [`ChatClientError::InvalidHeader`] if the credential cannot be sent as a header value
    /// - [`ChatClientError::Json`] if the payload fails to serialize
    #[track_caller]
    pub fn build(
        endpoint: &Url,
        credential: &RedactedApiKey,
        model: &str,
        prompt: &str,
    ) -> Result<Self, ChatClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", credential.as_str()))
            .map_err(|e| ChatClientError::InvalidHeader {
                header: "Authorization",
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        // Keeps the token out of HeaderMap's Debug output
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let request = ChatCompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: USER_ROLE,
                content: prompt,
            }],
        };
        let payload = serde_json::to_string(&request)?;

        Ok(Self {
            endpoint: endpoint.clone(),
            headers,
            payload,
        })
    }
}
