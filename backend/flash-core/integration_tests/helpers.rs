use flash_core::FlashConfig;

use common::RedactedApiKey;

use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "sk-integration-test-token";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub fn test_key() -> RedactedApiKey {
    RedactedApiKey::new(TEST_TOKEN.to_string())
}

/// Config pointing at the mock server's completions path.
pub fn config_for(server: &MockServer) -> FlashConfig {
    FlashConfig {
        endpoint_url: format!("{}{}", server.uri(), COMPLETIONS_PATH),
        ..FlashConfig::default()
    }
}

/// Chat-completion envelope wrapping `content`, shaped like a real response.
pub fn completion_envelope(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
    })
}
