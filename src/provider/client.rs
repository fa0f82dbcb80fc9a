use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::provider::MoodProvider;
use crate::provider::models::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionRequest,
    ResponseFormat,
};

const REDACTED: &str = "[redacted]";

/// OpenAI chat-completions client. One instance is shared by every request.
pub struct OpenAiProvider {
    http_client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: Client::new(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn sanitize(&self, message: &str) -> String {
        sanitize_message(message, &self.api_key)
    }
}

#[async_trait]
impl MoodProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            response_format: ResponseFormat::json_object(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            n: 1,
        };

        debug!("Calling {} model {}", self.name(), self.model);

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ProviderUnavailable {
                status: None,
                message: self.sanitize(&e.to_string()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&error_text) {
                Ok(body) => {
                    warn!(
                        "Provider rejected request ({}): type={:?} code={:?}",
                        status, body.error.kind, body.error.code
                    );
                    body.error.message
                }
                Err(_) => {
                    warn!("Provider rejected request ({})", status);
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown provider error")
                        .to_string()
                }
            };

            return Err(AppError::ProviderUnavailable {
                status: Some(status.as_u16()),
                message: self.sanitize(&message),
            });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| AppError::ProviderUnavailable {
                    status: None,
                    message: self.sanitize(&format!("Failed to read provider response: {}", e)),
                })?;

        completion
            .into_content()
            .ok_or(AppError::EmptyProviderResponse)
    }
}

/// Strip anything that looks like a credential from a provider message.
pub fn sanitize_message(message: &str, api_key: &str) -> String {
    let message = if api_key.is_empty() {
        message.to_string()
    } else {
        message.replace(api_key, REDACTED)
    };

    message
        .split(' ')
        .map(|word| {
            let token = word.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '_');
            if token.starts_with("sk-") && token.len() > 8 {
                word.replace(token, REDACTED)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
