use crate::config::OpenAiConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::completion::dto::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
};

const ERROR_BODY_SNIPPET_CHARS: usize = 512;

pub struct OpenAiClient {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig, disable_proxy: bool) -> Result<Self, AppError> {
        let http_client = build_http_client(disable_proxy, config.timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn create_chat_completion(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let payload = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| AppError::upstream(format!("network error contacting {url}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let snippet = text.chars().take(ERROR_BODY_SNIPPET_CHARS).collect::<String>();
            return Err(AppError::upstream(format!(
                "request to {url} failed with {status}: {snippet}"
            )));
        }

        let body = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|err| {
                AppError::upstream(format!("failed to parse completion response: {err}"))
            })?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| AppError::upstream("completion response had no choices".to_string()))
    }
}
