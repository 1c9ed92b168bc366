use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::error::AppError;
use crate::features::completion::client::OpenAiClient;

/// Reply returned in place of a completion whenever the provider call fails.
pub const FALLBACK_COMPLETION: &str = "Please fix the error";

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        OpenAiClient::create_chat_completion(self, prompt).await
    }
}

pub struct CompletionGateway {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn answer(&self, prompt: &str) -> String {
        match self.provider.complete(prompt).await {
            Ok(reply) => {
                debug!(target: "completion", reply_chars = reply.chars().count(), "completion received");
                reply
            }
            Err(error) => {
                warn!(target: "completion", %error, "chat completion failed, returning fallback");
                FALLBACK_COMPLETION.to_string()
            }
        }
    }
}
