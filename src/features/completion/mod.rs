pub mod client;
pub mod dto;
pub mod handler;
pub mod service;

pub use client::OpenAiClient;
pub use dto::{CompletionResponseDto, QuestionRequestDto};
pub use handler::handle_open_api_completion;
pub use service::{CompletionGateway, CompletionProvider, FALLBACK_COMPLETION};
