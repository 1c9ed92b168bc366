pub mod dto;
pub mod loader;

pub use dto::{AppConfig, OpenAiConfig};
pub use loader::{config_from_env, load_config};
