pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{FrequencyRequestDto, FrequencyResponseDto};
pub use handler::handle_total;
pub use service::count_characters;
