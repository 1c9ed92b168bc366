pub mod dto;
pub mod handler;
pub mod service;

pub use dto::{AddRequestDto, AddResponseDto};
pub use handler::handle_add;
pub use service::add_operands;
