use std::sync::Arc;

use crate::features::completion::CompletionGateway;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(completion: Arc<CompletionGateway>) -> Self {
        Self { completion }
    }
}
