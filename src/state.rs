use std::sync::Arc;

use crate::completion::CompletionBackend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
}
