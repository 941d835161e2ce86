// src/state.rs
use std::sync::Arc;

use crate::services::completion::CompletionClient;
use crate::services::metrics_manager::MetricsManager;
use crate::services::templates::{RandomPicker, TemplatePicker};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub picker: Arc<dyn TemplatePicker>,
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion,
            picker: Arc::new(RandomPicker),
            metrics: MetricsManager::new(),
        }
    }

    pub fn with_picker(mut self, picker: Arc<dyn TemplatePicker>) -> Self {
        self.picker = picker;
        self
    }
}
