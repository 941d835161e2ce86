#![allow(dead_code)]

use async_trait::async_trait;
use order_of_secrets::error::AppError;
use order_of_secrets::services::completion::CompletionClient;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
}

/// Completion client that answers with a canned string, or fails.
pub struct ScriptedCompletion {
    answer: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletion {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, system: &str, user: &str, max_tokens: u32) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
            max_tokens,
        });
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => Err(AppError::Provider {
                status: 429,
                body: "quota exceeded".to_string(),
            }),
        }
    }
}
