//! Test double for `ModelProvider`.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, ModelProvider};

/// Returns canned replies in order and records every prompt it receives.
/// Once the queue is empty the last reply is repeated.
pub struct StubModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    last: Mutex<Option<Result<String, String>>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self::with_replies(vec![Ok(text.to_string())])
    }

    pub fn replying_json(value: serde_json::Value) -> Self {
        Self::replying(&value.to_string())
    }

    /// A provider that always fails as if the API were unreachable.
    pub fn failing(message: &str) -> Self {
        Self::with_replies(vec![Err(message.to_string())])
    }

    fn with_replies(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// (system, prompt) pairs in call order.
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts()
            .last()
            .map(|(_, prompt)| prompt.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ModelProvider for StubModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));

        let next = self.replies.lock().unwrap().pop_front();
        let reply = match next {
            Some(reply) => {
                *self.last.lock().unwrap() = Some(reply.clone());
                reply
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Err("no reply configured".to_string())),
        };

        reply.map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}
