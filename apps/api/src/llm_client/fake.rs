//! Scripted provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{AiProvider, PromptContext, UpstreamError};

pub struct ScriptedProvider {
    reply: Option<String>,
    calls: AtomicUsize,
    last_context: Mutex<Option<PromptContext>>,
}

impl ScriptedProvider {
    /// Answers every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            calls: AtomicUsize::new(0),
            last_context: Mutex::new(None),
        }
    }

    /// Fails every call with a 503.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_context: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_context(&self) -> Option<PromptContext> {
        self.last_context.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for ScriptedProvider {
    async fn complete(
        &self,
        _prompt: &str,
        context: &PromptContext,
    ) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_context.lock().unwrap() = Some(context.clone());
        self.reply.clone().ok_or(UpstreamError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })
    }
}
