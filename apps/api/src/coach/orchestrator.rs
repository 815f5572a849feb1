//! AI-first, fallback-second orchestration shared by every compute handler.
//!
//! One provider attempt per request. Any upstream or parse failure is logged at
//! `warn` and replaced by the fallback payload; only fallback errors (e.g. the
//! database being unreachable) reach the client.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coach::models::ShapeCheck;
use crate::coach::parser::{parse_structured, ParseError};
use crate::errors::AppError;
use crate::llm_client::{AiProvider, PromptContext, UpstreamError};

/// Which path produced a response payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Ai,
    Fallback,
}

/// Why the AI path was abandoned.
#[derive(Debug, Error)]
pub enum FallbackReason {
    #[error("upstream failure: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("unusable model output: {0}")]
    Parse(#[from] ParseError),
}

/// Single provider call whose output must parse into `T`.
pub async fn attempt_structured<T>(
    ai: &dyn AiProvider,
    prompt: &str,
    context: &PromptContext,
) -> Result<T, FallbackReason>
where
    T: DeserializeOwned + ShapeCheck,
{
    let raw = ai.complete(prompt, context).await?;
    Ok(parse_structured(&raw)?)
}

/// Single provider call returning free text; blank replies count as failures.
pub async fn attempt_text(
    ai: &dyn AiProvider,
    prompt: &str,
    context: &PromptContext,
) -> Result<String, FallbackReason> {
    let raw = ai.complete(prompt, context).await?;
    let text = raw.trim();
    if text.is_empty() {
        return Err(UpstreamError::EmptyContent.into());
    }
    Ok(text.to_string())
}

/// Resolves an AI attempt, running `fallback` only if the attempt failed.
pub async fn with_fallback<T, F>(
    operation: &str,
    attempt: Result<T, FallbackReason>,
    fallback: F,
) -> Result<(T, Source), AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match attempt {
        Ok(payload) => {
            info!("{operation}: served from AI provider");
            Ok((payload, Source::Ai))
        }
        Err(FallbackReason::Upstream(UpstreamError::NotConfigured)) => {
            debug!("{operation}: no AI provider configured");
            Ok((fallback.await?, Source::Fallback))
        }
        Err(reason) => {
            warn!("{operation}: falling back ({reason})");
            Ok((fallback.await?, Source::Fallback))
        }
    }
}
