//! Chat service — question + canvas context → one generated answer.
//!
//! DESIGN
//! ======
//! Each call builds a single composite prompt (persona preamble, canvas
//! context, question, behavioral rules) and sends it as one user turn with
//! fixed sampling parameters. Nothing is remembered between calls and
//! nothing is shared between concurrent calls, so the responder is
//! immutable after construction and lives behind an `Arc`.
//!
//! Failures are split three ways for the logs (configuration, empty answer,
//! upstream) but all present the same message to end users.

use std::fmt::Write;
use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::persona::{Persona, UnknownPersona};
use crate::error::ErrorCode;
use crate::llm::{ApiKey, GenerationConfig, TextGenerator};

/// Sampling parameters for every chat answer.
pub const CHAT_GENERATION: GenerationConfig =
    GenerationConfig { temperature: 0.7, top_p: 1.0, top_k: 1, max_output_tokens: 500 };

/// The only failure text end users ever see.
pub const USER_FACING_FAILURE: &str = "Failed to generate response. Please try again.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("Gemini API key is missing. Please check your environment variables.")]
    Configuration,
    #[error("no response generated")]
    EmptyResponse,
    #[error("upstream generation failed")]
    Upstream,
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration => "E_LLM_NOT_CONFIGURED",
            Self::EmptyResponse => "E_EMPTY_RESPONSE",
            Self::Upstream => "E_LLM_ERROR",
        }
    }

    fn retryable(&self) -> bool {
        !matches!(self, Self::Configuration)
    }
}

impl ChatError {
    /// Message suitable for display in the UI, identical for every variant.
    #[must_use]
    pub fn user_message(self) -> &'static str {
        USER_FACING_FAILURE
    }
}

/// Chat settings resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatConfig {
    /// `None` puts the responder in a permanent configuration-error state.
    pub api_key: Option<ApiKey>,
    pub persona: Persona,
}

impl ChatConfig {
    /// Read chat settings from environment variables.
    ///
    /// - `GEMINI_API_KEY`: credential; blank or unset means missing
    /// - `CHAT_PERSONA`: `general` (default) or `tutor`
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPersona`] if `CHAT_PERSONA` names no known persona.
    pub fn from_env() -> Result<Self, UnknownPersona> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().and_then(ApiKey::new);
        let persona = match std::env::var("CHAT_PERSONA") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Persona::default(),
        };
        Ok(Self { api_key, persona })
    }
}

// =============================================================================
// RESPONDER
// =============================================================================

pub struct ChatResponder {
    config: ChatConfig,
    generator: Arc<dyn TextGenerator>,
}

impl ChatResponder {
    #[must_use]
    pub fn new(config: ChatConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self { config, generator }
    }

    #[must_use]
    pub fn persona(&self) -> Persona {
        self.config.persona
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Answer `prompt` with the configured persona.
    ///
    /// # Errors
    ///
    /// See [`ChatResponder::respond_as`].
    pub async fn respond(&self, prompt: &str, context: &str) -> Result<String, ChatError> {
        self.respond_as(self.config.persona, prompt, context).await
    }

    /// Answer `prompt` framed by `persona`.
    ///
    /// # Errors
    ///
    /// - [`ChatError::Configuration`] when no credential is configured; the
    ///   generator is never called.
    /// - [`ChatError::EmptyResponse`] when the answer is blank after trimming.
    /// - [`ChatError::Upstream`] for any transport or provider failure.
    pub async fn respond_as(&self, persona: Persona, prompt: &str, context: &str) -> Result<String, ChatError> {
        let request_id = Uuid::new_v4();

        let Some(api_key) = &self.config.api_key else {
            error!(%request_id, "chat: GEMINI_API_KEY missing, refusing request");
            return Err(ChatError::Configuration);
        };

        info!(%request_id, %persona, prompt_len = prompt.len(), context_len = context.len(), "chat: prompt received");

        let composite = build_composite_prompt(persona, prompt, context);
        let generation = match self
            .generator
            .generate(api_key, &composite, &CHAT_GENERATION)
            .await
        {
            Ok(generation) => generation,
            Err(e) => {
                error!(
                    %request_id,
                    error = %e,
                    code = e.error_code(),
                    retryable = e.retryable(),
                    upstream_body = e.response_body().unwrap_or(""),
                    "chat: generation failed"
                );
                return Err(ChatError::Upstream);
            }
        };

        info!(
            %request_id,
            model = %generation.model,
            finish_reason = generation.finish_reason.as_deref().unwrap_or("none"),
            input_tokens = generation.input_tokens,
            output_tokens = generation.output_tokens,
            "chat: LLM response"
        );

        let text = generation.text.trim();
        if text.is_empty() {
            warn!(%request_id, "chat: no response generated");
            return Err(ChatError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// Render the single composite instruction string sent upstream.
#[must_use]
pub fn build_composite_prompt(persona: Persona, prompt: &str, context: &str) -> String {
    let mut out = String::with_capacity(1024 + prompt.len() + context.len());
    out.push_str(persona.preamble());
    out.push_str("\n\n");
    let _ = writeln!(out, "Canvas Context (if relevant): {context}");
    out.push('\n');
    let _ = writeln!(out, "{}: {prompt}", persona.speaker_label());
    out.push_str("\nInstructions:\n");
    for rule in persona.instructions() {
        let _ = writeln!(out, "- {rule}");
    }
    out.push_str("\nResponse:");
    out
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
