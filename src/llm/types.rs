//! LLM types — provider-neutral generation types and errors.
//!
//! The chat service only needs "submit text, receive text". Everything a
//! provider client exposes goes through [`TextGenerator`] so tests can
//! stand in a spy for the network.

use std::fmt;

use serde::Serialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { status: 429 | 500..=599, .. })
    }
}

impl LlmError {
    /// Body the provider sent with a non-success status, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::ApiResponse { body, .. } => Some(body),
            _ => None,
        }
    }
}

// =============================================================================
// CREDENTIAL
// =============================================================================

/// Provider access credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key. Blank keys count as absent.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// =============================================================================
// SAMPLING PARAMETERS
// =============================================================================

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

// =============================================================================
// GENERATION RESULT
// =============================================================================

/// Text produced by one generation call, plus usage for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// Concatenated text of the first candidate. Empty when the provider
    /// returned no candidate or the candidate carried no text.
    pub text: String,
    pub model: String,
    pub finish_reason: Option<String>,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// TEXT GENERATOR TRAIT
// =============================================================================

/// Provider-neutral async trait for single-shot text generation.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit one composite prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider answers
    /// with a non-success status, or the response is malformed.
    async fn generate(&self, api_key: &ApiKey, prompt: &str, params: &GenerationConfig)
    -> Result<Generation, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
