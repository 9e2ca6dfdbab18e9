//! LLM — text generation adapter for the chat service.
//!
//! DESIGN
//! ======
//! The chat service depends only on the [`TextGenerator`] trait. The one
//! concrete provider is Gemini, configured from environment variables via
//! [`config::LlmConfig`]. The credential is passed per call so that a
//! missing key is decided by the caller before any request is built.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{ApiKey, GenerationConfig, TextGenerator};
