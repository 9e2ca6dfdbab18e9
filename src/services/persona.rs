//! Persona templates — the fixed framing wrapped around every question.
//!
//! Two personas exist: a general whiteboard assistant and a K-12 academic
//! tutor. Neither is implied; the default comes from `CHAT_PERSONA` and a
//! request may override it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const GENERAL_PREAMBLE: &str = "You are a helpful AI assistant named Zelearn AI. You're knowledgeable about a wide \
range of topics and can help with both general questions and specific canvas-related inquiries.";

const GENERAL_INSTRUCTIONS: &[&str] = &[
    "If the question is about the canvas or drawing, use the canvas context to provide specific suggestions.",
    "If it's a general question, provide a helpful and informative response.",
    "Keep responses friendly and conversational.",
    "Be concise but thorough.",
    "If asked about technical topics, provide accurate information.",
    "If unsure about something, acknowledge it honestly.",
];

const TUTOR_PREAMBLE: &str = "You are Zelearn AI, a patient academic tutor for K-12 students. You help students \
understand school subjects such as mathematics, science, languages, history and geography while they work on a \
shared whiteboard.";

const TUTOR_INSTRUCTIONS: &[&str] = &[
    "Only answer academic questions. If the question is not academic, politely say that you can only help with \
     school subjects.",
    "Be concise and use language a student can follow.",
    "Do not use the asterisk (*) character anywhere in your answer.",
    "When it helps, explain step by step and include the relevant formulas or a short worked example.",
    "If the question refers to the whiteboard, use the canvas context.",
    "If unsure about something, acknowledge it honestly.",
];

// =============================================================================
// PERSONA
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    General,
    Tutor,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown persona '{0}' (expected 'general' or 'tutor')")]
pub struct UnknownPersona(pub String);

impl crate::error::ErrorCode for UnknownPersona {
    fn error_code(&self) -> &'static str {
        "E_UNKNOWN_PERSONA"
    }
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::General, Persona::Tutor];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Tutor => "tutor",
        }
    }

    /// Opening paragraph describing who the assistant is.
    #[must_use]
    pub fn preamble(self) -> &'static str {
        match self {
            Self::General => GENERAL_PREAMBLE,
            Self::Tutor => TUTOR_PREAMBLE,
        }
    }

    /// Label placed in front of the user's question.
    #[must_use]
    pub fn speaker_label(self) -> &'static str {
        match self {
            Self::General => "User",
            Self::Tutor => "Student",
        }
    }

    /// Behavioral rules, rendered as a bullet list.
    #[must_use]
    pub fn instructions(self) -> &'static [&'static str] {
        match self {
            Self::General => GENERAL_INSTRUCTIONS,
            Self::Tutor => TUTOR_INSTRUCTIONS,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| UnknownPersona(s.to_string()))
    }
}

#[cfg(test)]
#[path = "persona_test.rs"]
mod tests;
