//! Panel catalog — the embedded widgets the whiteboard can open.
//!
//! Each panel is an overlay that frames a fixed external page and offers a
//! close control. The UI owns rendering; this module only owns the data so
//! the URLs live in one place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    DigitalHuman,
    ModelViewer,
    PeriodicTable,
    Textbook,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown panel: {0}")]
pub struct UnknownPanel(pub String);

impl crate::error::ErrorCode for UnknownPanel {
    fn error_code(&self) -> &'static str {
        "E_UNKNOWN_PANEL"
    }
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] =
        [PanelKind::DigitalHuman, PanelKind::ModelViewer, PanelKind::PeriodicTable, PanelKind::Textbook];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DigitalHuman => "digital_human",
            Self::ModelViewer => "model_viewer",
            Self::PeriodicTable => "periodic_table",
            Self::Textbook => "textbook",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownPanel(s.to_string()))
    }
}

const MEDIA_ALLOW: &str = "autoplay; fullscreen; vr";

/// One panel widget: a titled frame around a fixed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    /// Header text shown above the frame.
    pub title: &'static str,
    /// Accessible title of the embedded frame itself.
    pub frame_title: &'static str,
    pub url: &'static str,
    /// Permissions policy for the frame (`allow` attribute).
    pub allow: &'static str,
}

impl Panel {
    #[must_use]
    pub fn for_kind(kind: PanelKind) -> Self {
        match kind {
            PanelKind::DigitalHuman => Self {
                kind,
                title: "AI Digital Human",
                frame_title: "Digital Human",
                url: "https://skyyskill.zetrance.com",
                allow: "microphone; camera",
            },
            PanelKind::ModelViewer => Self {
                kind,
                title: "3D Model Viewer",
                frame_title: "3D Model Viewer",
                url: "https://sketchfab.com/models/8a1ca8e3ca224cdeb9264674416bde38/embed",
                allow: MEDIA_ALLOW,
            },
            PanelKind::PeriodicTable => Self {
                kind,
                title: "Periodic Table",
                frame_title: "Periodic Table",
                url: "https://ptable.com/?lang=en#Properties",
                allow: MEDIA_ALLOW,
            },
            PanelKind::Textbook => Self {
                kind,
                title: "Book",
                frame_title: "Book",
                url: "https://epathshala.nic.in/process.php",
                allow: MEDIA_ALLOW,
            },
        }
    }
}

/// All panels in toolbar order.
#[must_use]
pub fn catalog() -> Vec<Panel> {
    PanelKind::ALL.into_iter().map(Panel::for_kind).collect()
}

#[cfg(test)]
#[path = "panels_test.rs"]
mod tests;
