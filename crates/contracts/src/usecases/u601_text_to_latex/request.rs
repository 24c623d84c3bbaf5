use serde::{Deserialize, Serialize};

/// Text-to-LaTeX conversion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextToLatexRequest {
    /// Raw user text, sent as typed (not trimmed)
    pub text: String,

    /// Math mode flag; the client always sends `false`
    #[serde(default)]
    pub math_mode: bool,
}

impl TextToLatexRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            math_mode: false,
        }
    }
}

/// PDF generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePdfRequest {
    pub latex: String,
}
