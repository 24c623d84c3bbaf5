use leptos::prelude::*;
use thiserror::Error;

use super::api::ApiError;

/// Everything the converter page shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub input_text: String,
    /// Empty until the first successful conversion
    pub latex_code: String,
    /// Set by the last successful generation; may predate the current `latex_code`
    pub pdf_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl ConverterState {
    pub fn has_latex(&self) -> bool {
        !self.latex_code.is_empty()
    }
}

/// Where the controller reads and writes `ConverterState`
pub trait ConverterStore {
    fn snapshot(&self) -> ConverterState;
    fn modify(&self, f: impl FnOnce(&mut ConverterState));
}

impl ConverterStore for RwSignal<ConverterState> {
    fn snapshot(&self) -> ConverterState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut ConverterState)) {
        self.update(f);
    }
}

/// Local precondition failure; no request was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, ingresa algún texto para convertir")]
    EmptyInput,

    #[error("Primero debes convertir el texto a LaTeX")]
    NoLatex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ConvertToLatex,
    GeneratePdf,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::ConvertToLatex => "Error al comunicarse con el servidor",
            Operation::GeneratePdf => "Error al generar el PDF",
        }
    }
}

/// Error surfaced to the user; `Display` is the message shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConverterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}: {}", .operation.failure_prefix(), .source)]
    Remote {
        operation: Operation,
        #[source]
        source: ApiError,
    },
}
