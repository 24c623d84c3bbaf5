pub mod request;
pub mod response;

pub use request::{GeneratePdfRequest, TextToLatexRequest};
pub use response::{GeneratePdfResponse, TextToLatexResponse};

use crate::usecases::common::UseCaseMetadata;

/// Backend routes consumed by this usecase, relative to the API base URL.
pub mod routes {
    pub const TEXT_TO_LATEX: &str = "/api/conversion/text-to-latex";
    pub const GENERATE_PDF: &str = "/generar-pdf";
    /// Followed by `/{id}`
    pub const DOWNLOAD_PDF: &str = "/descargar";
}

pub struct TextToLatex;

impl UseCaseMetadata for TextToLatex {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "text_to_latex"
    }

    fn display_name() -> &'static str {
        "Conversor de Texto a LaTeX"
    }

    fn description() -> &'static str {
        "Conversión de texto libre a LaTeX y generación de PDF en el servidor"
    }
}
