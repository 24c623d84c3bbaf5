use contracts::usecases::u601_text_to_latex::{GeneratePdfRequest, TextToLatexRequest};

use super::api::{ApiError, ConversionApi};
use super::model::{ConverterError, ConverterStore, Operation, ValidationError};
use crate::shared::browser::Navigator;

/// Sequences the three backend operations and keeps `ConverterState` in sync.
///
/// Each request runs `Idle -> Loading -> Success | Failure -> Idle`. Nothing
/// serializes concurrent calls; the page only disables its buttons while
/// `is_loading` is set.
pub struct ConverterController<S, A, N> {
    store: S,
    api: A,
    navigator: N,
}

impl<S, A, N> ConverterController<S, A, N>
where
    S: ConverterStore,
    A: ConversionApi,
    N: Navigator,
{
    pub fn new(store: S, api: A, navigator: N) -> Self {
        Self {
            store,
            api,
            navigator,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Send the current input text for conversion and store the returned LaTeX.
    pub async fn convert_to_latex(&self) -> Result<String, ConverterError> {
        let text = self.store.snapshot().input_text;
        if text.trim().is_empty() {
            return Err(self.reject(ValidationError::EmptyInput));
        }

        self.begin();
        log::debug!("Converting {} chars to LaTeX", text.chars().count());

        match self.api.text_to_latex(&TextToLatexRequest::new(text)).await {
            Ok(response) => {
                let latex = response.latex;
                log::info!("Received {} chars of LaTeX", latex.chars().count());
                self.store.modify(|s| {
                    // pdf_id is left alone; it changes only on generation
                    s.latex_code = latex.clone();
                    s.is_loading = false;
                });
                Ok(latex)
            }
            Err(source) => Err(self.fail(Operation::ConvertToLatex, source)),
        }
    }

    /// Ask the backend to render the current LaTeX and store the artifact id.
    pub async fn generate_pdf(&self) -> Result<String, ConverterError> {
        let latex = self.store.snapshot().latex_code;
        if latex.is_empty() {
            return Err(self.reject(ValidationError::NoLatex));
        }

        self.begin();
        log::debug!("Requesting PDF generation");

        match self.api.generate_pdf(&GeneratePdfRequest { latex }).await {
            Ok(response) => {
                let id = response.id;
                log::info!("PDF generated: {}", id);
                self.store.modify(|s| {
                    s.pdf_id = Some(id.clone());
                    s.is_loading = false;
                });
                Ok(id)
            }
            Err(source) => Err(self.fail(Operation::GeneratePdf, source)),
        }
    }

    /// Open the generated PDF in a new tab. Returns `false` when there is no PDF yet.
    pub fn download_pdf(&self) -> bool {
        let Some(pdf_id) = self.store.snapshot().pdf_id else {
            return false;
        };

        let url = self.api.download_url(&pdf_id);
        log::debug!("Opening {}", url);
        if let Err(e) = self.navigator.open_in_new_tab(&url) {
            log::error!("Could not open PDF {}: {}", pdf_id, e);
        }
        true
    }

    fn begin(&self) {
        self.store.modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    fn reject(&self, error: ValidationError) -> ConverterError {
        let error = ConverterError::from(error);
        let message = error.to_string();
        log::warn!("{}", message);
        self.store.modify(|s| s.error = Some(message));
        error
    }

    fn fail(&self, operation: Operation, source: ApiError) -> ConverterError {
        let error = ConverterError::Remote { operation, source };
        let message = error.to_string();
        log::error!("{}", message);
        self.store.modify(|s| {
            s.error = Some(message);
            s.is_loading = false;
        });
        error
    }
}
