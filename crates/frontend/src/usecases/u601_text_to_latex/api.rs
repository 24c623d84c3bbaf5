use async_trait::async_trait;
use contracts::usecases::u601_text_to_latex::{
    routes, GeneratePdfRequest, GeneratePdfResponse, TextToLatexRequest, TextToLatexResponse,
};
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::shared::api_utils::{api_url, download_url};

/// Transport-level failure talking to the conversion backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` names the failed action
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: &'static str },

    #[error("No se pudo enviar la solicitud: {0}")]
    Transport(String),

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

/// Remote conversion service
#[async_trait(?Send)]
pub trait ConversionApi {
    async fn text_to_latex(
        &self,
        request: &TextToLatexRequest,
    ) -> Result<TextToLatexResponse, ApiError>;

    async fn generate_pdf(
        &self,
        request: &GeneratePdfRequest,
    ) -> Result<GeneratePdfResponse, ApiError>;

    /// Address of the generated PDF; opened directly, never fetched
    fn download_url(&self, pdf_id: &str) -> String;
}

/// `gloo-net` client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct HttpConversionApi {
    base_url: String,
}

impl HttpConversionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl ConversionApi for HttpConversionApi {
    async fn text_to_latex(
        &self,
        request: &TextToLatexRequest,
    ) -> Result<TextToLatexResponse, ApiError> {
        post_json(
            &api_url(&self.base_url, routes::TEXT_TO_LATEX),
            request,
            "Error al convertir el texto",
        )
        .await
    }

    async fn generate_pdf(
        &self,
        request: &GeneratePdfRequest,
    ) -> Result<GeneratePdfResponse, ApiError> {
        post_json(
            &api_url(&self.base_url, routes::GENERATE_PDF),
            request,
            "Error al generar el PDF",
        )
        .await
    }

    fn download_url(&self, pdf_id: &str) -> String {
        download_url(&self.base_url, pdf_id)
    }
}

async fn post_json<B, T>(url: &str, body: &B, failure: &'static str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            message: failure,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let error = ApiError::Status {
            status: 502,
            message: "Error al convertir el texto",
        };
        assert_eq!(error.to_string(), "Error al convertir el texto (HTTP 502)");
    }

    #[test]
    fn test_http_download_url() {
        let api = HttpConversionApi::new("https://example.com");
        assert_eq!(api.download_url("abc123"), "https://example.com/descargar/abc123");
    }
}
