//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs from the configured base.

use contracts::usecases::u601_text_to_latex::routes;

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:8080", "/generar-pdf"), "http://localhost:8080/generar-pdf");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// URL of the generated PDF, with the id encoded as a single path segment
pub fn download_url(base: &str, pdf_id: &str) -> String {
    format!(
        "{}{}/{}",
        base,
        routes::DOWNLOAD_PDF,
        urlencoding::encode(pdf_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("https://example.com", routes::TEXT_TO_LATEX),
            "https://example.com/api/conversion/text-to-latex"
        );
    }

    #[test]
    fn test_download_url_encodes_id() {
        assert_eq!(
            download_url("https://example.com", "abc123"),
            "https://example.com/descargar/abc123"
        );
        assert_eq!(
            download_url("https://example.com", "a/b c"),
            "https://example.com/descargar/a%2Fb%20c"
        );
    }
}
