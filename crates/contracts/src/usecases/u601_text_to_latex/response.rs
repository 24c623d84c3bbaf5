use serde::{Deserialize, Serialize};

/// Conversion result returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToLatexResponse {
    pub latex: String,
}

/// Identifier of the generated PDF artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePdfResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let response: GeneratePdfResponse =
            serde_json::from_str(r#"{"id":"abc123","status":"ok"}"#).unwrap();
        assert_eq!(response.id, "abc123");
    }

    #[test]
    fn test_missing_latex_is_an_error() {
        let parsed = serde_json::from_str::<TextToLatexResponse>(r#"{"error":"boom"}"#);
        assert!(parsed.is_err());
    }
}
