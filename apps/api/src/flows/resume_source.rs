//! Résumé inputs: raw text, or a `data:` URI carrying a PDF or plain-text file.

use base64::Engine as _;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeSource {
    Text(String),
    DataUri(String),
}

impl ResumeSource {
    /// Resolves the source to plain résumé text.
    pub async fn into_text(self) -> Result<String, AppError> {
        match self {
            ResumeSource::Text(text) => Ok(text),
            ResumeSource::DataUri(uri) => text_from_data_uri(&uri).await,
        }
    }
}

/// Decodes `data:<mime>;base64,<payload>` into text.
pub async fn text_from_data_uri(uri: &str) -> Result<String, AppError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| AppError::Validation("resume data URI must start with 'data:'".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AppError::Validation("resume data URI has no payload".into()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| AppError::Validation("resume data URI must be base64-encoded".into()))?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::Validation(format!("resume data URI is not valid base64: {e}")))?;

    text_from_bytes(mime, bytes).await
}

/// Converts an uploaded résumé file to text based on its MIME type.
/// PDF parsing runs on the blocking pool.
pub async fn text_from_bytes(mime: &str, bytes: Vec<u8>) -> Result<String, AppError> {
    let mime = mime.split(';').next().unwrap_or(mime).trim();
    debug!("Decoding {} byte résumé of type {mime}", bytes.len());

    match mime {
        PDF_MIME => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| AppError::Validation(format!("could not read resume PDF: {e}")))?
        .map_err(|e| AppError::Validation(format!("could not read resume PDF: {e}"))),
        TEXT_MIME => String::from_utf8(bytes)
            .map_err(|_| AppError::Validation("resume text is not valid UTF-8".into())),
        other => Err(AppError::Validation(format!(
            "unsupported resume type '{other}', expected {PDF_MIME} or {TEXT_MIME}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(text: &str) -> String {
        base64::engine::general_purpose::STANDARD.encode(text)
    }

    #[tokio::test]
    async fn test_plain_text_source_is_returned_as_is() {
        let text = ResumeSource::Text("Jane Doe, CFO".into())
            .into_text()
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe, CFO");
    }

    #[tokio::test]
    async fn test_text_data_uri_is_decoded() {
        let uri = format!("data:text/plain;base64,{}", encode("Jane Doe, CFO"));
        let text = ResumeSource::DataUri(uri).into_text().await.unwrap();
        assert_eq!(text, "Jane Doe, CFO");
    }

    #[tokio::test]
    async fn test_charset_parameter_is_ignored() {
        let uri = format!("data:text/plain;charset=utf-8;base64,{}", encode("résumé"));
        assert_eq!(text_from_data_uri(&uri).await.unwrap(), "résumé");
    }

    #[tokio::test]
    async fn test_unsupported_mime_is_rejected() {
        let uri = format!("data:image/png;base64,{}", encode("png"));
        assert!(matches!(
            text_from_data_uri(&uri).await,
            Err(AppError::Validation(msg)) if msg.contains("image/png")
        ));
    }

    #[tokio::test]
    async fn test_malformed_uris_are_rejected() {
        assert!(text_from_data_uri("https://example.com/cv.pdf").await.is_err());
        assert!(text_from_data_uri("data:text/plain;base64").await.is_err());
        assert!(text_from_data_uri("data:text/plain,plain").await.is_err());
        assert!(text_from_data_uri("data:text/plain;base64,@@@").await.is_err());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_a_validation_error() {
        let result = text_from_bytes(PDF_MIME, b"not a pdf".to_vec()).await;
        assert!(matches!(
            result,
            Err(AppError::Validation(msg)) if msg.contains("resume PDF")
        ));
    }

    #[test]
    fn test_source_deserializes_from_tagged_json() {
        let source: ResumeSource = serde_json::from_str(r#"{"dataUri": "data:x"}"#).unwrap();
        assert!(matches!(source, ResumeSource::DataUri(uri) if uri == "data:x"));
    }
}
