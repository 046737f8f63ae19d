use super::PdfBackend;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

/// PDF text layer extraction with `pdf-extract`. Parsing runs on the blocking
/// pool.
pub struct PdfExtractBackend;

#[async_trait]
impl PdfBackend for PdfExtractBackend {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String> {
        debug!("Extracting text from {} byte PDF", bytes.len());
        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| anyhow!("{e}"))
        })
        .await??;
        debug!("Extracted {} chars from PDF", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{MIME_PDF, TextExtractor, UploadedFile};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_invalid_pdf_returns_error() {
        let result = PdfExtractBackend.extract(b"not a pdf".to_vec()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_pdf_extracts_to_empty_text() {
        let extractor = TextExtractor::new(Some(Arc::new(PdfExtractBackend)), None, "eng");
        let file = UploadedFile::new("broken.pdf", MIME_PDF, b"%PDF-1.4 garbage".to_vec());
        assert_eq!(extractor.extract_text_from_file(&file, None).await, "");
    }
}
