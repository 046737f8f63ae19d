//! Text extraction for uploaded documents.
//!
//! An upload is routed to the PDF backend or the OCR backend depending on its
//! declared MIME type and file name. Extraction is best effort: a missing
//! backend, a backend error or a backend panic all yield an empty string, so
//! an empty result means "nothing extracted", not "empty document".

pub mod ocr;
pub mod pdf;

use crate::core::config::OcrConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const MIME_PDF: &str = "application/pdf";
const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".jpeg"];
/// OCR status whose progress is worth reporting.
pub const STATUS_RECOGNIZING: &str = "recognizing text";

/// An uploaded file: declared MIME type, file name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk. The MIME type is taken as given (empty if
    /// unknown); nothing is sniffed from the content.
    pub async fn from_path(path: &Path, mime_type: Option<&str>) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, mime_type.unwrap_or_default(), bytes))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
}

impl DocumentKind {
    /// Picks the extraction path from the declared type, falling back to the
    /// file name suffix. `None` for anything else.
    pub fn detect(mime_type: &str, file_name: &str) -> Option<Self> {
        let mime_type = mime_type.to_lowercase();
        let file_name = file_name.to_lowercase();

        if mime_type == MIME_PDF || file_name.ends_with(".pdf") {
            return Some(DocumentKind::Pdf);
        }
        if mime_type.starts_with("image/")
            || IMAGE_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix))
        {
            return Some(DocumentKind::Image);
        }
        None
    }
}

/// Progress reported by an OCR backend while it works.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrProgress {
    pub status: String,
    /// Fraction complete, 0.0 to 1.0.
    pub progress: f64,
}

pub type ProgressCallback = Arc<dyn Fn(&OcrProgress) + Send + Sync>;

#[async_trait]
pub trait PdfBackend: Send + Sync {
    async fn extract(&self, bytes: Vec<u8>) -> Result<String>;
}

#[async_trait]
pub trait OcrBackend: Send + Sync {
    async fn recognize(
        &self,
        image: Vec<u8>,
        language: &str,
        progress: Option<ProgressCallback>,
    ) -> Result<String>;
}

/// Routes uploads to whichever backends are available.
#[derive(Clone)]
pub struct TextExtractor {
    pdf: Option<Arc<dyn PdfBackend>>,
    ocr: Option<Arc<dyn OcrBackend>>,
    language: String,
}

impl TextExtractor {
    pub fn new(
        pdf: Option<Arc<dyn PdfBackend>>,
        ocr: Option<Arc<dyn OcrBackend>>,
        language: &str,
    ) -> Self {
        Self {
            pdf,
            ocr,
            language: language.to_string(),
        }
    }

    /// Builds an extractor with the bundled PDF backend and, when enabled and
    /// installed, the tesseract OCR backend.
    pub async fn from_config(config: &OcrConfig) -> Self {
        let ocr: Option<Arc<dyn OcrBackend>> = if config.enabled {
            ocr::TesseractOcr::detect(&config.tesseract_path)
                .await
                .map(|t| Arc::new(t) as Arc<dyn OcrBackend>)
        } else {
            debug!("OCR disabled in config");
            None
        };

        Self::new(
            Some(Arc::new(pdf::PdfExtractBackend)),
            ocr,
            &config.language,
        )
    }

    pub async fn extract_text_from_file(
        &self,
        file: &UploadedFile,
        progress: Option<ProgressCallback>,
    ) -> String {
        match DocumentKind::detect(&file.mime_type, &file.name) {
            Some(DocumentKind::Pdf) => self.extract_text_from_pdf(file).await,
            Some(DocumentKind::Image) => self.extract_text_from_image(file, progress).await,
            None => {
                warn!(
                    mime_type = %file.mime_type.to_lowercase(),
                    name = %file.name,
                    "Unsupported file type for OCR"
                );
                String::new()
            }
        }
    }

    pub async fn extract_text_from_pdf(&self, file: &UploadedFile) -> String {
        let Some(backend) = self.pdf.clone() else {
            warn!("PDF extraction unavailable");
            return String::new();
        };

        let bytes = file.bytes.clone();
        let handle = tokio::spawn(async move { backend.extract(bytes).await });
        match flatten(handle.await) {
            Ok(text) => text,
            Err(e) => {
                error!(name = %file.name, error = %e, "PDF extraction failed");
                String::new()
            }
        }
    }

    pub async fn extract_text_from_image(
        &self,
        file: &UploadedFile,
        progress: Option<ProgressCallback>,
    ) -> String {
        let Some(backend) = self.ocr.clone() else {
            warn!("OCR unavailable");
            return String::new();
        };

        let logger: ProgressCallback = Arc::new(move |message: &OcrProgress| {
            if message.status == STATUS_RECOGNIZING {
                info!("OCR Progress: {}%", (message.progress * 100.0).round());
            }
            if let Some(callback) = &progress {
                callback(message);
            }
        });

        let bytes = file.bytes.clone();
        let language = self.language.clone();
        let handle =
            tokio::spawn(async move { backend.recognize(bytes, &language, Some(logger)).await });
        match flatten(handle.await) {
            Ok(text) => text,
            Err(e) => {
                error!(name = %file.name, error = %e, "OCR extraction failed");
                String::new()
            }
        }
    }
}

/// Collapses a backend task's join result, turning a panic into an error.
fn flatten(joined: Result<Result<String>, tokio::task::JoinError>) -> Result<String> {
    joined.map_err(|e| anyhow!("extraction task failed: {e}"))?
}
