use super::{OcrBackend, OcrProgress, ProgressCallback, STATUS_RECOGNIZING};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use image::ImageFormat;
use std::io::Cursor;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// OCR through the `tesseract` executable. Images are decoded with `image`
/// and piped to tesseract as PNG on stdin.
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    program: String,
}

impl TesseractOcr {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Returns a backend if `program --version` runs successfully.
    pub async fn detect(program: &str) -> Option<Self> {
        match Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) if status.success() => {
                debug!("Found tesseract at {}", program);
                Some(Self::new(program))
            }
            Ok(status) => {
                debug!("tesseract at {} exited with {}", program, status);
                None
            }
            Err(e) => {
                debug!("tesseract not available at {}: {}", program, e);
                None
            }
        }
    }
}

fn report(progress: &Option<ProgressCallback>, status: &str, fraction: f64) {
    if let Some(callback) = progress {
        callback(&OcrProgress {
            status: status.to_string(),
            progress: fraction,
        });
    }
}

/// Decodes any supported image format and re-encodes it as PNG.
pub fn normalize_image(bytes: &[u8]) -> Result<Vec<u8>> {
    let image = image::load_from_memory(bytes).context("Failed to decode image")?;
    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .context("Failed to encode image as PNG")?;
    Ok(png.into_inner())
}

#[async_trait]
impl OcrBackend for TesseractOcr {
    async fn recognize(
        &self,
        image: Vec<u8>,
        language: &str,
        progress: Option<ProgressCallback>,
    ) -> Result<String> {
        report(&progress, "loading image", 0.0);
        let png = tokio::task::spawn_blocking(move || normalize_image(&image)).await??;

        report(&progress, STATUS_RECOGNIZING, 0.0);
        let mut child = Command::new(&self.program)
            .args(["stdin", "stdout", "-l", language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program))?;

        let mut stdin = child.stdin.take().context("tesseract stdin unavailable")?;
        let writer = tokio::spawn(async move {
            stdin.write_all(&png).await?;
            stdin.shutdown().await
        });

        let output = child.wait_with_output().await?;
        // A write error is secondary if tesseract already failed
        let written = writer.await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("tesseract exited with {}: {}", output.status, stderr.trim());
        }
        written.context("Failed to send image to tesseract")?;

        report(&progress, STATUS_RECOGNIZING, 1.0);
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Recognized {} chars", text.len());
        Ok(text)
    }
}
