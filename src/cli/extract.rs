use super::ui;
use crate::extract::{OcrProgress, ProgressCallback, TextExtractor, UploadedFile};
use std::sync::Arc;

/// Extracts and prints the text of one upload. Extraction itself never fails;
/// an empty result is reported as such.
pub async fn run(extractor: &TextExtractor, file: &UploadedFile) {
    let pb = ui::new_spinner(&format!("Extracting text from {}...", file.name));
    let pb_clone = pb.clone();
    let progress: ProgressCallback = Arc::new(move |p: &OcrProgress| {
        pb_clone.set_message(format!("{} ({:.0}%)", p.status, p.progress * 100.0));
    });

    let text = extractor.extract_text_from_file(file, Some(progress)).await;
    pb.finish_and_clear();

    if text.trim().is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No text extracted (unsupported file, extraction failed, or nothing to read).",
                ui::StyleType::Subtle
            )
        );
    } else {
        println!("{}", text.trim_end());
    }
}
