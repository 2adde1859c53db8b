use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use rusty_tesseract::{Args, Image as TesseractImage};

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{OcrResult, ScanMode, TextFragment};

pub struct TesseractOcrService {
    engine_args: Args,
}

impl TesseractOcrService {
    // Built once per job; the same engine configuration is reused for every
    // file instead of being reconstructed per invocation.
    pub fn build(scan_mode: ScanMode) -> Result<Self> {
        log::info!(
            "[TESSERACT_OCR] Initializing Tesseract OCR service ({} mode)",
            scan_mode
        );
        Ok(Self {
            engine_args: Self::engine_args_for_mode(scan_mode),
        })
    }

    fn engine_args_for_mode(scan_mode: ScanMode) -> Args {
        let mut args = Args::default();
        match scan_mode {
            ScanMode::Normal => {}
            ScanMode::Super => {
                args.oem = Some(1);
            }
            ScanMode::Intense => {
                args.oem = Some(1);
                args.psm = Some(11);
                args.dpi = Some(300);
            }
        }
        args
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> Result<OcrResult> {
        log::debug!(
            "[TESSERACT_OCR] Starting text extraction for {}x{} image",
            image.width(),
            image.height()
        );

        let tesseract_image = TesseractImage::from_dynamic_image(image)
            .context("Failed to create Tesseract image")?;

        let extracted_text = rusty_tesseract::image_to_string(&tesseract_image, &self.engine_args)
            .context("Failed to extract text from image")?;

        let fragments = match rusty_tesseract::image_to_data(&tesseract_image, &self.engine_args) {
            Ok(output) => output
                .data
                .iter()
                .filter(|word| word.conf > 0.0 && !word.text.trim().is_empty())
                .map(|word| TextFragment::new(word.text.trim().to_string(), word.conf))
                .collect(),
            Err(error) => {
                log::warn!(
                    "[TESSERACT_OCR] Word-level data unavailable, keeping plain text: {}",
                    error
                );
                vec![]
            }
        };

        log::debug!(
            "[TESSERACT_OCR] Extraction complete: {} characters, {} fragment(s)",
            extracted_text.len(),
            fragments.len()
        );

        Ok(OcrResult {
            fragments,
            full_text: extracted_text,
        })
    }
}
