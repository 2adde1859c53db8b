use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::{AggregateReportWriter, OcrService, ProgressSink};
use crate::core::models::{
    CancellationFlag, ExtractionJob, JobOutcome, JobStatus, OutputPolicy, PathStyle,
    ProgressState, ResultRecord,
};
use crate::core::text_processing;
use crate::global_constants;

pub struct BatchExtractor {
    ocr_service: Arc<dyn OcrService>,
    progress_sink: Arc<dyn ProgressSink>,
    aggregate_writer: Option<Arc<dyn AggregateReportWriter>>,
    cancellation: CancellationFlag,
}

impl BatchExtractor {
    pub fn build(
        ocr_service: Arc<dyn OcrService>,
        progress_sink: Arc<dyn ProgressSink>,
        aggregate_writer: Option<Arc<dyn AggregateReportWriter>>,
        cancellation: CancellationFlag,
    ) -> Self {
        Self {
            ocr_service,
            progress_sink,
            aggregate_writer,
            cancellation,
        }
    }

    pub async fn run_job(&self, job: &ExtractionJob) -> Result<JobOutcome> {
        let output_folder = job.output_folder();
        fs::create_dir_all(&output_folder).with_context(|| {
            format!(
                "Failed to create output directory {}",
                output_folder.display()
            )
        })?;

        log::info!(
            "[EXTRACTOR] Starting job: {} file(s), policy {}",
            job.total_files(),
            job.output_policy
        );

        let mut progress = ProgressState::start(job.total_files());
        self.progress_sink.on_job_started(job.total_files());

        let mut records: Vec<ResultRecord> = Vec::with_capacity(job.total_files());
        let mut cancelled = false;

        for file_path in &job.files {
            // Cancellation is honored at file boundaries only; an in-flight
            // recognition always runs to completion.
            if self.cancellation.is_requested() {
                log::warn!("[EXTRACTOR] Cancellation requested, stopping before next file");
                cancelled = true;
                break;
            }

            let file_name = display_file_name(file_path);
            self.progress_sink.on_file_started(&file_name);
            log::info!("[EXTRACTOR] Processing: {}", file_name);

            let extracted_text = match self.recognize_file(file_path).await {
                Ok(raw_text) => text_processing::normalize_extracted_text(&raw_text),
                Err(error) => {
                    log::error!("[EXTRACTOR] Recognition failed for {}: {}", file_name, error);
                    format!("Error: {}", error)
                }
            };
            let extracted_text =
                text_processing::apply_length_limit(&extracted_text, job.text_length_limit);

            let saved_path =
                self.persist_per_file_output(job, &output_folder, file_path, &extracted_text);

            records.push(ResultRecord::new(file_name, extracted_text, saved_path));

            progress.advance();
            let update = progress.snapshot();
            log::debug!("[EXTRACTOR] {}", update.describe());
            self.progress_sink.on_progress(&update);
        }

        let aggregate_path = self.flush_aggregate(&records, &output_folder)?;

        let status = if cancelled {
            JobStatus::Cancelled
        } else {
            JobStatus::Completed
        };
        self.progress_sink.on_job_finished(status);

        log::info!(
            "[EXTRACTOR] Job finished: {:?} with {} record(s)",
            status,
            records.len()
        );

        Ok(JobOutcome {
            status,
            records,
            output_folder,
            aggregate_path,
        })
    }

    async fn recognize_file(&self, file_path: &Path) -> Result<String> {
        let image = image::open(file_path)
            .with_context(|| format!("Failed to open image {}", file_path.display()))?;
        let result = self.ocr_service.extract_text_from_image(&image).await?;
        Ok(result.full_text)
    }

    fn persist_per_file_output(
        &self,
        job: &ExtractionJob,
        output_folder: &Path,
        file_path: &Path,
        extracted_text: &str,
    ) -> Option<String> {
        match job.output_policy {
            OutputPolicy::ContentDirs => {
                self.write_content_named_dir(job, output_folder, extracted_text)
            }
            OutputPolicy::SourceFiles => {
                self.write_source_named_file(job, output_folder, file_path, extracted_text)
            }
            _ => None,
        }
    }

    fn write_content_named_dir(
        &self,
        job: &ExtractionJob,
        output_folder: &Path,
        extracted_text: &str,
    ) -> Option<String> {
        if extracted_text.starts_with("Error:")
            || extracted_text == global_constants::NO_TEXT_SENTINEL
        {
            return None;
        }

        let dir_name = text_processing::derive_content_dir_name(extracted_text);
        let target_dir = output_folder.join(&dir_name);
        let target_file = target_dir.join(global_constants::PER_FILE_TEXT_FILE_NAME);

        let write_result =
            fs::create_dir_all(&target_dir).and_then(|_| fs::write(&target_file, extracted_text));

        match write_result {
            Ok(()) => Some(self.report_path(job, &target_dir)),
            Err(error) => {
                log::warn!(
                    "[EXTRACTOR] Failed to write text into {}: {}",
                    target_dir.display(),
                    error
                );
                None
            }
        }
    }

    fn write_source_named_file(
        &self,
        job: &ExtractionJob,
        output_folder: &Path,
        file_path: &Path,
        extracted_text: &str,
    ) -> Option<String> {
        let stem = file_path.file_stem()?.to_string_lossy();
        let target_file = output_folder.join(format!("{}.txt", stem));

        match fs::write(&target_file, extracted_text) {
            Ok(()) => Some(self.report_path(job, &target_file)),
            Err(error) => {
                log::warn!(
                    "[EXTRACTOR] Failed to write {}: {}",
                    target_file.display(),
                    error
                );
                None
            }
        }
    }

    fn report_path(&self, job: &ExtractionJob, path: &Path) -> String {
        match job.path_style {
            PathStyle::Absolute => path.display().to_string(),
            PathStyle::Relative => path
                .strip_prefix(&job.source_folder)
                .unwrap_or(path)
                .display()
                .to_string(),
        }
    }

    // Records present at the point of stopping are always flushed, whether the
    // job completed or was cancelled part-way through.
    fn flush_aggregate(
        &self,
        records: &[ResultRecord],
        output_folder: &Path,
    ) -> Result<Option<PathBuf>> {
        let writer = match self.aggregate_writer.as_ref() {
            Some(writer) => writer,
            None => return Ok(None),
        };
        if records.is_empty() {
            log::debug!("[EXTRACTOR] No records to aggregate, skipping report");
            return Ok(None);
        }

        let report_path = writer
            .write_report(records, output_folder)
            .context("Failed to write aggregate report")?;
        log::info!("[EXTRACTOR] Saved results to {}", report_path.display());
        Ok(Some(report_path))
    }
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
