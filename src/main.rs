mod adapters;
mod cli;
mod core;
mod global_constants;
mod user_settings;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapters::{
    folder_opener, CombinedTextReportWriter, ConsoleProgressSink, CsvReportWriter,
    PdfReportWriter, TesseractOcrService,
};
use crate::cli::CliArgs;
use crate::core::interfaces::adapters::{AggregateReportWriter, OcrService, ProgressSink};
use crate::core::models::{
    CancellationFlag, ExtractionJob, JobOutcome, JobStatus, OutputPolicy,
};
use crate::core::orchestrators::BatchExtractor;
use crate::user_settings::UserSettings;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let args = CliArgs::parse();

    let mut settings = UserSettings::load().unwrap_or_else(|error| {
        log::warn!("[MAIN] Failed to load settings, using defaults: {}", error);
        UserSettings::default()
    });
    args.apply_overrides(&mut settings);

    if args.save_defaults {
        settings.save().context("Failed to save settings")?;
    }

    let config = cli::job_config_from(&settings);
    let job = if args.input.is_dir() {
        ExtractionJob::for_folder(&args.input, config)?
    } else {
        ExtractionJob::for_single_file(&args.input, config)?
    };

    let ocr_service: Arc<dyn OcrService> =
        Arc::new(TesseractOcrService::build(settings.scan_mode)?);
    let progress_sink: Arc<dyn ProgressSink> = Arc::new(ConsoleProgressSink::build());
    let aggregate_writer = aggregate_writer_for(settings.output_policy);

    let cancellation = CancellationFlag::new();
    spawn_cancel_listener(cancellation.clone());

    let extractor = BatchExtractor::build(
        ocr_service,
        progress_sink,
        aggregate_writer,
        cancellation,
    );

    // The loop runs on its own task so the foreground stays free to field the
    // cancellation signal while progress streams in.
    let worker = tokio::spawn(async move { extractor.run_job(&job).await });
    let outcome = worker
        .await
        .context("Extraction task stopped unexpectedly")??;

    print_summary(&outcome);

    if settings.open_when_done && outcome.status == JobStatus::Completed {
        folder_opener::reveal_in_file_manager(&outcome.output_folder);
    }

    Ok(())
}

fn spawn_cancel_listener(cancellation: CancellationFlag) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("[MAIN] Ctrl+C received, requesting cancellation");
            cancellation.request();
        }
    });
}

fn aggregate_writer_for(policy: OutputPolicy) -> Option<Arc<dyn AggregateReportWriter>> {
    match policy {
        OutputPolicy::CombinedText => Some(Arc::new(CombinedTextReportWriter::build())),
        OutputPolicy::Spreadsheet => Some(Arc::new(CsvReportWriter::build())),
        OutputPolicy::Document => Some(Arc::new(PdfReportWriter::build())),
        OutputPolicy::ContentDirs | OutputPolicy::SourceFiles => None,
    }
}

fn print_summary(outcome: &JobOutcome) {
    let status_label = match outcome.status {
        JobStatus::Completed => "completed",
        JobStatus::Cancelled => "cancelled",
    };

    println!(
        "Extraction {}: {} file(s) processed.",
        status_label,
        outcome.records.len()
    );
    println!("Results saved in: {}", outcome.output_folder.display());
    if let Some(aggregate_path) = &outcome.aggregate_path {
        println!("Report: {}", aggregate_path.display());
    }
}
