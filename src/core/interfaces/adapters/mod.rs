mod ocr_service;
mod progress_sink;
mod report_writer;

pub use ocr_service::OcrService;
pub use progress_sink::ProgressSink;
pub use report_writer::AggregateReportWriter;
