mod combined_text_report_writer;
mod console_progress_sink;
mod csv_report_writer;
pub mod folder_opener;
mod pdf_report_writer;
mod tesseract_ocr_service;

pub use combined_text_report_writer::CombinedTextReportWriter;
pub use console_progress_sink::ConsoleProgressSink;
pub use csv_report_writer::CsvReportWriter;
pub use pdf_report_writer::PdfReportWriter;
pub use tesseract_ocr_service::TesseractOcrService;
