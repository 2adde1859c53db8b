mod cancellation;
mod job;
mod ocr;
mod output_policy;
mod progress;
mod result_record;
mod scan_mode;

pub use cancellation::CancellationFlag;
pub use job::{
    collect_image_files, is_supported_image, ExtractionJob, JobConfig, JobOutcome, JobStatus,
};
pub use ocr::{OcrResult, TextFragment};
pub use output_policy::{OutputPolicy, PathStyle};
pub use progress::{format_duration, ProgressState, ProgressUpdate};
pub use result_record::ResultRecord;
pub use scan_mode::ScanMode;
