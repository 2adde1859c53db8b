use crate::core::models::{JobStatus, ProgressUpdate};

pub trait ProgressSink: Send + Sync {
    fn on_job_started(&self, total_files: usize);
    fn on_file_started(&self, file_name: &str);
    fn on_progress(&self, update: &ProgressUpdate);
    fn on_job_finished(&self, status: JobStatus);
}
