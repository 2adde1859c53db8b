use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::models::ResultRecord;

pub trait AggregateReportWriter: Send + Sync {
    fn write_report(&self, records: &[ResultRecord], output_folder: &Path) -> Result<PathBuf>;
}
