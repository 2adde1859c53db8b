use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::AggregateReportWriter;
use crate::core::models::ResultRecord;
use crate::global_constants;

pub struct CombinedTextReportWriter;

impl CombinedTextReportWriter {
    pub fn build() -> Self {
        Self
    }
}

impl AggregateReportWriter for CombinedTextReportWriter {
    fn write_report(&self, records: &[ResultRecord], output_folder: &Path) -> Result<PathBuf> {
        let report_path = output_folder.join(global_constants::COMBINED_TEXT_FILE_NAME);
        log::info!(
            "[TEXT_REPORT] Writing {} record(s) to {}",
            records.len(),
            report_path.display()
        );

        let separator = "-".repeat(global_constants::COMBINED_TEXT_SEPARATOR_LEN);
        let mut contents = String::new();
        for record in records {
            contents.push_str(&record.file_name);
            contents.push_str(":\n");
            contents.push_str(&record.extracted_text);
            contents.push('\n');
            contents.push_str(&separator);
            contents.push('\n');
        }

        fs::write(&report_path, contents)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        Ok(report_path)
    }
}
