use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::AggregateReportWriter;
use crate::core::models::ResultRecord;
use crate::global_constants;

pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn build() -> Self {
        Self
    }
}

impl AggregateReportWriter for CsvReportWriter {
    fn write_report(&self, records: &[ResultRecord], output_folder: &Path) -> Result<PathBuf> {
        let report_path = output_folder.join(global_constants::SPREADSHEET_FILE_NAME);
        log::info!(
            "[CSV_REPORT] Writing {} record(s) to {}",
            records.len(),
            report_path.display()
        );

        let mut writer = csv::Writer::from_path(&report_path)
            .with_context(|| format!("Failed to create {}", report_path.display()))?;

        writer
            .write_record(global_constants::SPREADSHEET_HEADERS)
            .context("Failed to write spreadsheet header")?;

        for record in records {
            writer
                .write_record([
                    record.file_name.as_str(),
                    record.extracted_text.as_str(),
                    record.saved_path_display(),
                ])
                .with_context(|| format!("Failed to write row for {}", record.file_name))?;
        }

        writer.flush().context("Failed to flush spreadsheet")?;
        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<ResultRecord> {
        vec![
            ResultRecord::new(
                "a.png".to_string(),
                "Hello World".to_string(),
                Some("/out/Hello_World".to_string()),
            ),
            ResultRecord::new(
                "b.jpg".to_string(),
                "Error: engine exploded".to_string(),
                None,
            ),
        ]
    }

    #[test]
    fn test_write_report_creates_csv_with_header_and_rows() {
        let temp_dir = tempfile::tempdir().unwrap();

        let report_path = CsvReportWriter::build()
            .write_report(&sample_records(), temp_dir.path())
            .unwrap();

        assert_eq!(
            report_path.file_name().unwrap().to_str().unwrap(),
            "extracted_texts.csv"
        );

        let mut reader = csv::Reader::from_path(&report_path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["File Name", "Extracted Text", "Saved Path"]
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "a.png");
        assert_eq!(&rows[0][2], "/out/Hello_World");
        assert_eq!(&rows[1][1], "Error: engine exploded");
        assert_eq!(&rows[1][2], "[No folder created]");
    }

    #[test]
    fn test_write_report_quotes_text_containing_commas_and_newlines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let records = vec![ResultRecord::new(
            "a.png".to_string(),
            "one, two, three".to_string(),
            None,
        )];

        let report_path = CsvReportWriter::build()
            .write_report(&records, temp_dir.path())
            .unwrap();

        let mut reader = csv::Reader::from_path(&report_path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[1], "one, two, three");
    }
}
