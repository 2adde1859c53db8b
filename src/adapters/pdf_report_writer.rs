use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::core::interfaces::adapters::AggregateReportWriter;
use crate::core::models::ResultRecord;
use crate::global_constants;

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const PAGE_MARGIN: i64 = 50;
const FONT_SIZE: i64 = 12;
const LINE_HEIGHT: i64 = 14;
const WRAP_COLUMNS: usize = 90;
const MAX_LINES_PER_PAGE: usize = 52;

pub struct PdfReportWriter;

impl PdfReportWriter {
    pub fn build() -> Self {
        Self
    }

    // One page per record; long texts continue onto follow-up pages rather
    // than bleeding into the next record.
    fn record_pages(record: &ResultRecord) -> Vec<Vec<String>> {
        let mut lines = vec![format!("{}:", record.file_name), String::new()];
        lines.extend(wrap_text(&record.extracted_text, WRAP_COLUMNS));

        lines
            .chunks(MAX_LINES_PER_PAGE)
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    fn page_content(lines: &[String]) -> Content {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LINE_HEIGHT.into()]),
            Operation::new(
                "Td",
                vec![PAGE_MARGIN.into(), (PAGE_HEIGHT - PAGE_MARGIN).into()],
            ),
        ];
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.clone())],
            ));
        }
        operations.push(Operation::new("ET", vec![]));
        Content { operations }
    }
}

impl AggregateReportWriter for PdfReportWriter {
    fn write_report(&self, records: &[ResultRecord], output_folder: &Path) -> Result<PathBuf> {
        let report_path = output_folder.join(global_constants::DOCUMENT_FILE_NAME);
        log::info!(
            "[PDF_REPORT] Writing {} record(s) to {}",
            records.len(),
            report_path.display()
        );

        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut page_ids: Vec<Object> = Vec::new();
        for record in records {
            for lines in Self::record_pages(record) {
                let content = Self::page_content(&lines);
                let encoded = content
                    .encode()
                    .context("Failed to encode PDF page content")?;
                let content_id = document.add_object(Stream::new(dictionary! {}, encoded));
                let page_id = document.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                });
                page_ids.push(page_id.into());
            }
        }

        let page_count = page_ids.len() as i64;
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        document.compress();

        document
            .save(&report_path)
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        Ok(report_path)
    }
}

fn wrap_text(text: &str, max_columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_columns {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }

        // Hard-split words longer than a full line.
        while current.chars().count() > max_columns {
            let head: String = current.chars().take(max_columns).collect();
            let tail: String = current.chars().skip(max_columns).collect();
            lines.push(head);
            current = tail;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
