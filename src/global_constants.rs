#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Bulk Text Extractor";

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "tiff"];

pub const OUTPUT_DIR_NAME: &str = "Extracted_Texts";
pub const PER_FILE_TEXT_FILE_NAME: &str = "extracted_text.txt";
pub const COMBINED_TEXT_FILE_NAME: &str = "extracted_texts.txt";
pub const SPREADSHEET_FILE_NAME: &str = "extracted_texts.csv";
pub const DOCUMENT_FILE_NAME: &str = "extracted_texts.pdf";

pub const NO_TEXT_SENTINEL: &str = "[No text found]";
pub const NO_OUTPUT_SENTINEL: &str = "[No folder created]";

pub const CONTENT_DIR_NAME_MAX_CHARS: usize = 50;
pub const CONTENT_DIR_NAME_FALLBACK: &str = "Extracted";

pub const COMBINED_TEXT_SEPARATOR_LEN: usize = 40;

pub const SPREADSHEET_HEADERS: [&str; 3] = ["File Name", "Extracted Text", "Saved Path"];

pub const SETTINGS_DIR_NAME: &str = "bulk-text-extractor";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ERROR_INVALID_FOLDER: &str = "Selected folder is invalid";
pub const ERROR_NO_IMAGES_FOUND: &str = "No valid image files found in the selected folder";
