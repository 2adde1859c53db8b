use crate::global_constants;

#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub file_name: String,
    pub extracted_text: String,
    pub saved_path: Option<String>,
}

impl ResultRecord {
    pub fn new(file_name: String, extracted_text: String, saved_path: Option<String>) -> Self {
        Self {
            file_name,
            extracted_text,
            saved_path,
        }
    }

    pub fn saved_path_display(&self) -> &str {
        self.saved_path
            .as_deref()
            .unwrap_or(global_constants::NO_OUTPUT_SENTINEL)
    }

    pub fn is_error(&self) -> bool {
        self.extracted_text.starts_with("Error:")
    }
}
