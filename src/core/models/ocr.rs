#[derive(Debug, Clone)]
pub struct TextFragment {
    pub content: String,
    pub confidence: f32,
}

impl TextFragment {
    pub fn new(content: String, confidence: f32) -> Self {
        Self {
            content,
            confidence,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OcrResult {
    pub fragments: Vec<TextFragment>,
    pub full_text: String,
}

impl OcrResult {
    pub fn from_full_text(full_text: String) -> Self {
        Self {
            fragments: vec![],
            full_text,
        }
    }
}
