use crate::global_constants;

const ILLEGAL_FILENAME_CHARS: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

pub fn normalize_extracted_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return global_constants::NO_TEXT_SENTINEL.to_string();
    }
    collapsed
}

pub fn apply_length_limit(text: &str, limit: Option<usize>) -> String {
    match limit {
        Some(max_chars) => text.chars().take(max_chars).collect(),
        None => text.to_string(),
    }
}

pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|character| !ILLEGAL_FILENAME_CHARS.contains(character))
        .collect()
}

// Directory name for the content-named policy: a sanitized prefix of the
// extracted text with spaces turned into underscores.
pub fn derive_content_dir_name(extracted_text: &str) -> String {
    let prefix: String = extracted_text
        .chars()
        .take(global_constants::CONTENT_DIR_NAME_MAX_CHARS)
        .collect();
    let sanitized = sanitize_filename(&prefix.replace(' ', "_"));

    if sanitized.is_empty() {
        global_constants::CONTENT_DIR_NAME_FALLBACK.to_string()
    } else {
        sanitized
    }
}
