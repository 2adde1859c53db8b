use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::models::{OutputPolicy, PathStyle, ResultRecord, ScanMode};
use crate::global_constants;

#[derive(Debug, Clone, Copy, Default)]
pub struct JobConfig {
    pub output_policy: OutputPolicy,
    pub scan_mode: ScanMode,
    pub text_length_limit: Option<usize>,
    pub path_style: PathStyle,
}

#[derive(Debug, Clone)]
pub struct ExtractionJob {
    pub source_folder: PathBuf,
    pub files: Vec<PathBuf>,
    pub output_policy: OutputPolicy,
    pub scan_mode: ScanMode,
    pub text_length_limit: Option<usize>,
    pub path_style: PathStyle,
}

impl ExtractionJob {
    pub fn for_folder(folder: &Path, config: JobConfig) -> Result<Self> {
        if !folder.is_dir() {
            bail!(
                "{}: {}",
                global_constants::ERROR_INVALID_FOLDER,
                folder.display()
            );
        }

        let files = collect_image_files(folder)?;
        if files.is_empty() {
            bail!("{}", global_constants::ERROR_NO_IMAGES_FOUND);
        }

        log::info!(
            "[JOB] Built job for {} with {} image(s), policy {}",
            folder.display(),
            files.len(),
            config.output_policy
        );

        Ok(Self::from_parts(folder.to_path_buf(), files, config))
    }

    pub fn for_single_file(file: &Path, config: JobConfig) -> Result<Self> {
        if !file.is_file() {
            bail!("Selected image does not exist: {}", file.display());
        }
        if !is_supported_image(file) {
            bail!("Unsupported image type: {}", file.display());
        }

        let source_folder = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self::from_parts(
            source_folder,
            vec![file.to_path_buf()],
            config,
        ))
    }

    fn from_parts(source_folder: PathBuf, files: Vec<PathBuf>, config: JobConfig) -> Self {
        Self {
            source_folder,
            files,
            output_policy: config.output_policy,
            scan_mode: config.scan_mode,
            text_length_limit: config.text_length_limit,
            path_style: config.path_style,
        }
    }

    pub fn output_folder(&self) -> PathBuf {
        self.source_folder.join(global_constants::OUTPUT_DIR_NAME)
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let lowered = extension.to_lowercase();
            global_constants::SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| *supported == lowered)
        })
        .unwrap_or(false)
}

// Non-recursive; sorted by file name so repeated runs visit files in a
// stable order.
pub fn collect_image_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("Failed to read folder {}", folder.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    files.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    Ok(files)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Completed,
    Cancelled,
}

#[derive(Debug)]
pub struct JobOutcome {
    pub status: JobStatus,
    pub records: Vec<ResultRecord>,
    pub output_folder: PathBuf,
    pub aggregate_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_is_supported_image_matches_extensions_case_insensitively() {
        assert!(is_supported_image(Path::new("scan.png")));
        assert!(is_supported_image(Path::new("scan.JPG")));
        assert!(is_supported_image(Path::new("scan.TiFf")));
        assert!(!is_supported_image(Path::new("scan.gif")));
        assert!(!is_supported_image(Path::new("scan")));
    }

    #[test]
    fn test_collect_image_files_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("b.jpg"));
        touch(&temp_dir.path().join("a.png"));
        touch(&temp_dir.path().join("notes.txt"));

        let files = collect_image_files(temp_dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_for_folder_rejects_missing_folder() {
        let error = ExtractionJob::for_folder(Path::new("/no/such/folder"), JobConfig::default())
            .unwrap_err();

        assert!(error.to_string().contains("Selected folder is invalid"));
    }

    #[test]
    fn test_for_folder_rejects_folder_without_images() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("notes.txt"));

        let error =
            ExtractionJob::for_folder(temp_dir.path(), JobConfig::default()).unwrap_err();

        assert!(error.to_string().contains("No valid image files found"));
    }

    #[test]
    fn test_for_folder_builds_job_with_all_images() {
        let temp_dir = tempfile::tempdir().unwrap();
        touch(&temp_dir.path().join("a.png"));
        touch(&temp_dir.path().join("b.bmp"));

        let job = ExtractionJob::for_folder(temp_dir.path(), JobConfig::default()).unwrap();

        assert_eq!(job.total_files(), 2);
        assert_eq!(job.source_folder, temp_dir.path());
        assert_eq!(
            job.output_folder(),
            temp_dir.path().join("Extracted_Texts")
        );
    }

    #[test]
    fn test_for_single_file_builds_one_file_job_in_parent_folder() {
        let temp_dir = tempfile::tempdir().unwrap();
        let image = temp_dir.path().join("receipt.png");
        touch(&image);

        let job = ExtractionJob::for_single_file(&image, JobConfig::default()).unwrap();

        assert_eq!(job.total_files(), 1);
        assert_eq!(job.source_folder, temp_dir.path());
    }

    #[test]
    fn test_for_single_file_rejects_unsupported_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let document = temp_dir.path().join("notes.txt");
        touch(&document);

        let error =
            ExtractionJob::for_single_file(&document, JobConfig::default()).unwrap_err();

        assert!(error.to_string().contains("Unsupported image type"));
    }
}
