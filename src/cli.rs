use std::path::PathBuf;

use clap::Parser;

use crate::core::models::{JobConfig, OutputPolicy, PathStyle, ScanMode};
use crate::user_settings::UserSettings;

#[derive(Parser, Debug)]
#[command(
    name = "bulk-text-extractor",
    version,
    about = "Extract text from an image, or a folder of images, into files and reports"
)]
pub struct CliArgs {
    /// Image file or folder of images to process
    pub input: PathBuf,

    /// Where extracted text ends up
    #[arg(long, value_enum)]
    pub policy: Option<OutputPolicy>,

    /// OCR engine profile
    #[arg(long, value_enum)]
    pub scan_mode: Option<ScanMode>,

    /// Maximum characters of extracted text per file (0 = no limit)
    #[arg(long)]
    pub text_limit: Option<usize>,

    /// Report saved paths relative to the source folder
    #[arg(long)]
    pub relative_paths: bool,

    /// Open the output folder in the file manager when the job completes
    #[arg(long)]
    pub open_when_done: bool,

    /// Persist the effective options as the new defaults
    #[arg(long)]
    pub save_defaults: bool,
}

impl CliArgs {
    pub fn apply_overrides(&self, settings: &mut UserSettings) {
        if let Some(policy) = self.policy {
            settings.output_policy = policy;
        }
        if let Some(scan_mode) = self.scan_mode {
            settings.scan_mode = scan_mode;
        }
        if let Some(limit) = self.text_limit {
            settings.text_length_limit = if limit == 0 { None } else { Some(limit) };
        }
        if self.relative_paths {
            settings.path_style = PathStyle::Relative;
        }
        if self.open_when_done {
            settings.open_when_done = true;
        }
    }
}

pub fn job_config_from(settings: &UserSettings) -> JobConfig {
    JobConfig {
        output_policy: settings.output_policy,
        scan_mode: settings.scan_mode,
        text_length_limit: settings.text_length_limit,
        path_style: settings.path_style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(arguments: &[&str]) -> CliArgs {
        CliArgs::parse_from(arguments)
    }

    #[test]
    fn test_parse_accepts_bare_input_path() {
        let args = parse(&["bulk-text-extractor", "./scans"]);

        assert_eq!(args.input, PathBuf::from("./scans"));
        assert!(args.policy.is_none());
        assert!(!args.save_defaults);
    }

    #[test]
    fn test_parse_recognizes_policy_and_scan_mode_values() {
        let args = parse(&[
            "bulk-text-extractor",
            "./scans",
            "--policy",
            "combined-text",
            "--scan-mode",
            "intense",
        ]);

        assert_eq!(args.policy, Some(OutputPolicy::CombinedText));
        assert_eq!(args.scan_mode, Some(ScanMode::Intense));
    }

    #[test]
    fn test_apply_overrides_keeps_settings_when_no_flags_given() {
        let args = parse(&["bulk-text-extractor", "./scans"]);
        let mut settings = UserSettings {
            scan_mode: ScanMode::Super,
            output_policy: OutputPolicy::Spreadsheet,
            text_length_limit: Some(10),
            path_style: PathStyle::Relative,
            open_when_done: true,
        };

        args.apply_overrides(&mut settings);

        assert_eq!(settings.scan_mode, ScanMode::Super);
        assert_eq!(settings.output_policy, OutputPolicy::Spreadsheet);
        assert_eq!(settings.text_length_limit, Some(10));
    }

    #[test]
    fn test_apply_overrides_replaces_settings_with_flag_values() {
        let args = parse(&[
            "bulk-text-extractor",
            "./scans",
            "--policy",
            "document",
            "--scan-mode",
            "super",
            "--text-limit",
            "80",
            "--relative-paths",
        ]);
        let mut settings = UserSettings::default();

        args.apply_overrides(&mut settings);

        assert_eq!(settings.output_policy, OutputPolicy::Document);
        assert_eq!(settings.scan_mode, ScanMode::Super);
        assert_eq!(settings.text_length_limit, Some(80));
        assert_eq!(settings.path_style, PathStyle::Relative);
    }

    #[test]
    fn test_text_limit_zero_means_no_limit() {
        let args = parse(&["bulk-text-extractor", "./scans", "--text-limit", "0"]);
        let mut settings = UserSettings {
            text_length_limit: Some(25),
            ..UserSettings::default()
        };

        args.apply_overrides(&mut settings);

        assert!(settings.text_length_limit.is_none());
    }

    #[test]
    fn test_job_config_mirrors_settings() {
        let settings = UserSettings {
            scan_mode: ScanMode::Intense,
            output_policy: OutputPolicy::SourceFiles,
            text_length_limit: Some(200),
            path_style: PathStyle::Relative,
            open_when_done: false,
        };

        let config = job_config_from(&settings);

        assert_eq!(config.scan_mode, ScanMode::Intense);
        assert_eq!(config.output_policy, OutputPolicy::SourceFiles);
        assert_eq!(config.text_length_limit, Some(200));
        assert_eq!(config.path_style, PathStyle::Relative);
    }
}
