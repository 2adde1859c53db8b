use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputPolicy {
    ContentDirs,
    SourceFiles,
    CombinedText,
    Spreadsheet,
    Document,
}

impl OutputPolicy {
    pub fn writes_per_file_outputs(&self) -> bool {
        matches!(self, OutputPolicy::ContentDirs | OutputPolicy::SourceFiles)
    }

    pub fn has_aggregate_artifact(&self) -> bool {
        matches!(
            self,
            OutputPolicy::CombinedText | OutputPolicy::Spreadsheet | OutputPolicy::Document
        )
    }
}

impl fmt::Display for OutputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPolicy::ContentDirs => write!(f, "content-dirs"),
            OutputPolicy::SourceFiles => write!(f, "source-files"),
            OutputPolicy::CombinedText => write!(f, "combined-text"),
            OutputPolicy::Spreadsheet => write!(f, "spreadsheet"),
            OutputPolicy::Document => write!(f, "document"),
        }
    }
}

impl Default for OutputPolicy {
    fn default() -> Self {
        OutputPolicy::ContentDirs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    Absolute,
    Relative,
}

impl Default for PathStyle {
    fn default() -> Self {
        PathStyle::Absolute
    }
}
