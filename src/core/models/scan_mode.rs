use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    Normal,
    Super,
    Intense,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Normal => write!(f, "normal"),
            ScanMode::Super => write!(f, "super"),
            ScanMode::Intense => write!(f, "intense"),
        }
    }
}

impl Default for ScanMode {
    fn default() -> Self {
        ScanMode::Normal
    }
}
