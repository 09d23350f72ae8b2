use crate::eol::LineEndingInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The line-ending report for a single matched file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// The classification, present unless the file was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<LineEndingInfo>,
    /// Whether the file was rewritten on disk during this scan.
    pub converted: bool,
    /// Why the file was skipped (too large, binary), if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

/// The complete result of an eolscan run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResult {
    /// One report per matched file, sorted by path.
    pub files: Vec<FileReport>,
}
