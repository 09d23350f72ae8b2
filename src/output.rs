//! Output formatting for eolscan results.
//!
//! Provides functions to format a [`ScanResult`] into a plain-text report
//! (one line per file) or JSON.

use crate::{EolscanError, ScanResult};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the scan result into a string.
pub fn format_result(result: &ScanResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &ScanResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), EolscanError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| EolscanError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_text(result: &ScanResult) -> String {
    let mut out = String::with_capacity(1024);
    let mut converted = 0usize;
    let mut skipped = 0usize;

    for file in &result.files {
        match (&file.info, &file.skipped) {
            (Some(info), _) => {
                out.push_str(&format!(
                    "LF:{:<5} CRLF:{:<5} CR:{:<5} {:>5}  {}{}\n",
                    info.lf_count,
                    info.crlf_count,
                    info.cr_count,
                    info.variant.as_str(),
                    file.path.display(),
                    if file.converted { "  [converted]" } else { "" },
                ));
                if file.converted {
                    converted += 1;
                }
            }
            (None, Some(reason)) => {
                out.push_str(&format!("skipped ({}): {}\n", reason, file.path.display()));
                skipped += 1;
            }
            (None, None) => {}
        }
    }

    out.push_str(&format!(
        "{} files, {} converted, {} skipped\n",
        result.files.len(),
        converted,
        skipped
    ));
    out
}

fn format_json(result: &ScanResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}
