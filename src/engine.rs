use crate::eol::{convert_line_endings, detect_line_endings};
use crate::error::EolscanError;
use crate::glob::matches_glob;
use crate::options::EolscanOptions;
use crate::types::{FileReport, ScanResult};
use ignore::WalkBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &EolscanOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        Self {
            inner: builder.build(),
        }
    }
    fn collect_entries(self) -> Result<Vec<PathBuf>, EolscanError> {
        self.inner
            .map(|result| match result {
                Ok(entry) => Ok(entry.path().to_path_buf()),
                Err(e) => Err(EolscanError::Walk(e.to_string())),
            })
            .collect()
    }
}

/// The scan-root-relative form of `path`, used both for glob matching and
/// in the report.
fn relative_to_root(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Patterns are tried in order; the first match wins. No patterns means
/// every file matches.
fn matches_any(patterns: &[String], relative: &Path) -> bool {
    if patterns.is_empty() {
        return true;
    }
    let candidate = relative.to_string_lossy();
    patterns.iter().any(|p| matches_glob(p, &candidate))
}

fn process_file(
    path: &Path,
    relative: PathBuf,
    options: &EolscanOptions,
) -> Result<FileReport, EolscanError> {
    if let Some(limit) = options.file_size_limit {
        let metadata = fs::metadata(path).map_err(|e| EolscanError::io(path, e))?;
        if metadata.len() > limit {
            #[cfg(feature = "logging")]
            tracing::debug!(
                "File too large ({} > {}), skipping: {}",
                metadata.len(),
                limit,
                path.display()
            );
            return Ok(FileReport {
                path: relative,
                info: None,
                converted: false,
                skipped: Some("file exceeds size limit".to_string()),
            });
        }
    }
    let content = fs::read(path).map_err(|e| EolscanError::io(path, e))?;
    if options.skip_binary {
        let probe = &content[..content.len().min(4096)];
        if content_inspector::inspect(probe).is_binary() {
            #[cfg(feature = "logging")]
            tracing::debug!("Binary file detected, skipping: {}", path.display());
            return Ok(FileReport {
                path: relative,
                info: None,
                converted: false,
                skipped: Some("binary file".to_string()),
            });
        }
    }
    let info = detect_line_endings(&content);
    let mut converted = false;
    if let Some(target) = options.target {
        let rewritten = convert_line_endings(&content, target)?;
        // Byte-equality, not the detected variant, decides whether the
        // file needs rewriting: a uniform file converted to its own kind
        // reproduces itself exactly.
        if rewritten != content {
            fs::write(path, &rewritten).map_err(|e| EolscanError::io(path, e))?;
            converted = true;
        }
    }
    Ok(FileReport {
        path: relative,
        info: Some(info),
        converted,
        skipped: None,
    })
}

/// Walks `options.root`, keeps regular files whose root-relative path
/// matches one of the supplied glob patterns, classifies each file's line
/// endings, and rewrites files in place when a target style is set.
pub fn eolscan(options: EolscanOptions) -> Result<ScanResult, EolscanError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting eolscan with root: {}", options.root.display());
    let walker = Walker::new(&options);
    let entries = walker.collect_entries()?;
    let mut candidates: Vec<(PathBuf, PathBuf)> = entries
        .into_iter()
        .filter(|p| p.is_file())
        .map(|p| {
            let relative = relative_to_root(&options.root, &p);
            (p, relative)
        })
        .filter(|(_, relative)| matches_any(&options.patterns, relative))
        .collect();
    candidates.sort_by(|a, b| a.1.cmp(&b.1));
    #[cfg(not(feature = "parallel"))]
    let files = process_files(candidates, &options)?;
    #[cfg(feature = "parallel")]
    let files = process_files_parallel(candidates, &options)?;
    Ok(ScanResult { files })
}
#[cfg(not(feature = "parallel"))]
fn process_files(
    candidates: Vec<(PathBuf, PathBuf)>,
    options: &EolscanOptions,
) -> Result<Vec<FileReport>, EolscanError> {
    let mut files = Vec::with_capacity(candidates.len());
    for (path, relative) in candidates {
        files.push(process_file(&path, relative, options)?);
    }
    Ok(files)
}
#[cfg(feature = "parallel")]
fn process_files_parallel(
    candidates: Vec<(PathBuf, PathBuf)>,
    options: &EolscanOptions,
) -> Result<Vec<FileReport>, EolscanError> {
    candidates
        .into_par_iter()
        .map(|(path, relative)| process_file(&path, relative, options))
        .collect()
}
