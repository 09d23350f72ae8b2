use crate::eol::LineEndingVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Files larger than this are skipped rather than read into memory.
pub const DEFAULT_FILE_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EolscanOptions {
    pub root: PathBuf,
    /// Include globs matched against root-relative paths; empty means
    /// every file is a candidate.
    pub patterns: Vec<String>,
    /// `Some(style)` rewrites matched files to that style; `None` only
    /// reports.
    pub target: Option<LineEndingVariant>,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub file_size_limit: Option<u64>,
    pub skip_binary: bool,
}
impl Default for EolscanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: Vec::new(),
            target: None,
            respect_gitignore: true,
            max_depth: None,
            include_hidden: false,
            follow_links: false,
            file_size_limit: Some(DEFAULT_FILE_SIZE_LIMIT),
            skip_binary: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct EolscanBuilder {
    options: EolscanOptions,
}
impl EolscanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: EolscanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.patterns = patterns;
        self
    }
    pub fn target(mut self, target: Option<LineEndingVariant>) -> Self {
        self.options.target = target;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn skip_binary(mut self, yes: bool) -> Self {
        self.options.skip_binary = yes;
        self
    }
    pub fn build(self) -> EolscanOptions {
        self.options
    }
}
