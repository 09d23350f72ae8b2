use crate::eol::LineEndingVariant;
use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum EolscanError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("out of memory while building converted buffer: {0}")]
    OutOfMemory(#[from] TryReserveError),
    #[error("cannot convert to `{}`: variant names no terminator sequence", .0.as_str())]
    UnsupportedTarget(LineEndingVariant),
}
impl EolscanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EolscanError::Io {
            path: path.into(),
            source,
        }
    }
}
