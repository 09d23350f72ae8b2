//! # Eolscan
//!
//! `eolscan` is a library for scanning a file tree for files matching glob
//! patterns, classifying each file's line-ending convention (Unix LF,
//! Windows CRLF, classic-Mac CR, or a mixed combination), and optionally
//! rewriting files in place to a uniform target convention.
//!
//! The two core algorithms — the glob matcher ([`matches_glob`]) and the
//! line-ending engine ([`detect_line_endings`] / [`convert_line_endings`])
//! — are pure functions over strings and byte buffers, usable without any
//! filesystem involvement. The [`eolscan`] entry point wraps them in a
//! directory walk. Parallel file processing is available with the
//! `parallel` feature.
//!
//! # Features
//!
//! - `parallel`: Enables parallel processing of files using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use eolscan::{EolscanBuilder, LineEndingVariant, eolscan};
//!
//! let options = EolscanBuilder::new(".")
//!     .patterns(vec!["src/**/*.rs".to_string()])
//!     .target(Some(LineEndingVariant::Lf)) // rewrite to Unix endings
//!     .build();
//!
//! let result = eolscan(options).expect("Failed to scan directory");
//!
//! for file in result.files {
//!     if let Some(info) = file.info {
//!         println!("{}: {}", file.path.display(), info.variant);
//!     }
//! }
//! ```

mod engine;
mod eol;
mod error;
mod glob;
mod options;
pub mod output;
mod types;

pub use engine::eolscan;
pub use eol::{LineEndingInfo, LineEndingVariant, convert_line_endings, detect_line_endings};
pub use error::EolscanError;
pub use glob::matches_glob;
pub use options::{DEFAULT_FILE_SIZE_LIMIT, EolscanBuilder, EolscanOptions};
pub use types::{FileReport, ScanResult};
