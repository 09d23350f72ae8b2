//! Line-ending classification and conversion over raw byte buffers.
//!
//! Both operations run a single left-to-right scan. A `\r\n` pair counts as
//! one CRLF terminator; a `\r` without a following `\n` is a lone CR; a
//! `\n` not consumed as the second half of a CRLF is a lone LF. Bytes other
//! than CR/LF pass through uncounted, so the scan is encoding-agnostic for
//! anything that keeps ASCII CR/LF intact (UTF-8 included).

use crate::error::EolscanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The line-ending convention observed in (or requested for) a buffer.
///
/// `Lf`, `Crlf`, and `Cr` mean exactly one terminator kind occurred.
/// `Mixed` means at least two distinct kinds occurred. `None` means no
/// terminator occurred at all (empty buffer, or one unterminated line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingVariant {
    Lf,
    Crlf,
    Cr,
    Mixed,
    None,
}

impl LineEndingVariant {
    /// Parses a user-facing style name. Recognized (case-sensitive):
    /// `lf`/`unix`, `crlf`/`win`, `cr`/`mac`. Anything else is `None`.
    pub fn from_alias(s: &str) -> Option<Self> {
        match s {
            "lf" | "unix" => Some(LineEndingVariant::Lf),
            "crlf" | "win" => Some(LineEndingVariant::Crlf),
            "cr" | "mac" => Some(LineEndingVariant::Cr),
            _ => None,
        }
    }

    /// Canonical lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEndingVariant::Lf => "lf",
            LineEndingVariant::Crlf => "crlf",
            LineEndingVariant::Cr => "cr",
            LineEndingVariant::Mixed => "mixed",
            LineEndingVariant::None => "none",
        }
    }

    /// The terminator byte sequence, for the three concrete kinds.
    /// `Mixed` and `None` have no terminator and yield `None`.
    pub fn terminator(&self) -> Option<&'static [u8]> {
        match self {
            LineEndingVariant::Lf => Some(b"\n"),
            LineEndingVariant::Crlf => Some(b"\r\n"),
            LineEndingVariant::Cr => Some(b"\r"),
            LineEndingVariant::Mixed | LineEndingVariant::None => None,
        }
    }
}

impl fmt::Display for LineEndingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of one buffer: the variant plus per-kind counts.
///
/// The three counters and the variant are derived together from a single
/// scan; re-running [`detect_line_endings`] on the same buffer always
/// yields the same info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineEndingInfo {
    pub variant: LineEndingVariant,
    pub lf_count: usize,
    pub crlf_count: usize,
    pub cr_count: usize,
}

/// Classifies the line endings of `content` in one O(n) pass.
pub fn detect_line_endings(content: &[u8]) -> LineEndingInfo {
    let mut lf_count = 0usize;
    let mut crlf_count = 0usize;
    let mut cr_count = 0usize;
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\r' if content.get(i + 1) == Some(&b'\n') => {
                crlf_count += 1;
                i += 2;
            }
            b'\r' => {
                cr_count += 1;
                i += 1;
            }
            b'\n' => {
                lf_count += 1;
                i += 1;
            }
            _ => i += 1,
        }
    }
    let variant = match (lf_count > 0, crlf_count > 0, cr_count > 0) {
        (false, false, false) => LineEndingVariant::None,
        (true, false, false) => LineEndingVariant::Lf,
        (false, true, false) => LineEndingVariant::Crlf,
        (false, false, true) => LineEndingVariant::Cr,
        _ => LineEndingVariant::Mixed,
    };
    LineEndingInfo {
        variant,
        lf_count,
        crlf_count,
        cr_count,
    }
}

/// Rewrites every line terminator in `content` to `target`'s terminator,
/// returning a newly allocated buffer. Non-terminator bytes copy through
/// unchanged, so converting an already-uniform buffer to its own kind
/// reproduces the input byte-for-byte.
///
/// # Errors
///
/// - [`EolscanError::UnsupportedTarget`] if `target` is `Mixed` or `None`,
///   which name no terminator sequence.
/// - [`EolscanError::OutOfMemory`] if the output buffer cannot be
///   allocated; no partial output escapes in that case.
pub fn convert_line_endings(
    content: &[u8],
    target: LineEndingVariant,
) -> Result<Vec<u8>, EolscanError> {
    let terminator = target
        .terminator()
        .ok_or(EolscanError::UnsupportedTarget(target))?;

    // The counters give the exact output size, so one reservation covers
    // the whole build and allocation can only fail here.
    let info = detect_line_endings(content);
    let terminators = info.lf_count + info.crlf_count + info.cr_count;
    let literal_bytes = content.len() - info.lf_count - 2 * info.crlf_count - info.cr_count;

    let mut out = Vec::new();
    out.try_reserve_exact(literal_bytes + terminators * terminator.len())?;

    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\r' if content.get(i + 1) == Some(&b'\n') => {
                out.extend_from_slice(terminator);
                i += 2;
            }
            b'\r' | b'\n' => {
                out.extend_from_slice(terminator);
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    Ok(out)
}
