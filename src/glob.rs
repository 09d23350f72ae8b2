//! Shell-style glob matching with recursive-wildcard support.
//!
//! Supports `*` (matches within a single path segment) and `**` (matches
//! across segment boundaries). Character classes, brace expansion, and
//! negation are deliberately not supported. Both the pattern and the
//! candidate are normalized to `/` separators before matching, so callers
//! can pass Windows-style paths unchanged.

use std::collections::HashSet;

/// Returns `true` if `candidate` satisfies `pattern`.
///
/// Matching rules:
/// - `*` matches zero or more characters within one segment (never `/`).
/// - `**` matches zero or more characters including `/`; `a/**/b` matches
///   `a/b` as well as `a/x/y/b`.
/// - Every other character matches itself literally.
/// - The empty pattern matches only the empty candidate; `*` and `**`
///   alone match anything, including the empty string.
///
/// The function is total: any pair of strings yields a boolean, never an
/// error.
///
/// # Example
///
/// ```
/// use eolscan::matches_glob;
///
/// assert!(matches_glob("src/**/*.rs", "src/a/b/lib.rs"));
/// assert!(matches_glob("src/*.rs", "src\\main.rs"));
/// assert!(!matches_glob("src/*.rs", "src/sub/main.rs"));
/// ```
pub fn matches_glob(pattern: &str, candidate: &str) -> bool {
    let pattern = pattern.replace('\\', "/");
    let candidate = candidate.replace('\\', "/");
    let mut failed = HashSet::new();
    matches_from(pattern.as_bytes(), candidate.as_bytes(), 0, 0, &mut failed)
}

/// Backtracking match of `pat[p..]` against `cand[c..]`.
///
/// `failed` memoizes cursor pairs already proven not to match, which bounds
/// the backtracking to O(pattern_len * candidate_len) even for patterns
/// stacking many consecutive wildcards. Recursion depth is bounded by
/// `pat.len() + cand.len()` since every recursive step advances a cursor.
fn matches_from(
    pat: &[u8],
    cand: &[u8],
    p: usize,
    c: usize,
    failed: &mut HashSet<(usize, usize)>,
) -> bool {
    if failed.contains(&(p, c)) {
        return false;
    }
    let matched = matches_step(pat, cand, p, c, failed);
    if !matched {
        failed.insert((p, c));
    }
    matched
}

fn matches_step(
    pat: &[u8],
    cand: &[u8],
    p: usize,
    c: usize,
    failed: &mut HashSet<(usize, usize)>,
) -> bool {
    if p == pat.len() {
        return c == cand.len();
    }

    if pat[p..].starts_with(b"**") {
        let rest = p + 2;
        if rest == pat.len() {
            // Trailing `**` swallows any remainder, separators included.
            return true;
        }
        if pat[rest] == b'/' {
            // `**/` may consume zero segments...
            if matches_from(pat, cand, rest + 1, c, failed) {
                return true;
            }
            // ...or any run of whole segments.
            for i in c..cand.len() {
                if cand[i] == b'/' && matches_from(pat, cand, rest + 1, i + 1, failed) {
                    return true;
                }
            }
            return false;
        }
        // `**` glued to a literal: try every suffix, empty one included.
        for i in c..=cand.len() {
            if matches_from(pat, cand, rest, i, failed) {
                return true;
            }
        }
        return false;
    }

    if pat[p] == b'*' {
        // A lone `*` stops at the first separator: try suffixes up to and
        // including the one starting at that `/`.
        let mut i = c;
        loop {
            if matches_from(pat, cand, p + 1, i, failed) {
                return true;
            }
            if i >= cand.len() || cand[i] == b'/' {
                return false;
            }
            i += 1;
        }
    }

    if c == cand.len() {
        return false;
    }
    pat[p] == cand[c] && matches_from(pat, cand, p + 1, c + 1, failed)
}
