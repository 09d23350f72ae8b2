use eolscan::{
    LineEndingVariant,
    convert_line_endings,
    detect_line_endings,
    matches_glob,
};

// ----------------------- glob matcher -----------------------

#[test]
fn test_glob_literal_match() {
    assert!(matches_glob("file.c", "file.c"));
    assert!(!matches_glob("file.c", "file.cc"));
}
#[test]
fn test_glob_empty_pattern() {
    assert!(matches_glob("", ""));
    assert!(!matches_glob("", "a"));
}
#[test]
fn test_glob_lone_wildcards_match_anything() {
    assert!(matches_glob("*", ""));
    assert!(matches_glob("*", "main.rs"));
    assert!(matches_glob("**", ""));
    assert!(matches_glob("**", "a/b/c.rs"));
    // a lone star still stops at the separator
    assert!(!matches_glob("*", "a/b"));
}
#[test]
fn test_glob_single_star_stays_in_segment() {
    assert!(matches_glob("src/*.zig", "src/file.zig"));
    assert!(!matches_glob("src/*.zig", "src/sub/file.zig"));
}
#[test]
fn test_glob_double_star_crosses_segments() {
    assert!(matches_glob("src/**/*.zig", "src/a/b/file.zig"));
    assert!(matches_glob("src/**/*.zig", "src/file.zig"));
    assert!(matches_glob("**/*.zig", "file.zig"));
    assert!(matches_glob("**/*.zig", "a/b/file.zig"));
}
#[test]
fn test_glob_double_star_zero_segments() {
    assert!(matches_glob("a/**/b", "a/b"));
    assert!(matches_glob("a/**/b", "a/x/b"));
    assert!(matches_glob("a/**/b", "a/x/y/b"));
    assert!(!matches_glob("a/**/b", "a/x/c"));
}
#[test]
fn test_glob_double_star_glued_to_literal() {
    assert!(matches_glob("**.rs", "a/b/lib.rs"));
    assert!(matches_glob("src/**rs", "src/a/main.rs"));
    assert!(!matches_glob("**.rs", "a/b/lib.c"));
}
#[test]
fn test_glob_separator_agnostic() {
    assert!(matches_glob("src/*.zig", "src\\main.zig"));
    assert!(matches_glob("src\\**\\*.rs", "src/a/b/main.rs"));
}
#[test]
fn test_glob_pathological_pattern_terminates() {
    let pattern = "**/".repeat(30) + "*.rs";
    assert!(matches_glob(&pattern, "a/b/c/d/e/f/main.rs"));
    assert!(!matches_glob(&pattern, "a/b/c/d/e/f/main.c"));
}

// ----------------------- detection -----------------------

#[test]
fn test_detect_empty_buffer() {
    let info = detect_line_endings(b"");
    assert_eq!(info.variant, LineEndingVariant::None);
    assert_eq!((info.lf_count, info.crlf_count, info.cr_count), (0, 0, 0));
}
#[test]
fn test_detect_unterminated_line() {
    let info = detect_line_endings(b"just one line");
    assert_eq!(info.variant, LineEndingVariant::None);
}
#[test]
fn test_detect_uniform_kinds() {
    assert_eq!(detect_line_endings(b"a\nb\n").variant, LineEndingVariant::Lf);
    assert_eq!(
        detect_line_endings(b"a\r\nb\r\n").variant,
        LineEndingVariant::Crlf
    );
    assert_eq!(detect_line_endings(b"a\rb\r").variant, LineEndingVariant::Cr);
}
#[test]
fn test_detect_crlf_not_double_counted() {
    let info = detect_line_endings(b"\r\n");
    assert_eq!(info.crlf_count, 1);
    assert_eq!(info.lf_count, 0);
    assert_eq!(info.cr_count, 0);
}
#[test]
fn test_detect_mixed_counts() {
    let info = detect_line_endings(b"a\nb\r\nc\r");
    assert_eq!(info.variant, LineEndingVariant::Mixed);
    assert_eq!(info.lf_count, 1);
    assert_eq!(info.crlf_count, 1);
    assert_eq!(info.cr_count, 1);
}
#[test]
fn test_detect_lf_cr_adjacency() {
    // "\n\r" is one LF followed by one lone CR, not a terminator pair.
    let info = detect_line_endings(b"\n\r");
    assert_eq!(info.variant, LineEndingVariant::Mixed);
    assert_eq!(info.lf_count, 1);
    assert_eq!(info.cr_count, 1);
    assert_eq!(info.crlf_count, 0);
}

// ----------------------- conversion -----------------------

#[test]
fn test_convert_mixed_to_lf_end_to_end() {
    let converted = convert_line_endings(b"a\nb\r\nc\r", LineEndingVariant::Lf).unwrap();
    assert_eq!(converted, b"a\nb\nc\n");
    let info = detect_line_endings(&converted);
    assert_eq!(info.variant, LineEndingVariant::Lf);
    assert_eq!(info.lf_count, 3);
}
#[test]
fn test_convert_to_crlf_and_cr() {
    assert_eq!(
        convert_line_endings(b"a\nb\rc\r\n", LineEndingVariant::Crlf).unwrap(),
        b"a\r\nb\r\nc\r\n"
    );
    assert_eq!(
        convert_line_endings(b"a\nb\rc\r\n", LineEndingVariant::Cr).unwrap(),
        b"a\rb\rc\r"
    );
}
#[test]
fn test_convert_same_kind_is_byte_identical() {
    let input: &[u8] = b"a\r\nb\r\n";
    let converted = convert_line_endings(input, LineEndingVariant::Crlf).unwrap();
    assert_eq!(converted, input);
}
#[test]
fn test_convert_empty_and_terminator_free() {
    assert_eq!(
        convert_line_endings(b"", LineEndingVariant::Lf).unwrap(),
        b""
    );
    assert_eq!(
        convert_line_endings(b"no endings here", LineEndingVariant::Crlf).unwrap(),
        b"no endings here"
    );
}
#[test]
fn test_convert_idempotent() {
    let input: &[u8] = b"a\rb\nc\r\nd";
    for target in [
        LineEndingVariant::Lf,
        LineEndingVariant::Crlf,
        LineEndingVariant::Cr,
    ] {
        let once = convert_line_endings(input, target).unwrap();
        let twice = convert_line_endings(&once, target).unwrap();
        assert_eq!(once, twice);
        assert_eq!(detect_line_endings(&once).variant, target);
    }
}
#[test]
fn test_convert_rejects_nonconcrete_targets() {
    assert!(convert_line_endings(b"a\n", LineEndingVariant::Mixed).is_err());
    assert!(convert_line_endings(b"a\n", LineEndingVariant::None).is_err());
}

// ----------------------- variant names -----------------------

#[test]
fn test_variant_aliases() {
    assert_eq!(
        LineEndingVariant::from_alias("lf"),
        Some(LineEndingVariant::Lf)
    );
    assert_eq!(
        LineEndingVariant::from_alias("unix"),
        Some(LineEndingVariant::Lf)
    );
    assert_eq!(
        LineEndingVariant::from_alias("crlf"),
        Some(LineEndingVariant::Crlf)
    );
    assert_eq!(
        LineEndingVariant::from_alias("win"),
        Some(LineEndingVariant::Crlf)
    );
    assert_eq!(
        LineEndingVariant::from_alias("cr"),
        Some(LineEndingVariant::Cr)
    );
    assert_eq!(
        LineEndingVariant::from_alias("mac"),
        Some(LineEndingVariant::Cr)
    );
    // case-sensitive, unknown names are absent rather than an error
    assert_eq!(LineEndingVariant::from_alias("LF"), None);
    assert_eq!(LineEndingVariant::from_alias("dos"), None);
    assert_eq!(LineEndingVariant::from_alias(""), None);
}
#[test]
fn test_variant_canonical_names() {
    assert_eq!(LineEndingVariant::Lf.as_str(), "lf");
    assert_eq!(LineEndingVariant::Crlf.as_str(), "crlf");
    assert_eq!(LineEndingVariant::Cr.as_str(), "cr");
    assert_eq!(LineEndingVariant::Mixed.as_str(), "mixed");
    assert_eq!(LineEndingVariant::None.as_str(), "none");
}
