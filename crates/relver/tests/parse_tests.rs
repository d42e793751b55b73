//! Parsing and formatting tests for version numbers and binary versions.
//!
//! Every accepted number is also checked as the number part of a binary
//! version, and must format back to exactly the text it was parsed from.

use relver::{Binary, Number, VersionError};

/// An accepted or rejected version number
struct ParseCase {
    text: &'static str,
    expect: Option<Number>,
}

fn ok(text: &'static str, expect: Number) -> ParseCase {
    ParseCase {
        text,
        expect: Some(expect),
    }
}

fn bad(text: &'static str) -> ParseCase {
    ParseCase { text, expect: None }
}

fn parse_cases() -> Vec<ParseCase> {
    vec![
        ok("0.0.0", Number::ZERO),
        ok("0.0.1", Number::new(0, 0, 1)),
        ok("0.0.2", Number::new(0, 0, 2)),
        ok("0.1.0", Number::new(0, 1, 0)),
        ok("0.2.3", Number::new(0, 2, 3)),
        ok("1.0.0", Number::new(1, 0, 0)),
        ok("10.234.3456", Number::new(10, 234, 3456)),
        ok("10.234.3456.1", Number::new(10, 234, 3456).with_build(1)),
        ok("10.234.3456.64", Number::new(10, 234, 3456).with_build(64)),
        ok("10.235.3456", Number::new(10, 235, 3456)),
        ok("1.21-alpha1", Number::new(1, 21, 1).with_tag("alpha")),
        ok("1.21-alpha1.1", Number::new(1, 21, 1).with_tag("alpha").with_build(1)),
        ok("1.21.0", Number::new(1, 21, 0)),
        ok("999999999.999999999.999999999.999999999", Number::new(999_999_999, 999_999_999, 999_999_999).with_build(999_999_999)),
        bad("1234567890.2.1"),
        bad("0.2..1"),
        bad("1.21.alpha1"),
        bad("1.21-alpha"),
        bad("1.21-alpha1beta"),
        bad("1.21-alpha-dev"),
        bad(""),
        bad("1"),
        bad("1.2"),
        bad("1.2.3-"),
        bad("1.2.3.4.5"),
    ]
}

// =============================================================================
// Number Parsing
// =============================================================================

#[test]
fn test_parse_number() {
    for case in parse_cases() {
        let got = Number::parse(case.text);
        match case.expect {
            Some(expect) => {
                let got = got.unwrap_or_else(|e| panic!("Failed for {}: {}", case.text, e));
                assert_eq!(got, expect, "Wrong value for: {}", case.text);
                assert_eq!(got.to_string(), case.text, "Round trip failed for: {}", case.text);
            }
            None => {
                let err = got.unwrap_err();
                assert_eq!(err, VersionError::InvalidVersionFormat(case.text.to_string()));
                assert!(err.to_string().starts_with("invalid version "));
            }
        }
    }
}

#[test]
fn test_leading_zeros_are_stripped() {
    let padded = Number::parse("01.0.0").unwrap();
    assert_eq!(padded, Number::parse("1.0.0").unwrap());
    assert_eq!(padded.to_string(), "1.0.0");
    assert_eq!(padded.cmp(&Number::parse("1.0.0").unwrap()), std::cmp::Ordering::Equal);
}

#[test]
fn test_zero_build_is_not_formatted() {
    let v = Number::parse("2.0.0.0").unwrap();
    assert_eq!(v, Number::parse("2.0.0").unwrap());
    assert_eq!(v.to_string(), "2.0.0");
}

#[test]
fn test_from_str() {
    let v: Number = "1.2-beta3.4".parse().unwrap();
    assert_eq!(v, Number::new(1, 2, 3).with_tag("beta").with_build(4));
}

// =============================================================================
// Digit-bearing Tags (corner cases)
// =============================================================================

#[test]
fn test_tag_absorbs_all_but_the_last_digit() {
    let v = Number::parse("1.2-alpha12").unwrap();
    assert_eq!(v.tag, "alpha1");
    assert_eq!(v.patch, 2);
    assert_eq!(v.to_string(), "1.2-alpha12");
}

#[test]
fn test_underscore_tag() {
    let v = Number::parse("2.0-_0").unwrap();
    assert_eq!(v.tag, "_");
    assert_eq!(v.patch, 0);
}

#[test]
fn test_all_digit_tag() {
    let v = Number::parse("2.0-00").unwrap();
    assert_eq!(v.tag, "0");
    assert_eq!(v.patch, 0);
    assert_eq!(v.to_string(), "2.0-00");
}

// =============================================================================
// Binary Parsing
// =============================================================================

fn binary(number: Number, series: &str, arch: &str) -> Binary {
    Binary::new(number, series, arch)
}

#[test]
fn test_parse_binary() {
    let cases = [
        ("1.2.3-trusty-amd64", binary(Number::new(1, 2, 3), "trusty", "amd64")),
        ("1.2.3.4-trusty-amd64", binary(Number::new(1, 2, 3).with_build(4), "trusty", "amd64")),
        ("1.2-alpha3-trusty-amd64", binary(Number::new(1, 2, 3).with_tag("alpha"), "trusty", "amd64")),
        (
            "1.2-alpha3.4-trusty-amd64",
            binary(Number::new(1, 2, 3).with_tag("alpha").with_build(4), "trusty", "amd64"),
        ),
    ];

    for (text, expect) in cases {
        let got = Binary::parse(text).unwrap();
        assert_eq!(got, expect, "Wrong value for: {}", text);
        assert_eq!(got.to_string(), text);
    }
}

#[test]
fn test_parse_binary_rejections() {
    for text in ["1.2.3", "1.2-beta1", "1.2.3--amd64", "1.2.3-trusty-"] {
        let err = Binary::parse(text).unwrap_err();
        assert_eq!(err, VersionError::InvalidBinaryFormat(text.to_string()));
        assert!(err.to_string().starts_with("invalid binary version "));
    }
}

#[test]
fn test_number_cases_as_binary() {
    for case in parse_cases() {
        let text = format!("{}-trusty-amd64", case.text);
        let got = Binary::parse(&text);
        match case.expect {
            Some(expect) => {
                let got = got.unwrap_or_else(|e| panic!("Failed for {}: {}", text, e));
                assert_eq!(got, binary(expect, "trusty", "amd64"));
                assert_eq!(got.to_string(), text);
            }
            None => {
                assert_eq!(got.unwrap_err(), VersionError::InvalidBinaryFormat(text.clone()));
            }
        }
    }
}

#[test]
fn test_parse_binary_unknown_series() {
    let err = Binary::parse("1.2.3-hal9000-amd64").unwrap_err();
    assert_eq!(err, VersionError::UnknownSeries("hal9000".to_string()));
    assert_eq!(err.to_string(), "unknown series \"hal9000\"");
}

#[test]
fn test_arch_is_not_validated() {
    let b = Binary::parse("1.2.3-xenial-anything_goes.here").unwrap();
    assert_eq!(b.arch, "anything_goes.here");
}
