//! Version grammar matching.
//!
//! Recognizes the two textual shapes and splits them into raw tokens:
//!
//! ```text
//! number := digits "." digits ( "." digits | "-" tagword ) ( "." digits )?
//! binary := number "-" token "-" token
//! digits := 1*9 DIGIT
//! token  := 1*(any char except "-")
//! ```
//!
//! A `tagword` is a run of word characters (`[A-Za-z0-9_]`) that fuses the
//! pre-release tag with the patch number: `alpha1` is tag `alpha`, patch
//! `1`. The tag takes as many characters as it can while still leaving a
//! digit for the patch, so the patch is always the final digit of the run
//! (`alpha12` is tag `alpha1`, patch `2`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Body shared by both shapes. Groups: major, minor, release patch,
/// tag word, build.
const NUMBER_BODY: &str =
    r"([0-9]{1,9})\.([0-9]{1,9})(?:\.([0-9]{1,9})|-([A-Za-z0-9_]+))(?:\.([0-9]{1,9}))?";

lazy_static! {
    /// A bare version number
    static ref NUMBER_PATTERN: Regex = Regex::new(&format!("^{}$", NUMBER_BODY)).unwrap();

    /// A version number qualified with series and architecture
    static ref BINARY_PATTERN: Regex =
        Regex::new(&format!("^{}-([^-]+)-([^-]+)$", NUMBER_BODY)).unwrap();
}

/// Raw tokens of a matched version number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberParts<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    /// Empty for the release form
    pub tag: &'a str,
    pub patch: &'a str,
    pub build: Option<&'a str>,
}

/// Raw tokens of a matched binary version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryParts<'a> {
    pub number: NumberParts<'a>,
    pub series: &'a str,
    pub arch: &'a str,
}

/// Match `text` against the number grammar
pub fn match_number(text: &str) -> Option<NumberParts<'_>> {
    let caps = NUMBER_PATTERN.captures(text)?;
    number_parts(&caps)
}

/// Match `text` against the binary grammar
pub fn match_binary(text: &str) -> Option<BinaryParts<'_>> {
    let caps = BINARY_PATTERN.captures(text)?;
    Some(BinaryParts {
        number: number_parts(&caps)?,
        series: caps.get(6)?.as_str(),
        arch: caps.get(7)?.as_str(),
    })
}

fn number_parts<'a>(caps: &Captures<'a>) -> Option<NumberParts<'a>> {
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2)?.as_str();
    let build = caps.get(5).map(|m| m.as_str());

    let (tag, patch) = match (caps.get(3), caps.get(4)) {
        (Some(patch), None) => ("", patch.as_str()),
        (None, Some(word)) => split_tag_word(word.as_str())?,
        _ => return None,
    };

    Some(NumberParts {
        major,
        minor,
        tag,
        patch,
        build,
    })
}

/// Split a tag word into its tag and patch.
///
/// The last character must be a digit and at least one character must be
/// left over for the tag.
pub fn split_tag_word(word: &str) -> Option<(&str, &str)> {
    let last = word.len().checked_sub(1)?;
    if last == 0 || !word.as_bytes()[last].is_ascii_digit() {
        return None;
    }
    // the word is ASCII, so `last` is a char boundary
    Some(word.split_at(last))
}

/// Numeric value of a matched digit group.
///
/// Groups hold at most nine ASCII digits, which always fit a `u32`.
pub fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
