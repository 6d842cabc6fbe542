use regex::Regex;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?|0[xX][0-9a-fA-F]+|0[oO][0-7]+|0[bB][01]+|[+-]?Infinity)$",
    )
    .expect("numeric pattern is valid")
});

/// Reasons a `number` query parameter is rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("malformed query string: {0}")]
    Malformed(String),

    #[error("missing number parameter")]
    Missing,

    #[error("not a number: {0:?}")]
    NotNumeric(String),

    #[error("no integer in {0:?}")]
    NotAnInteger(String),

    /// A base-10 integer that does not fit in an `i64`. It is still answered
    /// with the generic invalid-input payload, which calls it "Alphabet".
    #[error("integer out of range: {0:?}")]
    OutOfRange(String),
}

/// First stage: does `raw` look like a number at all?
///
/// Accepts signed decimals with optional fraction and exponent, prefixed
/// hex/octal/binary integers, and `Infinity`. Surrounding whitespace is ignored.
pub fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && NUMERIC.is_match(trimmed)
}

/// Second stage: read the leading base-10 integer of `raw`
///
/// Skips leading whitespace, reads an optional sign and the digits that follow,
/// and ignores everything after them, so `"12.7"` is 12 and `"1e3"` is 1.
/// Returns `None` when there are no leading digits or the value does not fit in
/// an `i64`.
pub fn parse_integer(raw: &str) -> Option<i64> {
    let (negative, digits) = leading_digits(raw)?;
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Sign and leading decimal digits of `raw`, if it starts with any
fn leading_digits(raw: &str) -> Option<(bool, &str)> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    Some((negative, digits))
}

/// Validate and parse the raw `number` query parameter
pub fn parse_number(raw: Option<&str>) -> Result<i64, InputError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(InputError::Missing),
    };

    if !is_numeric(raw) {
        return Err(InputError::NotNumeric(raw.to_string()));
    }

    parse_integer(raw).ok_or_else(|| match leading_digits(raw) {
        Some(_) => InputError::OutOfRange(raw.to_string()),
        None => InputError::NotAnInteger(raw.to_string()),
    })
}
