//! Path parameter parsing.
//!
//! Numeric path segments are read leniently: leading whitespace is skipped,
//! one sign is allowed, then the longest run of digits is taken and anything
//! after it ignored. A `0x` prefix selects hexadecimal. `"12abc"` is 12,
//! `"1.9"` is 1, `"abc"` is not a number.
//!
//! Segments that cannot be extracted at all (e.g. percent-encoded bytes that
//! are not UTF-8) are rejected through [`ApiError`], so the client still gets
//! a `{"message"}` body.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::http::response::ApiError;

/// `Path` extractor whose rejection is a JSON 400.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Parse the leading integer of `text`, or `None` if there are no digits.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix)).saturating_add(i64::from(d))
        });

    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_leading_int("1889"), Some(1889));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("-44"), Some(-44));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("1.9"), Some(1));
        assert_eq!(parse_leading_int("  1500 AD"), Some(1500));
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_leading_int("0x1A"), Some(26));
        assert_eq!(parse_leading_int("0X10"), Some(16));
        assert_eq!(parse_leading_int("0x"), None);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("--1"), None);
        assert_eq!(parse_leading_int("é1"), None);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }
}
