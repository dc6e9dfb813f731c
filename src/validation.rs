//! Input validation and normalization for request data.

use crate::error::{ItemDeskError, Result};
use crate::model::ItemId;

pub const DEFAULT_PAGE: u32 = 1;
pub const MAX_PAGE: u32 = 9999;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Trims surrounding whitespace.
pub fn normalize(value: &str) -> String {
    value.trim().to_string()
}

/// Validates the name of an item being created.
pub fn validate_new_name(name: Option<&str>) -> Result<String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ItemDeskError::validation("name is required")),
    }
}

/// Validates a replacement name. Unlike creation, the field was sent explicitly.
pub fn validate_renamed(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ItemDeskError::validation("name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Parses a path id.
///
/// Anything that is not a base-10 integer is `InvalidId`. Integers that can
/// never be allocated (zero, negative, too large to store) parse fine and
/// simply won't be found.
pub fn parse_id(raw: &str) -> Result<Option<ItemId>> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ItemDeskError::InvalidId);
    }
    Ok(raw
        .parse::<i64>()
        .ok()
        .and_then(|id| ItemId::try_from(id).ok())
        .filter(|id| *id > 0))
}

/// Reads a number the way a loosely-typed query string spells it: decimal or
/// exponent notation, `0x`/`0o`/`0b` integers, and a signed `Infinity`.
fn parse_loose_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = raw.strip_prefix(prefix) {
            if digits.starts_with('+') {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }
    match raw {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if raw.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) => None,
        _ => raw.parse().ok(),
    }
}

/// Reads a numeric query parameter.
///
/// Missing, non-numeric and zero values fall back to `default`; anything else
/// is truncated and clamped into `[min, max]`.
pub fn clamp_number(raw: Option<&str>, default: u32, min: u32, max: u32) -> u32 {
    let Some(value) = raw
        .and_then(parse_loose_number)
        .filter(|v| !v.is_nan() && *v != 0.0)
    else {
        return default;
    };
    value.trunc().clamp(f64::from(min), f64::from(max)) as u32
}

pub fn parse_page(raw: Option<&str>) -> u32 {
    clamp_number(raw, DEFAULT_PAGE, 1, MAX_PAGE)
}

pub fn parse_limit(raw: Option<&str>) -> u32 {
    clamp_number(raw, DEFAULT_LIMIT, 1, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_new_name() {
        assert_eq!(validate_new_name(Some("  Task X  ")).unwrap(), "Task X");
        assert_eq!(
            validate_new_name(Some("   ")).unwrap_err().to_string(),
            "name is required"
        );
        assert!(validate_new_name(None).is_err());
    }

    #[test]
    fn test_validate_renamed_empty() {
        assert_eq!(
            validate_renamed("").unwrap_err().to_string(),
            "name cannot be empty"
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), Some(3));
        assert_eq!(parse_id(" 42 ").unwrap(), Some(42));
        assert_eq!(parse_id("0").unwrap(), None);
        assert_eq!(parse_id("-4").unwrap(), None);
        assert!(matches!(parse_id("abc"), Err(ItemDeskError::InvalidId)));
        assert!(matches!(parse_id("1.5"), Err(ItemDeskError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ItemDeskError::InvalidId)));
        assert!(matches!(parse_id("-"), Err(ItemDeskError::InvalidId)));
        assert!(matches!(parse_id("1e3"), Err(ItemDeskError::InvalidId)));
    }

    #[test]
    fn test_parse_id_overflow_is_not_found() {
        assert_eq!(parse_id("99999999999999999999").unwrap(), None);
        assert_eq!(parse_id("-99999999999999999999").unwrap(), None);
    }

    #[test]
    fn test_parse_page_defaults_and_clamps() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("4")), 4);
        assert_eq!(parse_page(Some("2.9")), 2);
        assert_eq!(parse_page(Some("100000")), MAX_PAGE);
    }

    #[test]
    fn test_parse_limit_defaults_and_clamps() {
        assert_eq!(parse_limit(None), 10);
        assert_eq!(parse_limit(Some("")), 10);
        assert_eq!(parse_limit(Some("0")), 10);
        assert_eq!(parse_limit(Some("-1")), 1);
        assert_eq!(parse_limit(Some("500")), 100);
        assert_eq!(parse_limit(Some("NaN")), 10);
        assert_eq!(parse_limit(Some("inf")), 10);
        assert_eq!(parse_limit(Some("1e1")), 10);
        assert_eq!(parse_limit(Some("2.5e1")), 25);
    }

    #[test]
    fn test_parse_limit_infinity_and_radix_prefixes() {
        assert_eq!(parse_limit(Some("Infinity")), MAX_LIMIT);
        assert_eq!(parse_limit(Some("-Infinity")), 1);
        assert_eq!(parse_limit(Some("0x14")), 20);
        assert_eq!(parse_limit(Some("0b101")), 5);
        assert_eq!(parse_limit(Some("0o17")), 15);
        assert_eq!(parse_limit(Some("0xZZ")), DEFAULT_LIMIT);
        assert_eq!(parse_page(Some("0x")), DEFAULT_PAGE);
    }
}
