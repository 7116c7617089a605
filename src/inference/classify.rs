//! Value classification
//!
//! Maps one raw text value to every [`TypeTag`] it is compatible with.
//! Classification never fails: an unparseable value simply lacks the tag.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{TypeSet, TypeTag};

/// Lowercase literals accepted as booleans
pub const BOOLEAN_STRINGS: &[&str] = &["yes", "no", "true", "false", "t", "f", "0", "1", "-1"];

// Digit runs may contain single underscores between digits ("1_000")
static INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9](?:_?[0-9])*$").unwrap());

static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[+-]?(?:[0-9](?:_?[0-9])*(?:\.(?:[0-9](?:_?[0-9])*)?)?|\.[0-9](?:_?[0-9])*)(?:[eE][+-]?[0-9](?:_?[0-9])*)?$",
    )
    .unwrap()
});

static DECIMAL_SPECIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[+-]?(?:inf|infinity|s?nan[0-9]*)$").unwrap());

/// Classify a raw value into the set of compatible type tags
///
/// The empty string is compatible with nothing, not even String.
pub fn classify(value: &str) -> TypeSet {
    let mut set = TypeSet::EMPTY;

    if is_integer(value) {
        set.insert(TypeTag::Integer);
    }
    if is_decimal(value) {
        set.insert(TypeTag::Decimal);
    }
    if is_boolean(value) {
        set.insert(TypeTag::Boolean);
    }
    if !value.is_empty() {
        set.insert(TypeTag::String);
    }

    set
}

/// Signed base-10 integer of any length, surrounding whitespace allowed
pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value.trim())
}

/// Exact decimal literal: integers, fractions, exponents, and the
/// infinity/NaN spellings, surrounding whitespace allowed
pub fn is_decimal(value: &str) -> bool {
    let value = value.trim();
    DECIMAL_REGEX.is_match(value) || DECIMAL_SPECIAL_REGEX.is_match(value)
}

/// Lowercase form is one of [`BOOLEAN_STRINGS`]
pub fn is_boolean(value: &str) -> bool {
    let lower = value.to_lowercase();
    BOOLEAN_STRINGS.contains(&lower.as_str())
}
