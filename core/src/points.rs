//! Share ingestion: base-N value literals and JSON share-map documents.
//!
//! A share-set document carries the share count `n` and threshold `k`
//! (top-level or under a `"keys"` object) plus one entry per declared
//! 1-based index:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "7" },
//!     "2": { "base": "16", "value": "d" }
//! }
//! ```
//!
//! A declared index missing from the document is skipped rather than
//! rejected; whether enough shares remain is the engine's concern. The
//! `base` field is accepted as a number or a numeric string, both of
//! which occur in the wild.

use num_bigint::BigInt;
use num_traits::Zero;
use serde_json::Value;

use crate::error::{IngestError, IngestResult};
use crate::share::Share;

/// Smallest supported literal base.
pub const MIN_BASE: u32 = 2;
/// Largest supported literal base: digits, then case-insensitive letters.
pub const MAX_BASE: u32 = 36;

/// A decoded share-set document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    /// Declared share count. May exceed `shares.len()` when declared
    /// indices are absent from the document.
    pub n: usize,
    /// Declared reconstruction threshold.
    pub k: usize,
    pub shares: Vec<Share>,
}

fn digit_value(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(digit as u32 - '0' as u32),
        'a'..='z' => Some(digit as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(digit as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decode a base-`base` literal into an arbitrary-precision integer.
///
/// Underscore and space separators are ignored. Fails with
/// [`IngestError::InvalidDigit`] when a character is not a digit of the
/// stated base.
pub fn parse_in_base(literal: &str, base: u32) -> IngestResult<BigInt> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(IngestError::UnsupportedBase(base));
    }
    let mut value = BigInt::zero();
    for digit in literal.chars() {
        if digit == '_' || digit == ' ' {
            continue;
        }
        let d = digit_value(digit)
            .filter(|&d| d < base)
            .ok_or(IngestError::InvalidDigit { digit, base })?;
        value = value * base + d;
    }
    Ok(value)
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn lookup_count(object: &Value, key: &'static str) -> IngestResult<usize> {
    object
        .get(key)
        .and_then(as_u64)
        .and_then(|count| usize::try_from(count).ok())
        .ok_or(IngestError::MissingKey(key))
}

/// Parse a JSON share-set document into its threshold parameters and
/// decoded shares. Each share's x-coordinate is its declared 1-based
/// index.
pub fn parse_share_set(document: &str) -> IngestResult<ShareSet> {
    let root: Value = serde_json::from_str(document)?;
    let keys = root.get("keys").unwrap_or(&root);
    let n = lookup_count(keys, "n")?;
    let k = lookup_count(keys, "k")?;

    let mut shares = Vec::with_capacity(n);
    for index in 1..=n {
        let Some(entry) = root.get(index.to_string()) else {
            continue;
        };
        let base = entry
            .get("base")
            .and_then(as_u64)
            .and_then(|base| u32::try_from(base).ok())
            .ok_or(IngestError::MissingField {
                index,
                field: "base",
            })?;
        let literal = entry.get("value").and_then(Value::as_str).ok_or(
            IngestError::MissingField {
                index,
                field: "value",
            },
        )?;
        let y = parse_in_base(literal, base)?;
        shares.push(Share::new(index as i64, y));
    }

    Ok(ShareSet { n, k, shares })
}
