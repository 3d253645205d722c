//! Scalar type inference for raw CSV cells.

use std::borrow::Cow;

use crate::schema::{InferredValue, Integer};

/// Classify a raw cell as boolean, integer, float or string.
///
/// The cell is trimmed first. Checks run in order and the first match wins:
/// `true`/`false` (any case), then a base-10 integer of any size, then a
/// finite `f64`. Numbers may group digits with single underscores
/// (`1_000`). Anything else comes back as the trimmed string. This never
/// fails.
pub fn infer(raw: &str) -> InferredValue {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("true") {
        return InferredValue::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return InferredValue::Boolean(false);
    }

    let Some(numeric) = strip_digit_separators(trimmed) else {
        return InferredValue::String(trimmed.to_string());
    };

    if let Some(i) = Integer::parse(&numeric) {
        return InferredValue::Integer(i);
    }

    // `f64::from_str` also accepts "nan", "inf" and "infinity", which have
    // no JSON representation; those stay strings.
    if let Ok(f) = numeric.parse::<f64>() {
        if f.is_finite() {
            return InferredValue::Float(f);
        }
    }

    InferredValue::String(trimmed.to_string())
}

/// Drop `_` digit separators. Each one must sit between two ASCII digits,
/// otherwise the text is not a number.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let is_digit_at = |i: Option<usize>| {
        i.and_then(|i| bytes.get(i))
            .is_some_and(u8::is_ascii_digit)
    };
    let well_placed = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'_')
        .all(|(i, _)| is_digit_at(i.checked_sub(1)) && is_digit_at(Some(i + 1)));

    well_placed.then(|| Cow::Owned(text.replace('_', "")))
}
