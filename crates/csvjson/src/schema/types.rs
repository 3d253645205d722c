//! Core value types produced by type inference.

use std::fmt;

use serde::{Serialize, Serializer};

/// A base-10 integer of any magnitude, held as canonical decimal text.
///
/// Canonical text has no `+` sign, no leading zeros and never reads `-0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer(String);

impl Integer {
    /// Parse an optionally signed run of ASCII digits.
    pub fn parse(text: &str) -> Option<Self> {
        let (negative, digits) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let magnitude = digits.trim_start_matches('0');
        let canonical = if magnitude.is_empty() {
            "0".to_string()
        } else if negative {
            format!("-{magnitude}")
        } else {
            magnitude.to_string()
        };
        Some(Integer(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl From<i64> for Integer {
    fn from(i: i64) -> Self {
        Integer(i.to_string())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.to_i64() {
            Some(i) => serializer.serialize_i64(i),
            // Wider values go out digit for digit through serde_json's
            // arbitrary-precision number.
            None => {
                let number: serde_json::Number =
                    self.0.parse().map_err(serde::ser::Error::custom)?;
                number.serialize(serializer)
            }
        }
    }
}

/// A scalar value classified from a raw CSV cell.
#[derive(Debug, Clone, PartialEq)]
pub enum InferredValue {
    /// `true` / `false`, matched case-insensitively.
    Boolean(bool),
    /// Base-10 integer, kept exactly whatever its size.
    Integer(Integer),
    /// Floating-point number. Always finite.
    Float(f64),
    /// Anything else, trimmed.
    String(String),
}

impl InferredValue {
    /// Shorthand for an integer value that fits in an `i64`.
    pub fn integer(i: i64) -> Self {
        InferredValue::Integer(Integer::from(i))
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            InferredValue::Boolean(_) => "boolean",
            InferredValue::Integer(_) => "integer",
            InferredValue::Float(_) => "float",
            InferredValue::String(_) => "string",
        }
    }

    /// Render the value the way it appears as a JSON object key.
    ///
    /// Numbers and booleans use their JSON text, strings are used verbatim.
    pub fn to_json_key(&self) -> String {
        match self {
            InferredValue::Boolean(b) => b.to_string(),
            InferredValue::Integer(i) => i.to_string(),
            InferredValue::Float(f) => float_json_text(*f),
            InferredValue::String(s) => s.clone(),
        }
    }
}

/// JSON text for a finite float, matching what `serde_json` emits for it.
fn float_json_text(f: f64) -> String {
    serde_json::Number::from_f64(f)
        .map(|n| n.to_string())
        .unwrap_or_else(|| f.to_string())
}

impl fmt::Display for InferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_key())
    }
}

impl Serialize for InferredValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            InferredValue::Boolean(b) => serializer.serialize_bool(*b),
            InferredValue::Integer(i) => i.serialize(serializer),
            InferredValue::Float(f) => serializer.serialize_f64(*f),
            InferredValue::String(s) => serializer.serialize_str(s),
        }
    }
}

/// The value stored under a record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single inferred scalar.
    Scalar(InferredValue),
    /// A non-empty sequence reconstructed from an array column.
    Array(Vec<InferredValue>),
}

impl From<InferredValue> for FieldValue {
    fn from(value: InferredValue) -> Self {
        FieldValue::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_canonical_text() {
        assert_eq!(Integer::parse("007").unwrap().as_str(), "7");
        assert_eq!(Integer::parse("+5").unwrap().as_str(), "5");
        assert_eq!(Integer::parse("-0").unwrap().as_str(), "0");
        assert_eq!(Integer::parse("-000").unwrap().as_str(), "0");
        assert_eq!(Integer::parse("-0012").unwrap().as_str(), "-12");
        assert_eq!(
            Integer::parse("00000000000000000000123456789012345678901234567890")
                .unwrap()
                .as_str(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_integer_rejects_non_digits() {
        assert!(Integer::parse("").is_none());
        assert!(Integer::parse("-").is_none());
        assert!(Integer::parse("+-1").is_none());
        assert!(Integer::parse("1.0").is_none());
        assert!(Integer::parse("1e3").is_none());
        assert!(Integer::parse(" 1").is_none());
        assert!(Integer::parse("١٢").is_none());
    }

    #[test]
    fn test_integer_i64_bounds() {
        assert_eq!(Integer::parse("9223372036854775807").unwrap().to_i64(), Some(i64::MAX));
        assert_eq!(Integer::parse("-9223372036854775808").unwrap().to_i64(), Some(i64::MIN));
        assert_eq!(Integer::parse("9223372036854775808").unwrap().to_i64(), None);
    }

    #[test]
    fn test_json_key_rendering() {
        assert_eq!(InferredValue::integer(1).to_json_key(), "1");
        assert_eq!(InferredValue::integer(-42).to_json_key(), "-42");
        assert_eq!(InferredValue::Float(3.0).to_json_key(), "3.0");
        assert_eq!(InferredValue::Float(0.5).to_json_key(), "0.5");
        assert_eq!(InferredValue::Boolean(true).to_json_key(), "true");
        assert_eq!(InferredValue::String("x".into()).to_json_key(), "x");
    }

    #[test]
    fn test_serialize_scalars() {
        let json = serde_json::to_string(&vec![
            InferredValue::Boolean(false),
            InferredValue::integer(7),
            InferredValue::Float(3.14),
            InferredValue::String("café".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[false,7,3.14,"café"]"#);
    }

    #[test]
    fn test_serialize_wide_integers_exactly() {
        let values: Vec<InferredValue> = [
            "18446744073709551615",
            "-99999999999999999999999999999999999999999",
        ]
        .iter()
        .map(|text| InferredValue::Integer(Integer::parse(text).unwrap()))
        .collect();
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            "[18446744073709551615,-99999999999999999999999999999999999999999]"
        );
        assert_eq!(
            serde_json::to_value(&values[0]).unwrap().to_string(),
            "18446744073709551615"
        );
    }

    #[test]
    fn test_serialize_field_values() {
        let scalar = FieldValue::from(InferredValue::integer(1));
        let array = FieldValue::Array(vec![
            InferredValue::String("a".into()),
            InferredValue::integer(2),
        ]);
        assert_eq!(serde_json::to_string(&scalar).unwrap(), "1");
        assert_eq!(serde_json::to_string(&array).unwrap(), r#"["a",2]"#);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(InferredValue::integer(1).type_name(), "integer");
        assert_eq!(InferredValue::Float(1.0).type_name(), "float");
        assert_eq!(InferredValue::String(String::new()).type_name(), "string");
    }
}
