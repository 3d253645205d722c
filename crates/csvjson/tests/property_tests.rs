//! Property-based tests for type inference and record assembly.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p csvjson --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p csvjson --test property_tests
//! ```

use proptest::prelude::*;

use csvjson::{
    convert_table, infer, reconstruct_array, ArrayConfig, DataTable, FieldValue, InferredValue,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Optional surrounding whitespace.
fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Words that must never come back as a number or boolean.
fn plain_word() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z_ ]{0,20}".prop_filter("not a reserved word", |s| {
        let lower = s.trim().to_ascii_lowercase();
        !matches!(
            lower.as_str(),
            "true" | "false" | "nan" | "inf" | "infinity"
        )
    })
}

/// Cells that are empty after trimming.
fn blank_cell() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

/// Cells that are non-empty after trimming.
fn filled_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<i64>().prop_map(|i| i.to_string()),
        "[a-z]{1,8}",
        Just("TRUE".to_string()),
        "[0-9]{1,4}\\.[0-9]{1,4}",
    ]
}

fn table(headers: Vec<String>, rows: Vec<Vec<String>>) -> DataTable {
    DataTable::new(headers, rows)
}

// =============================================================================
// Scalar Inference Properties
// =============================================================================

mod scalar_tests {
    use super::*;

    proptest! {
        /// Inference never panics on arbitrary input.
        #[test]
        fn never_panics(s in any::<String>()) {
            let _ = infer(&s);
        }

        /// Any casing of true/false is a boolean.
        #[test]
        fn booleans_any_case(word in "[tT][rR][uU][eE]|[fF][aA][lL][sS][eE]", pre in padding(), post in padding()) {
            let expected = word.eq_ignore_ascii_case("true");
            prop_assert_eq!(infer(&format!("{pre}{word}{post}")), InferredValue::Boolean(expected));
        }

        /// Canonical integers round-trip.
        #[test]
        fn integers_round_trip(i in any::<i64>(), pre in padding(), post in padding()) {
            prop_assert_eq!(infer(&format!("{pre}{i}{post}")), InferredValue::integer(i));
        }

        /// Integers too wide for 64 bits keep every digit.
        #[test]
        fn wide_integers_exact(sign in "[-+]?", zeros in "0{0,3}", digits in "[1-9][0-9]{19,60}") {
            let value = infer(&format!("{sign}{zeros}{digits}"));
            let expected = if sign == "-" { format!("-{digits}") } else { digits.clone() };
            prop_assert_eq!(value.type_name(), "integer");
            prop_assert_eq!(value.to_json_key(), expected.clone());
            prop_assert_eq!(serde_json::to_string(&value).unwrap(), expected);
        }

        /// Underscore-grouped digits read as the plain number.
        #[test]
        fn grouped_digits_are_integers(i in any::<i64>()) {
            let digits = i.unsigned_abs().to_string();
            let grouped: Vec<String> = digits.as_bytes().rchunks(3).rev()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect();
            let sign = if i < 0 { "-" } else { "" };
            prop_assert_eq!(infer(&format!("{sign}{}", grouped.join("_"))), InferredValue::integer(i));
        }

        /// Leading zeros and an explicit plus sign still give an integer.
        #[test]
        fn integers_with_zeros_and_sign(i in 0i64..1_000_000, zeros in 0usize..4) {
            let text = format!("+{}{}", "0".repeat(zeros), i);
            prop_assert_eq!(infer(&text), InferredValue::integer(i));
        }

        /// Decimal-point and exponent forms are floats.
        #[test]
        fn decimals_are_floats(whole in 0u32..100_000, frac in 0u32..100_000) {
            let text = format!("{whole}.{frac}");
            let expected: f64 = text.parse().unwrap();
            prop_assert_eq!(infer(&text), InferredValue::Float(expected));
        }

        #[test]
        fn exponent_forms_are_floats(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
            let text = format!("{f:e}");
            prop_assert_eq!(infer(&text), InferredValue::Float(f));
        }

        /// Everything else comes back as the trimmed input.
        #[test]
        fn other_strings_unchanged(word in plain_word(), pre in padding(), post in padding()) {
            let raw = format!("{pre}{word}{post}");
            prop_assert_eq!(infer(&raw), InferredValue::String(raw.trim().to_string()));
        }

        /// Inferring a string result again yields the same string.
        #[test]
        fn string_results_are_stable(s in any::<String>()) {
            if let InferredValue::String(text) = infer(&s) {
                prop_assert_eq!(infer(&text), InferredValue::String(text.clone()));
            }
        }
    }
}

// =============================================================================
// Array Reconstruction Properties
// =============================================================================

mod array_tests {
    use super::*;

    proptest! {
        /// Cells made only of separators and whitespace produce no array.
        #[test]
        fn blank_arrays_omitted(pieces in prop::collection::vec(blank_cell(), 0..6)) {
            let raw = pieces.join(",");
            prop_assert!(reconstruct_array("JA_x", &raw, &ArrayConfig::default()).is_none());
        }

        /// Every non-blank piece survives, in order.
        #[test]
        fn pieces_kept_in_order(pieces in prop::collection::vec(plain_word().prop_map(|w| w.trim().to_string()), 1..8)) {
            let raw = pieces.join(" , ");
            let field = reconstruct_array("JA_x", &raw, &ArrayConfig::default()).unwrap();
            let expected: Vec<_> = pieces.iter().map(|p| InferredValue::String(p.clone())).collect();
            prop_assert_eq!(field.name, "x");
            prop_assert_eq!(field.values, expected);
        }

        /// Columns without the prefix are never arrays.
        #[test]
        fn unprefixed_columns_ignored(name in "[a-z]{1,10}", raw in ".{0,20}") {
            prop_assert!(reconstruct_array(&name, &raw, &ArrayConfig::default()).is_none());
        }
    }
}

// =============================================================================
// Record Assembly Properties
// =============================================================================

mod assembly_tests {
    use super::*;

    proptest! {
        /// Exactly the non-blank, non-key columns appear in the record.
        #[test]
        fn blank_cells_absent(cells in prop::collection::vec(prop_oneof![blank_cell(), filled_cell()], 1..8)) {
            let mut headers = vec!["id".to_string()];
            headers.extend((0..cells.len()).map(|i| format!("c{i}")));
            let mut row = vec!["key".to_string()];
            row.extend(cells.iter().cloned());

            let (result, _) = convert_table(&table(headers, vec![row]), &ArrayConfig::default()).unwrap();
            let record = result.get("key").unwrap();

            let expected: Vec<String> = cells
                .iter()
                .enumerate()
                .filter(|(_, c)| !c.trim().is_empty())
                .map(|(i, _)| format!("c{i}"))
                .collect();
            let actual: Vec<String> = record.keys().cloned().collect();
            prop_assert_eq!(actual, expected);
            prop_assert!(record.values().all(|v| matches!(v, FieldValue::Scalar(_))));
        }

        /// The later of two rows with an equal key fully replaces the earlier.
        #[test]
        fn later_row_wins(first in filled_cell(), second in filled_cell(), other in filled_cell()) {
            let headers = vec!["id".to_string(), "a".to_string(), "b".to_string()];
            let rows = vec![
                vec!["k".to_string(), first, other],
                vec!["k".to_string(), second.clone(), String::new()],
            ];

            let (result, stats) = convert_table(&table(headers, rows), &ArrayConfig::default()).unwrap();
            prop_assert_eq!(result.len(), 1);
            prop_assert_eq!(stats.overwritten, 1);

            let record = result.get("k").unwrap();
            let expected = FieldValue::Scalar(infer(&second));
            prop_assert_eq!(record.len(), 1);
            prop_assert_eq!(record.get("a"), Some(&expected));
        }

        /// Distinct wide integer keys never collapse into one entry.
        #[test]
        fn wide_integer_keys_distinct(base in "[1-9][0-9]{19,30}", last in 0u8..9) {
            let first = format!("{base}{last}");
            let second = format!("{base}{}", last + 1);
            let headers = vec!["id".to_string(), "v".to_string()];
            let rows = vec![
                vec![first.clone(), "a".to_string()],
                vec![second.clone(), "b".to_string()],
            ];

            let (result, stats) = convert_table(&table(headers, rows), &ArrayConfig::default()).unwrap();
            prop_assert_eq!(result.len(), 2);
            prop_assert_eq!(stats.overwritten, 0);
            prop_assert_eq!(result.keys().collect::<Vec<_>>(), vec![first.as_str(), second.as_str()]);
        }

        /// One entry per distinct key, whatever the row count.
        #[test]
        fn one_entry_per_key(keys in prop::collection::vec(0i64..5, 0..20)) {
            let headers = vec!["id".to_string(), "v".to_string()];
            let rows: Vec<Vec<String>> = keys.iter().map(|k| vec![k.to_string(), "x".to_string()]).collect();

            let (result, stats) = convert_table(&table(headers, rows), &ArrayConfig::default()).unwrap();
            let mut distinct = keys.clone();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(result.len(), distinct.len());
            prop_assert_eq!(stats.rows, keys.len());
        }
    }
}
