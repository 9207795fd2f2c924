//! Row inclusion predicates
//!
//! Free-text search runs across every string-typed column value; active
//! filters are combined with AND semantics. Both predicates treat malformed
//! input (unknown keys, missing fields, type mismatches) as a safe default
//! rather than an error.

use crate::column::ColumnDescriptor;
use crate::filter::{FilterDescriptor, FilterKind, FilterValue};
use crate::record::Record;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Returns true when the search term matches the record
///
/// The term matches when it is a case-insensitive substring of at least one
/// declared column's string-typed raw value. Numbers, booleans, and nested
/// values never substring-match. The empty term always matches.
pub fn search_matches(record: &Record, columns: &[ColumnDescriptor], term: &str) -> bool {
	if term.is_empty() {
		return true;
	}
	let needle = term.to_lowercase();
	columns.iter().any(|column| {
		matches!(
			record.get(column.key()),
			Some(Value::String(s)) if s.to_lowercase().contains(&needle)
		)
	})
}

/// Returns true when every active filter passes for the record
///
/// Matching semantics depend on the declared filter kind:
/// - `Boolean`: an active `true` requires a truthy field value; an active
///   `false` removes the constraint instead of requiring falsy values.
/// - `Select`: the field value must equal the active value exactly as a
///   JSON string, with no coercion.
/// - `Text`: the field value must be a string containing the active value
///   case-insensitively.
///
/// Active keys with no declared descriptor are ignored, accommodating
/// consumers whose filter state has drifted from the declared set.
pub fn filters_match(
	record: &Record,
	filters: &[FilterDescriptor],
	active: &HashMap<String, FilterValue>,
) -> bool {
	active.iter().all(|(key, value)| {
		let Some(descriptor) = filters.iter().find(|f| f.key() == key) else {
			debug!(key = %key, "ignoring active filter with no declared descriptor");
			return true;
		};
		match (descriptor.kind(), value) {
			// Unchecking the box removes the constraint rather than
			// requiring non-truthy values.
			(FilterKind::Boolean, FilterValue::Bool(false)) => true,
			(FilterKind::Boolean, FilterValue::Bool(true)) => {
				record.get(key).is_some_and(is_truthy)
			}
			(FilterKind::Select, FilterValue::Text(wanted)) => {
				matches!(record.get(key), Some(Value::String(s)) if s == wanted)
			}
			(FilterKind::Text, FilterValue::Text(wanted)) => {
				matches!(
					record.get(key),
					Some(Value::String(s)) if s.to_lowercase().contains(&wanted.to_lowercase())
				)
			}
			// Value variant does not fit the declared kind; treat the
			// entry as inactive.
			(kind, value) => {
				debug!(key = %key, ?kind, ?value, "ignoring active filter with mismatched value");
				true
			}
		}
	})
}

/// JSON truthiness for boolean filters
///
/// `false`, `null`, `0`, and the empty string are falsy; arrays and objects
/// are always truthy.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn columns() -> Vec<ColumnDescriptor> {
		vec![
			ColumnDescriptor::new("name"),
			ColumnDescriptor::new("price"),
			ColumnDescriptor::new("in_stock"),
		]
	}

	fn product(name: &str, price: i64, in_stock: bool) -> Record {
		Record::from([
			("name".to_string(), json!(name)),
			("price".to_string(), json!(price)),
			("in_stock".to_string(), json!(in_stock)),
		])
	}

	#[rstest]
	fn empty_term_matches_everything() {
		assert!(search_matches(
			&product("Notebook Set", 12, true),
			&columns(),
			""
		));
	}

	#[rstest]
	#[case("cal", true)]
	#[case("CALC", true)]
	#[case("notebook", false)]
	fn search_is_case_insensitive_substring(#[case] term: &str, #[case] expected: bool) {
		let record = product("Scientific Calculator", 25, true);
		assert_eq!(search_matches(&record, &columns(), term), expected);
	}

	#[rstest]
	fn numbers_never_substring_match() {
		// "25" appears in the price but the price is not a string.
		let record = product("Scientific Calculator", 25, true);
		assert!(!search_matches(&record, &columns(), "25"));
	}

	#[rstest]
	fn undeclared_fields_are_invisible_to_search() {
		let mut record = product("Notebook Set", 12, true);
		record.insert("internal_note".to_string(), json!("clearance"));
		assert!(!search_matches(&record, &columns(), "clearance"));
	}

	#[rstest]
	fn no_active_filters_passes_all() {
		let filters = vec![FilterDescriptor::boolean("in_stock")];
		assert!(filters_match(
			&product("Notebook Set", 12, false),
			&filters,
			&HashMap::new()
		));
	}

	#[rstest]
	fn boolean_true_requires_truthy_field() {
		let filters = vec![FilterDescriptor::boolean("in_stock")];
		let active = HashMap::from([("in_stock".to_string(), FilterValue::Bool(true))]);
		assert!(filters_match(&product("a", 1, true), &filters, &active));
		assert!(!filters_match(&product("b", 1, false), &filters, &active));
	}

	#[rstest]
	fn boolean_false_is_no_constraint() {
		let filters = vec![FilterDescriptor::boolean("in_stock")];
		let active = HashMap::from([("in_stock".to_string(), FilterValue::Bool(false))]);
		assert!(filters_match(&product("a", 1, true), &filters, &active));
		assert!(filters_match(&product("b", 1, false), &filters, &active));
	}

	#[rstest]
	fn select_matches_exactly_without_coercion() {
		let filters = vec![FilterDescriptor::select("price")];
		let active = HashMap::from([("price".to_string(), FilterValue::Text("12".to_string()))]);
		// Numeric field never equals a string option.
		assert!(!filters_match(&product("a", 12, true), &filters, &active));

		let mut record = product("a", 12, true);
		record.insert("price".to_string(), json!("12"));
		assert!(filters_match(&record, &filters, &active));
	}

	#[rstest]
	fn text_filter_contains_case_insensitively() {
		let filters = vec![FilterDescriptor::text("name")];
		let active = HashMap::from([("name".to_string(), FilterValue::Text("SET".to_string()))]);
		assert!(filters_match(&product("Notebook Set", 12, true), &filters, &active));
		assert!(!filters_match(&product("Calculator", 25, true), &filters, &active));
	}

	#[rstest]
	fn conjunction_requires_every_filter() {
		let filters = vec![
			FilterDescriptor::text("name"),
			FilterDescriptor::boolean("in_stock"),
		];
		let active = HashMap::from([
			("name".to_string(), FilterValue::Text("note".to_string())),
			("in_stock".to_string(), FilterValue::Bool(true)),
		]);
		assert!(filters_match(&product("Notebook Set", 12, true), &filters, &active));
		assert!(!filters_match(&product("Notebook Set", 12, false), &filters, &active));
	}

	#[rstest]
	fn undeclared_active_key_is_ignored() {
		let filters = vec![FilterDescriptor::text("name")];
		let active = HashMap::from([("ghost".to_string(), FilterValue::Text("x".to_string()))]);
		assert!(filters_match(&product("Notebook Set", 12, true), &filters, &active));
	}

	#[rstest]
	#[case(json!(null), false)]
	#[case(json!(false), false)]
	#[case(json!(0), false)]
	#[case(json!(""), false)]
	#[case(json!(true), true)]
	#[case(json!(3), true)]
	#[case(json!("yes"), true)]
	#[case(json!([]), true)]
	fn truthiness_follows_json_conventions(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_truthy(&value), expected);
	}
}
