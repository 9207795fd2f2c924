//! Sort configuration and the value comparator
//!
//! Values are ordered natively per type: numbers numerically, strings
//! lexicographically (or chronologically when both parse as RFC 3339
//! timestamps), booleans false before true. Mixed types fall back to a
//! fixed rank so sorting stays total, and records missing the sort field
//! order last. Sorting is always stable.

use chrono::DateTime;
use serde_json::Value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	/// Smallest value first
	Ascending,
	/// Largest value first
	Descending,
}

impl SortOrder {
	/// Returns the opposite direction
	///
	/// # Examples
	///
	/// ```
	/// use portal_tables::sort::SortOrder;
	///
	/// assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
	/// assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
	/// ```
	pub fn toggled(self) -> Self {
		match self {
			SortOrder::Ascending => SortOrder::Descending,
			SortOrder::Descending => SortOrder::Ascending,
		}
	}
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Column key the rows are ordered by
	pub key: String,
	/// Sort direction
	pub order: SortOrder,
}

impl SortConfig {
	/// Creates an ascending sort on the given column key
	pub fn ascending(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			order: SortOrder::Ascending,
		}
	}
}

/// Compares two optional field values with native per-type ordering
pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		// Missing fields sort last.
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => compare_present(a, b),
	}
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::Number(x), Value::Number(y)) => {
			let x = x.as_f64().unwrap_or(f64::NAN);
			let y = y.as_f64().unwrap_or(f64::NAN);
			x.partial_cmp(&y).unwrap_or(Ordering::Equal)
		}
		(Value::String(x), Value::String(y)) => compare_strings(x, y),
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		_ => type_rank(a).cmp(&type_rank(b)),
	}
}

/// Chronological ordering for timestamp representations, lexicographic
/// otherwise
fn compare_strings(a: &str, b: &str) -> Ordering {
	if let (Ok(x), Ok(y)) = (
		DateTime::parse_from_rfc3339(a),
		DateTime::parse_from_rfc3339(b),
	) {
		return x.cmp(&y);
	}
	a.cmp(b)
}

fn type_rank(value: &Value) -> u8 {
	match value {
		Value::Null => 5,
		Value::Bool(_) => 0,
		Value::Number(_) => 1,
		Value::String(_) => 2,
		Value::Array(_) => 3,
		Value::Object(_) => 4,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn numbers_order_numerically() {
		// Lexicographically "10" < "9"; numerically the reverse.
		assert_eq!(compare_values(Some(&json!(9)), Some(&json!(10))), Ordering::Less);
		assert_eq!(compare_values(Some(&json!(2.5)), Some(&json!(2.5))), Ordering::Equal);
	}

	#[rstest]
	fn strings_order_lexicographically() {
		assert_eq!(
			compare_values(Some(&json!("Alpha")), Some(&json!("Bravo"))),
			Ordering::Less
		);
	}

	#[rstest]
	fn rfc3339_strings_order_chronologically() {
		// Offset notation would mislead a lexicographic comparison: the
		// second instant is earlier despite the larger clock time.
		let earlier = json!("2024-06-01T12:00:00+00:00");
		let later = json!("2024-06-01T14:00:00+05:00");
		assert_eq!(compare_values(Some(&later), Some(&earlier)), Ordering::Less);
	}

	#[rstest]
	fn booleans_order_false_first() {
		assert_eq!(
			compare_values(Some(&json!(false)), Some(&json!(true))),
			Ordering::Less
		);
	}

	#[rstest]
	fn missing_fields_sort_last() {
		assert_eq!(compare_values(Some(&json!(1)), None), Ordering::Less);
		assert_eq!(compare_values(None, Some(&json!("a"))), Ordering::Greater);
		assert_eq!(compare_values(None, None), Ordering::Equal);
	}

	#[rstest]
	fn mixed_types_use_fixed_rank() {
		assert_eq!(
			compare_values(Some(&json!(true)), Some(&json!("text"))),
			Ordering::Less
		);
		assert_eq!(
			compare_values(Some(&json!(1)), Some(&json!("text"))),
			Ordering::Less
		);
	}

	#[rstest]
	fn toggling_twice_returns_to_ascending() {
		assert_eq!(SortOrder::Ascending.toggled().toggled(), SortOrder::Ascending);
	}
}
