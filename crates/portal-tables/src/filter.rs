//! Filter descriptors and active filter values
//!
//! A [`FilterDescriptor`] declares one filter control available on a table:
//! its field key, display label, input kind, and (for the select kind) the
//! option set. Active values are held separately in the view state; an
//! absent entry always means "no constraint", never a stored falsy value.

use crate::text::humanize_label;
use serde::{Deserialize, Serialize};

/// Input kind of a filter control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
	/// Free-text, case-insensitive containment match
	Text,
	/// Exact match against one of a declared option set
	Select,
	/// Checkbox constraining the field to truthy values
	Boolean,
}

/// One choice of a select-kind filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Stored value compared against the record field
	pub value: String,
	/// Display label for the choice
	pub label: String,
}

impl FilterOption {
	/// Creates an option from a stored value and display label
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Declarative description of one available filter control
///
/// # Examples
///
/// ```
/// use portal_tables::filter::{FilterDescriptor, FilterKind};
///
/// let status = FilterDescriptor::select("status")
///     .option("pending", "Pending")
///     .option("approved", "Approved");
/// assert_eq!(status.kind(), FilterKind::Select);
/// assert_eq!(status.options().len(), 2);
///
/// let visible = FilterDescriptor::boolean("is_visible").label("Visible only");
/// assert_eq!(visible.kind(), FilterKind::Boolean);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
	key: String,
	label: String,
	kind: FilterKind,
	options: Vec<FilterOption>,
}

impl FilterDescriptor {
	fn new(key: impl Into<String>, kind: FilterKind) -> Self {
		let key = key.into();
		let label = humanize_label(&key);
		Self {
			key,
			label,
			kind,
			options: Vec::new(),
		}
	}

	/// Creates a free-text filter for the given field key
	pub fn text(key: impl Into<String>) -> Self {
		Self::new(key, FilterKind::Text)
	}

	/// Creates a select filter for the given field key
	///
	/// Add choices with [`option`](Self::option); they are presented in
	/// declaration order.
	pub fn select(key: impl Into<String>) -> Self {
		Self::new(key, FilterKind::Select)
	}

	/// Creates a boolean filter for the given field key
	pub fn boolean(key: impl Into<String>) -> Self {
		Self::new(key, FilterKind::Boolean)
	}

	/// Sets the display label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Appends one select option
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.options.push(FilterOption::new(value, label));
		self
	}

	/// Returns the field key this filter constrains
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the display label
	pub fn display_label(&self) -> &str {
		&self.label
	}

	/// Returns the input kind
	pub fn kind(&self) -> FilterKind {
		self.kind
	}

	/// Returns the declared option set, in declaration order
	pub fn options(&self) -> &[FilterOption] {
		&self.options
	}
}

/// An active filter value held in the view state
///
/// The matching semantics depend on the declared [`FilterKind`] of the
/// filter the value is stored under, not on the value variant itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// Value of a text or select filter
	Text(String),
	/// Value of a boolean filter
	Bool(bool),
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		FilterValue::Text(value.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		FilterValue::Text(value)
	}
}

impl From<bool> for FilterValue {
	fn from(value: bool) -> Self {
		FilterValue::Bool(value)
	}
}
