//! Column descriptors
//!
//! A column declares how one field of a [`Record`] is labeled, whether it
//! participates in sorting, and how it is rendered for display or export.
//! Search, filtering, and sorting always operate on the raw field value;
//! the renderer is a presentation hook only.

use crate::record::Record;
use crate::text::humanize_label;
use serde_json::Value;
use std::fmt::Debug;

/// Renderer callback turning a record into a display string for one cell
pub type CellRenderer = Box<dyn Fn(&Record) -> String + Send + Sync>;

/// Declarative description of one table column
///
/// # Examples
///
/// ```
/// use portal_tables::column::ColumnDescriptor;
///
/// let column = ColumnDescriptor::new("title")
///     .label("Book Title")
///     .sortable(true)
///     .width(40);
/// assert_eq!(column.key(), "title");
/// assert_eq!(column.display_label(), "Book Title");
/// ```
pub struct ColumnDescriptor {
	key: String,
	label: String,
	sortable: bool,
	width: Option<u16>,
	renderer: Option<CellRenderer>,
}

impl ColumnDescriptor {
	/// Creates a column for the given field key
	///
	/// The label defaults to a humanized form of the key and the column is
	/// sortable unless declared otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use portal_tables::column::ColumnDescriptor;
	///
	/// let column = ColumnDescriptor::new("created_at");
	/// assert_eq!(column.display_label(), "Created at");
	/// assert!(column.is_sortable());
	/// ```
	pub fn new(key: impl Into<String>) -> Self {
		let key = key.into();
		let label = humanize_label(&key);
		Self {
			key,
			label,
			sortable: true,
			width: None,
			renderer: None,
		}
	}

	/// Sets the display label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Sets whether this column can be sorted
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets a display width hint, in characters
	pub fn width(mut self, width: u16) -> Self {
		self.width = Some(width);
		self
	}

	/// Sets a custom cell renderer
	///
	/// The renderer receives the whole record so derived cells (full name,
	/// formatted price) can combine fields. It never influences search,
	/// filtering, or sorting.
	pub fn renderer(mut self, renderer: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
		self.renderer = Some(Box::new(renderer));
		self
	}

	/// Returns the field key of this column
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns the display label of this column
	pub fn display_label(&self) -> &str {
		&self.label
	}

	/// Returns whether this column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns the display width hint, if declared
	pub fn width_hint(&self) -> Option<u16> {
		self.width
	}

	/// Renders the cell value for the given record
	///
	/// Uses the custom renderer when one is declared, otherwise a plain
	/// string form of the raw field value (empty for a missing field).
	pub fn render(&self, record: &Record) -> String {
		if let Some(renderer) = &self.renderer {
			return renderer(record);
		}
		match record.get(&self.key) {
			None | Some(Value::Null) => String::new(),
			Some(Value::String(s)) => s.clone(),
			Some(other) => other.to_string(),
		}
	}
}

impl Debug for ColumnDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ColumnDescriptor")
			.field("key", &self.key)
			.field("label", &self.label)
			.field("sortable", &self.sortable)
			.field("width", &self.width)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn book() -> Record {
		Record::from([
			("title".to_string(), json!("Linear Algebra")),
			("copies".to_string(), json!(4)),
			("available".to_string(), json!(true)),
		])
	}

	#[rstest]
	fn default_label_is_humanized() {
		let column = ColumnDescriptor::new("created_at");
		assert_eq!(column.display_label(), "Created at");
	}

	#[rstest]
	fn renders_raw_values_without_renderer() {
		let column = ColumnDescriptor::new("title");
		assert_eq!(column.render(&book()), "Linear Algebra");

		let copies = ColumnDescriptor::new("copies");
		assert_eq!(copies.render(&book()), "4");

		let missing = ColumnDescriptor::new("isbn");
		assert_eq!(missing.render(&book()), "");
	}

	#[rstest]
	fn custom_renderer_overrides_raw_value() {
		let column = ColumnDescriptor::new("copies")
			.renderer(|record| format!("{} in stock", record.get("copies").unwrap()));
		assert_eq!(column.render(&book()), "4 in stock");
	}

	#[rstest]
	fn builder_flags_round_trip() {
		let column = ColumnDescriptor::new("title").sortable(false).width(32);
		assert!(!column.is_sortable());
		assert_eq!(column.width_hint(), Some(32));
	}
}
