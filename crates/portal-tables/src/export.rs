//! Table export (requires the `export` feature)
//!
//! Exports the filtered and sorted view — every matching row, not just the
//! current page — using the declared columns. CSV cells carry the rendered
//! value; JSON carries the raw field values restricted to declared columns.

use crate::error::{TableError, TableResult};
use crate::table::TableView;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	/// JSON array of objects with raw field values
	#[default]
	Json,
	/// CSV with a header row of column labels and rendered cell values
	Csv,
}

impl TableView {
	/// Exports the filtered and sorted rows in the given format
	///
	/// # Errors
	///
	/// Returns [`TableError::Export`] when serialization fails.
	///
	/// # Examples
	///
	/// ```
	/// use portal_tables::column::ColumnDescriptor;
	/// use portal_tables::export::ExportFormat;
	/// use portal_tables::table::TableView;
	/// use serde_json::json;
	/// use std::collections::HashMap;
	///
	/// let view = TableView::builder()
	///     .records(vec![HashMap::from([("title".to_string(), json!("Calculus I"))])])
	///     .column(ColumnDescriptor::new("title"))
	///     .build()
	///     .unwrap();
	///
	/// let csv = view.export(ExportFormat::Csv).unwrap();
	/// assert_eq!(csv, "Title\nCalculus I\n");
	/// ```
	pub fn export(&self, format: ExportFormat) -> TableResult<String> {
		match format {
			ExportFormat::Json => self.export_json(),
			ExportFormat::Csv => self.export_csv(),
		}
	}

	fn export_json(&self) -> TableResult<String> {
		let rows: Vec<Value> = self
			.filtered_sorted()
			.into_iter()
			.map(|record| {
				let fields: Map<String, Value> = self
					.columns()
					.iter()
					.filter_map(|c| {
						record.get(c.key()).map(|v| (c.key().to_string(), v.clone()))
					})
					.collect();
				Value::Object(fields)
			})
			.collect();
		serde_json::to_string_pretty(&rows).map_err(|e| TableError::Export(e.to_string()))
	}

	fn export_csv(&self) -> TableResult<String> {
		let mut writer = csv::Writer::from_writer(Vec::new());
		writer
			.write_record(self.columns().iter().map(|c| c.display_label()))
			.map_err(|e| TableError::Export(e.to_string()))?;
		for record in self.filtered_sorted() {
			writer
				.write_record(self.columns().iter().map(|c| c.render(&record)))
				.map_err(|e| TableError::Export(e.to_string()))?;
		}
		let bytes = writer
			.into_inner()
			.map_err(|e| TableError::Export(e.to_string()))?;
		String::from_utf8(bytes).map_err(|e| TableError::Export(e.to_string()))
	}
}
