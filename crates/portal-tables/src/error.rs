//! Error types for table configuration

use thiserror::Error;

/// Table configuration error type
///
/// These errors can only arise while declaring a table's columns, filters,
/// and page size. Once a [`TableView`](crate::table::TableView) has been
/// built, every interaction degrades to a safe default instead of failing.
#[derive(Debug, Error)]
pub enum TableError {
	/// Two columns were declared with the same key
	#[error("Duplicate column key '{0}'")]
	DuplicateColumn(String),

	/// Two filters were declared with the same key
	#[error("Duplicate filter key '{0}'")]
	DuplicateFilter(String),

	/// Page size must be a positive integer
	#[error("Page size must be at least 1")]
	InvalidPageSize,

	/// A default sort was requested on an undeclared column
	#[error("Unknown column '{0}'")]
	UnknownColumn(String),

	/// A default sort was requested on a column marked not sortable
	#[error("Column '{0}' is not sortable")]
	NotSortable(String),

	/// Export serialization failed
	#[cfg(feature = "export")]
	#[error("Export failed: {0}")]
	Export(String),
}

/// Result type for table configuration operations
pub type TableResult<T> = Result<T, TableError>;
