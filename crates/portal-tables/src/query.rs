//! List query bridge for admin listing pages
//!
//! Admin pages drive every table uniformly through query-string shaped
//! parameters: `?search=alice&status=approved&sort_by=-created_at&page=2`.
//! [`ListQuery`] deserializes those parameters, [`TableView::apply_query`]
//! folds them through the engine's transition operations, and
//! [`TableView::list_response`] produces the serializable payload the
//! rendering layer consumes.

use crate::filter::{FilterKind, FilterOption, FilterValue};
use crate::record::Record;
use crate::sort::SortOrder;
use crate::table::TableView;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum page size a list query may request
///
/// Prevents memory exhaustion from oversized page requests; larger values
/// are clamped down to this bound.
pub const MAX_PAGE_SIZE: usize = 500;

/// Query parameters for a list view
///
/// Any parameter that is not `page`, `page_size`, `search`, or `sort_by`
/// is collected into `filters` as a field/value pair.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
	/// Page number (1-indexed)
	pub page: Option<usize>,
	/// Items per page, clamped to [`MAX_PAGE_SIZE`]
	pub page_size: Option<usize>,
	/// Free-text search term
	pub search: Option<String>,
	/// Sort field; prefix with `-` for descending (e.g. `-created_at`)
	pub sort_by: Option<String>,
	/// Filter field/value pairs
	#[serde(flatten)]
	pub filters: HashMap<String, String>,
}

/// Column metadata exposed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
	/// Field key
	pub field: String,
	/// Display label
	pub label: String,
	/// Whether the column is sortable
	pub sortable: bool,
	/// Display width hint, in characters
	#[serde(skip_serializing_if = "Option::is_none")]
	pub width: Option<u16>,
}

/// Available-filter metadata exposed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterInfo {
	/// Field key
	pub field: String,
	/// Display label
	pub label: String,
	/// Input kind of the filter control
	pub kind: FilterKind,
	/// Option set for select-kind filters
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<FilterOption>,
	/// Currently active value, if any
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_value: Option<FilterValue>,
}

/// Serializable list view payload
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
	/// Name of the listed model (e.g. "Book", "Order")
	pub model_name: String,
	/// Total count of filtered items across all pages
	pub count: usize,
	/// Current page
	pub page: usize,
	/// Items per page
	pub page_size: usize,
	/// Total pages
	pub total_pages: usize,
	/// 1-based index of the first item on this page, 0 when empty
	pub start_index: usize,
	/// 1-based index of the last item on this page, 0 when empty
	pub end_index: usize,
	/// Items on this page
	pub results: Vec<Record>,
	/// Column definitions for list display
	pub columns: Vec<ColumnInfo>,
	/// Available filters with their current values
	pub available_filters: Vec<FilterInfo>,
}

impl TableView {
	/// Folds list query parameters through the transition operations
	///
	/// Search and filters are applied first (resetting the page), then the
	/// sort, then the page size (clamped to [`MAX_PAGE_SIZE`]), then the
	/// requested page. Filter values are interpreted per the declared
	/// filter kind; for a boolean filter, `"true"`, `"1"`, and `"on"`
	/// activate the constraint and anything else deactivates it.
	pub fn apply_query(&mut self, query: &ListQuery) {
		if let Some(search) = &query.search {
			self.set_search_term(search.clone());
		}

		for (key, raw) in &query.filters {
			let kind = self
				.filters()
				.iter()
				.find(|f| f.key() == key.as_str())
				.map(|f| f.kind());
			let value = match kind {
				Some(FilterKind::Boolean) => {
					Some(FilterValue::Bool(matches!(raw.as_str(), "true" | "1" | "on")))
				}
				_ => Some(FilterValue::Text(raw.clone())),
			};
			self.set_filter(key.clone(), value);
		}

		if let Some(sort_by) = &query.sort_by {
			let (key, order) = match sort_by.strip_prefix('-') {
				Some(key) => (key, SortOrder::Descending),
				None => (sort_by.as_str(), SortOrder::Ascending),
			};
			self.set_sort(key, order);
		}

		if let Some(page_size) = query.page_size {
			self.set_page_size(page_size.clamp(1, MAX_PAGE_SIZE));
		}
		if let Some(page) = query.page {
			self.go_to_page(page);
		}
	}

	/// Builds the serializable list payload for the current state
	pub fn list_response(&self, model_name: impl Into<String>) -> ListResponse {
		let page = self.visible_rows();
		let columns = self
			.columns()
			.iter()
			.map(|c| ColumnInfo {
				field: c.key().to_string(),
				label: c.display_label().to_string(),
				sortable: c.is_sortable(),
				width: c.width_hint(),
			})
			.collect();
		let available_filters = self
			.filters()
			.iter()
			.map(|f| FilterInfo {
				field: f.key().to_string(),
				label: f.display_label().to_string(),
				kind: f.kind(),
				options: f.options().to_vec(),
				current_value: self.state().active_filters.get(f.key()).cloned(),
			})
			.collect();

		ListResponse {
			model_name: model_name.into(),
			count: page.total_count,
			page: page.number,
			page_size: page.page_size,
			total_pages: page.total_pages,
			start_index: page.start_index(),
			end_index: page.end_index(),
			results: page.items,
			columns,
			available_filters,
		}
	}
}
