//! The table view engine
//!
//! [`TableView`] composes the search predicate, filter predicate set, sort
//! comparator, and paginator into one render contract, and owns the
//! interaction state for a single table instance. All operations are
//! synchronous transformations over the full in-memory record collection;
//! after construction, none of them fails.

use crate::column::ColumnDescriptor;
use crate::error::{TableError, TableResult};
use crate::filter::{FilterDescriptor, FilterValue};
use crate::paginate::{Page, clamp_page, paginate};
use crate::predicate::{filters_match, search_matches};
use crate::record::Record;
use crate::sort::{SortConfig, SortOrder, compare_values};
use crate::state::ViewState;
use std::collections::HashSet;
use tracing::debug;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Builder for [`TableView`]
///
/// Collects the static configuration (columns, filters, page size) that is
/// fixed for the lifetime of the view. Validation happens once in
/// [`build`](Self::build); the resulting view never fails at runtime.
#[derive(Debug, Default)]
pub struct TableViewBuilder {
	records: Vec<Record>,
	columns: Vec<ColumnDescriptor>,
	filters: Vec<FilterDescriptor>,
	page_size: Option<usize>,
	default_sort: Option<SortConfig>,
}

impl TableViewBuilder {
	/// Sets the initial record collection
	pub fn records(mut self, records: Vec<Record>) -> Self {
		self.records = records;
		self
	}

	/// Appends one column descriptor
	pub fn column(mut self, column: ColumnDescriptor) -> Self {
		self.columns.push(column);
		self
	}

	/// Appends one filter descriptor
	pub fn filter(mut self, filter: FilterDescriptor) -> Self {
		self.filters.push(filter);
		self
	}

	/// Sets the page size (default 10)
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = Some(page_size);
		self
	}

	/// Sets an initial sort applied before any user interaction
	pub fn default_sort(mut self, key: impl Into<String>, order: SortOrder) -> Self {
		self.default_sort = Some(SortConfig {
			key: key.into(),
			order,
		});
		self
	}

	/// Validates the configuration and builds the view
	///
	/// # Errors
	///
	/// Returns [`TableError`] for duplicate column or filter keys, a zero
	/// page size, or a default sort on an unknown or non-sortable column.
	pub fn build(self) -> TableResult<TableView> {
		let mut seen = HashSet::new();
		for column in &self.columns {
			if !seen.insert(column.key().to_string()) {
				return Err(TableError::DuplicateColumn(column.key().to_string()));
			}
		}
		let mut seen = HashSet::new();
		for filter in &self.filters {
			if !seen.insert(filter.key().to_string()) {
				return Err(TableError::DuplicateFilter(filter.key().to_string()));
			}
		}

		let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
		if page_size == 0 {
			return Err(TableError::InvalidPageSize);
		}

		if let Some(sort) = &self.default_sort {
			let column = self
				.columns
				.iter()
				.find(|c| c.key() == sort.key)
				.ok_or_else(|| TableError::UnknownColumn(sort.key.clone()))?;
			if !column.is_sortable() {
				return Err(TableError::NotSortable(sort.key.clone()));
			}
		}

		Ok(TableView {
			records: self.records,
			columns: self.columns,
			filters: self.filters,
			page_size,
			state: ViewState {
				sort: self.default_sort,
				..ViewState::default()
			},
		})
	}
}

/// A searched, filtered, sorted, paginated view over a record collection
///
/// The view is origin-agnostic: library books, store orders, and user
/// accounts all use the same engine with different descriptors. Interaction
/// state lives inside the view and changes only through the operations
/// below; the derived page is recomputed from scratch on every call, which
/// is a deliberate fit for admin-facing collections of a few hundred to a
/// few thousand rows.
///
/// # Examples
///
/// ```
/// use portal_tables::column::ColumnDescriptor;
/// use portal_tables::table::TableView;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let records = vec![
///     HashMap::from([("name".to_string(), json!("Scientific Calculator"))]),
///     HashMap::from([("name".to_string(), json!("Notebook Set"))]),
/// ];
/// let mut view = TableView::builder()
///     .records(records)
///     .column(ColumnDescriptor::new("name"))
///     .build()
///     .unwrap();
///
/// view.set_search_term("cal");
/// let page = view.visible_rows();
/// assert_eq!(page.total_count, 1);
/// assert_eq!(page.items[0]["name"], json!("Scientific Calculator"));
/// ```
#[derive(Debug)]
pub struct TableView {
	records: Vec<Record>,
	columns: Vec<ColumnDescriptor>,
	filters: Vec<FilterDescriptor>,
	page_size: usize,
	state: ViewState,
}

impl TableView {
	/// Creates a builder for a new table view
	pub fn builder() -> TableViewBuilder {
		TableViewBuilder::default()
	}

	/// Returns the declared columns, in declaration order
	pub fn columns(&self) -> &[ColumnDescriptor] {
		&self.columns
	}

	/// Returns the declared filters, in declaration order
	pub fn filters(&self) -> &[FilterDescriptor] {
		&self.filters
	}

	/// Returns the page size
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Returns the current interaction state
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	/// Replaces the record collection wholesale
	///
	/// Refreshes re-supply the full collection; the engine performs no
	/// partial updates or merges. The current page is re-clamped against
	/// the new filtered size, search, filters, and sort are kept.
	pub fn set_records(&mut self, records: Vec<Record>) {
		self.records = records;
		let count = self.filtered_count();
		self.state.page = clamp_page(self.state.page, count, self.page_size);
		debug!(records = self.records.len(), page = self.state.page, "records replaced");
	}

	/// Updates the search term and resets to the first page
	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.state.search_term = term.into();
		self.state.page = 1;
		debug!(term = %self.state.search_term, "search term changed");
	}

	/// Upserts or removes one active filter and resets to the first page
	///
	/// Passing `None` or an empty text value removes the entry, restoring
	/// "no constraint" for that key. Keys without a declared descriptor are
	/// stored but ignored during evaluation.
	pub fn set_filter(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
		let key = key.into();
		let inactive = match &value {
			None => true,
			Some(FilterValue::Text(t)) => t.is_empty(),
			Some(FilterValue::Bool(_)) => false,
		};
		if inactive {
			self.state.active_filters.remove(&key);
			debug!(key = %key, "filter removed");
		} else if let Some(value) = value {
			if !self.filters.iter().any(|f| f.key() == key) {
				debug!(key = %key, "activating filter with no declared descriptor");
			}
			self.state.active_filters.insert(key, value);
		}
		self.state.page = 1;
	}

	/// Clears the search term and every active filter, resets to page one
	pub fn clear_all_filters(&mut self) {
		self.state.search_term.clear();
		self.state.active_filters.clear();
		self.state.page = 1;
		debug!("all filters cleared");
	}

	/// Sorts by the given column, toggling direction on repeat selection
	///
	/// Selecting the currently-active sort column flips its direction;
	/// selecting a new column starts ascending. Unknown or non-sortable
	/// columns are a no-op.
	pub fn sort_by(&mut self, column_key: &str) {
		let sortable = self
			.columns
			.iter()
			.any(|c| c.key() == column_key && c.is_sortable());
		if !sortable {
			debug!(column_key, "ignoring sort on unknown or non-sortable column");
			return;
		}
		self.state.sort = Some(match self.state.sort.take() {
			Some(mut sort) if sort.key == column_key => {
				sort.order = sort.order.toggled();
				sort
			}
			_ => SortConfig::ascending(column_key),
		});
	}

	/// Sets an explicit sort column and direction
	///
	/// Used when the desired direction is known up front, as with the
	/// `-field` notation of a list query. Unknown or non-sortable columns
	/// are a no-op, like [`sort_by`](Self::sort_by).
	pub fn set_sort(&mut self, column_key: &str, order: SortOrder) {
		let sortable = self
			.columns
			.iter()
			.any(|c| c.key() == column_key && c.is_sortable());
		if !sortable {
			debug!(column_key, "ignoring sort on unknown or non-sortable column");
			return;
		}
		self.state.sort = Some(SortConfig {
			key: column_key.to_string(),
			order,
		});
	}

	/// Changes the page size and re-clamps the current page
	///
	/// A zero size is ignored; the page size stays positive.
	pub fn set_page_size(&mut self, page_size: usize) {
		if page_size == 0 {
			debug!("ignoring zero page size");
			return;
		}
		self.page_size = page_size;
		let count = self.filtered_count();
		self.state.page = clamp_page(self.state.page, count, self.page_size);
	}

	/// Navigates to the given page, clamped into the valid range
	pub fn go_to_page(&mut self, page: usize) {
		let count = self.filtered_count();
		self.state.page = clamp_page(page, count, self.page_size);
	}

	/// Derives the current page of visible rows with pagination metadata
	///
	/// Applies the search predicate, then the filter predicate set, then
	/// the sort comparator, then the paginator, in that fixed order. Pure
	/// derivation: calling it repeatedly yields the same page.
	pub fn visible_rows(&self) -> Page<Record> {
		paginate(self.filtered_sorted(), self.state.page, self.page_size)
	}

	/// Derives the full filtered and sorted sequence, unpaginated
	///
	/// This is the sequence the paginator slices; export and bulk actions
	/// operate on it directly.
	pub fn filtered_sorted(&self) -> Vec<Record> {
		let mut rows: Vec<Record> = self
			.records
			.iter()
			.filter(|r| search_matches(r, &self.columns, &self.state.search_term))
			.filter(|r| filters_match(r, &self.filters, &self.state.active_filters))
			.cloned()
			.collect();

		if let Some(sort) = &self.state.sort {
			rows.sort_by(|a, b| {
				let ordering = compare_values(a.get(&sort.key), b.get(&sort.key));
				match sort.order {
					SortOrder::Ascending => ordering,
					SortOrder::Descending => ordering.reverse(),
				}
			});
		}
		rows
	}

	fn filtered_count(&self) -> usize {
		self.records
			.iter()
			.filter(|r| search_matches(r, &self.columns, &self.state.search_term))
			.filter(|r| filters_match(r, &self.filters, &self.state.active_filters))
			.count()
	}
}
