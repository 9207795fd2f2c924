//! Interaction state owned by one table instance

use crate::filter::FilterValue;
use crate::sort::SortConfig;
use serde::Serialize;
use std::collections::HashMap;

/// The mutable interaction state of a table view
///
/// One `ViewState` is created per table instance and mutated only through
/// the transition operations of [`TableView`](crate::table::TableView). An
/// absent `active_filters` entry means "no constraint"; a `None` sort means
/// input order is preserved.
#[derive(Debug, Clone, Serialize)]
pub struct ViewState {
	/// Free-text search term, empty when inactive
	pub search_term: String,
	/// Active filter values keyed by filter field
	pub active_filters: HashMap<String, FilterValue>,
	/// Active sort column and direction
	pub sort: Option<SortConfig>,
	/// Current page number (1-indexed)
	pub page: usize,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			search_term: String::new(),
			active_filters: HashMap::new(),
			sort: None,
			page: 1,
		}
	}
}
